//! CLI command handlers, one per file.

mod build_user_agent;
mod name;
mod user_agent;

pub use build_user_agent::run_build_user_agent;
pub use name::run_name;
pub use user_agent::run_user_agent;
