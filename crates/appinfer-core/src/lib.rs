pub mod config;
pub mod logging;

pub mod error;
pub mod http;
pub mod name;
pub mod platform;
pub mod user_agent;

pub use error::InferError;
pub use name::{resolve_name, NameParams, NameResolver, DEFAULT_APP_NAME};
pub use platform::Platform;
pub use user_agent::{
    build_user_agent, build_user_agent_str, infer_user_agent, UserAgentInferrer,
    VersionResolver, DEFAULT_BROWSER_VERSION, DEFAULT_MANIFEST_URL,
};
