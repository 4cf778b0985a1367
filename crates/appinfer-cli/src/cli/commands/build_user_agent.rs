//! `appinfer build-user-agent <chrome-version>` – format a User-Agent offline.

use appinfer_core::{build_user_agent, Platform};

pub fn run_build_user_agent(chrome_version: &str, platform: Platform) {
    println!("{}", build_user_agent(chrome_version, platform));
}
