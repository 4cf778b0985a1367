//! Platform-specific Chrome User-Agent templates.

use crate::error::InferError;
use crate::platform::Platform;

/// Builds a desktop Chrome User-Agent embedding `browser_version` verbatim.
///
/// `darwin` and `mas` share the macOS template. Pure: the same inputs always
/// produce the same bytes.
pub fn build_user_agent(browser_version: &str, platform: Platform) -> String {
    let system = match platform {
        Platform::Darwin | Platform::Mas => "Macintosh; Intel Mac OS X 10_12_5",
        Platform::Win32 => "Windows NT 10.0; Win64; x64",
        Platform::Linux => "X11; Linux x86_64",
    };
    format!(
        "Mozilla/5.0 ({system}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{browser_version} Safari/537.36"
    )
}

/// Like [`build_user_agent`] but takes a raw platform identifier.
///
/// Fails with [`InferError::UnsupportedPlatform`] for anything outside
/// `darwin`, `mas`, `win32`, `linux`.
pub fn build_user_agent_str(browser_version: &str, platform: &str) -> Result<String, InferError> {
    let platform: Platform = platform.parse()?;
    Ok(build_user_agent(browser_version, platform))
}
