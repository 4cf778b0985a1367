//! Closed set of packaging target platforms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InferError;

/// Target platform identifier, as used by the packager (`process.platform` style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Platform {
    /// macOS.
    Darwin,
    /// Mac App Store build of macOS.
    Mas,
    /// Windows.
    Win32,
    /// Linux.
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Darwin,
        Platform::Mas,
        Platform::Win32,
        Platform::Linux,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Mas => "mas",
            Platform::Win32 => "win32",
            Platform::Linux => "linux",
        }
    }

    /// Platform of the host running this process. Unknown unixes map to linux.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::Darwin,
            "windows" => Platform::Win32,
            _ => Platform::Linux,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = InferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "darwin" => Ok(Platform::Darwin),
            "mas" => Ok(Platform::Mas),
            "win32" => Ok(Platform::Win32),
            "linux" => Ok(Platform::Linux),
            other => Err(InferError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = InferError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Platform> for &'static str {
    fn from(platform: Platform) -> Self {
        platform.as_str()
    }
}
