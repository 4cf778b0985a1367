//! Platform-aware filename sanitization for app names.

use crate::platform::Platform;

use super::DEFAULT_APP_NAME;

/// Longest name kept, in bytes (NAME_MAX on common filesystems).
const NAME_MAX: usize = 255;

/// Characters rejected in filenames on at least one target platform.
const INVALID_CHARS: [char; 9] = ['/', '?', '<', '>', '\\', ':', '*', '|', '"'];

/// Turns a raw app name into something usable as a filename on `platform`.
pub trait FilenameSanitizer: Send + Sync {
    fn sanitize(&self, platform: Platform, raw: &str) -> String;
}

/// Default sanitizer; see [`sanitize_filename`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformSanitizer;

impl FilenameSanitizer for PlatformSanitizer {
    fn sanitize(&self, platform: Platform, raw: &str) -> String {
        sanitize_filename(platform, raw)
    }
}

/// Sanitizes an app name for use as a filename on `platform`.
///
/// - Drops `/ ? < > \ : * | "`, control characters and non-ASCII characters
/// - Trims surrounding whitespace; on win32 also trailing dots and spaces
/// - Treats `.`, `..` and Windows device names (`CON`, `com1.txt`, ...) as empty
/// - Limits length to 255 bytes
/// - Falls back to [`DEFAULT_APP_NAME`] when nothing usable is left
/// - On linux, converts to kebab-case (spaces break dock pinning on some desktops)
pub fn sanitize_filename(platform: Platform, raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if INVALID_CHARS.contains(&c) || c.is_control() || !c.is_ascii() {
            continue;
        }
        out.push(c);
    }

    let mut trimmed = out.trim();
    if platform == Platform::Win32 {
        trimmed = trimmed.trim_end_matches(&['.', ' '][..]);
    }
    if is_reserved_name(trimmed) {
        trimmed = "";
    }
    // ASCII only past this point, so any byte index is a char boundary.
    let truncated = &trimmed[..trimmed.len().min(NAME_MAX)];
    let name = if truncated.is_empty() {
        DEFAULT_APP_NAME
    } else {
        truncated
    };

    if platform == Platform::Linux {
        let kebab = kebab_case(name);
        if kebab.is_empty() {
            kebab_case(DEFAULT_APP_NAME)
        } else {
            kebab
        }
    } else {
        name.to_string()
    }
}

fn is_reserved_name(name: &str) -> bool {
    if name == "." || name == ".." {
        return true;
    }
    let stem = name.split('.').next().unwrap_or(name).to_ascii_lowercase();
    match stem.as_str() {
        "con" | "prn" | "aux" | "nul" => true,
        s if s.len() == 4 && (s.starts_with("com") || s.starts_with("lpt")) => {
            s.as_bytes()[3].is_ascii_digit()
        }
        _ => false,
    }
}

/// Lowercase words joined by `-`. Words split on non-alphanumerics, on
/// lower→upper case changes, at the end of an acronym (`XMLHttp`) and between
/// letters and digits.
fn kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = (prev.is_ascii_lowercase() && c.is_ascii_uppercase())
                || (prev.is_ascii_uppercase() && c.is_ascii_uppercase() && next_is_lower)
                || (prev.is_ascii_digit() != c.is_ascii_digit());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}
