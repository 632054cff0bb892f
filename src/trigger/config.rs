//! Configuration constants for the trigger writer

use std::path::{Path, PathBuf};

/// Default location of the kernel's SysRq trigger file
pub const DEFAULT_TRIGGER_FILE: &str = "/proc/sysrq-trigger";

/// Environment variable that overrides the trigger file location
pub const TRIGGER_FILE_ENV: &str = "TRIGGER_FILE";

/// Permission bits used when the target has to be created (rw-r--r--)
pub const TRIGGER_FILE_MODE: u32 = 0o644;

/// Resolve a configured target, falling back to [`DEFAULT_TRIGGER_FILE`] when empty
#[must_use]
pub fn resolve_trigger_file(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(DEFAULT_TRIGGER_FILE)
    } else {
        path
    }
}

/// Target path from an optional environment value. Unset and empty both mean the default.
#[must_use]
pub fn trigger_file_from_env_value(value: Option<&str>) -> PathBuf {
    match value {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_TRIGGER_FILE),
    }
}
