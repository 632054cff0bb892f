//! Error types for SysRq command resolution and triggering

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// I/O step that failed while submitting a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Opening (or creating) the trigger file
    Open,
    /// Writing the command byte
    Write,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Main error type for the SysRq crate
#[derive(Error, Debug)]
pub enum SysrqError {
    /// Name did not match any registered command. Carries the input verbatim.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Opening or writing the trigger file failed
    #[error("{op} {}: {source}", .path.display())]
    Io {
        /// Step that failed
        op: IoOperation,
        /// Trigger file involved
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for SysRq operations
pub type Result<T> = std::result::Result<T, SysrqError>;

impl SysrqError {
    /// Create an invalid command error
    pub fn invalid_command(input: impl Into<String>) -> Self {
        Self::InvalidCommand(input.into())
    }

    /// Create an I/O error for the given step and path
    pub fn io(op: IoOperation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Underlying `std::io::Error`, if this is an I/O failure
    #[must_use]
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidCommand(_) => None,
        }
    }
}
