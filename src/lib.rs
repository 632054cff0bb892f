//! # SysRq for Rust
//!
//! Perform low-level commands through the Linux Magic SysRq interface by
//! writing single-byte codes to `/proc/sysrq-trigger`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sysrq::{Command, SysRq};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cmd: Command = "sync".parse()?;
//!     SysRq::default().trigger([cmd])?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Features
//!
//! ### 1. Command registry
//!
//! [`Command`] is a closed set of 29 commands. Names are lowercase kebab-case
//! and resolve case-insensitively:
//!
//! ```
//! use sysrq::Command;
//!
//! let cmd = Command::parse("Show-Memory-Usage").unwrap();
//! assert_eq!(cmd, Command::ShowMemoryUsage);
//! assert_eq!(cmd.code(), b'm');
//! assert_eq!(cmd.to_string(), "show-memory-usage");
//! assert_eq!(Command::from_code(b'm'), Some(cmd));
//! ```
//!
//! ### 2. Trigger writer
//!
//! [`SysRq`] submits commands in order, opening and closing the trigger file
//! for every byte. The first failure stops the batch:
//!
//! ```no_run
//! # use sysrq::{Command, SysRq};
//! # fn example() -> sysrq::Result<()> {
//! let sysrq = SysRq::from_env();
//! sysrq.trigger([Command::Sync, Command::Unmount, Command::Reboot])?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The only setting is the trigger file path. [`SysRq::from_env`] reads it
//! from the `TRIGGER_FILE` environment variable; an unset or empty value
//! means [`DEFAULT_TRIGGER_FILE`].
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, SysrqError>`](Result):
//!
//! ```
//! # use sysrq::{Command, SysrqError};
//! match Command::parse("foo") {
//!     Err(SysrqError::InvalidCommand(input)) => assert_eq!(input, "foo"),
//!     _ => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod trigger;

pub use command::{Command, CommandInfo, commands, format, parse};
pub use error::{IoOperation, Result, SysrqError};
pub use trigger::{DEFAULT_TRIGGER_FILE, SysRq, TRIGGER_FILE_ENV, trigger, trigger_default};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
