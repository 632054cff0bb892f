//! Trigger file writer
//!
//! Submits [`Command`](crate::Command) bytes to the kernel's SysRq trigger
//! file. The file is write-only from our side: nothing is ever read back.

mod config;
mod writer;

pub use config::{
    DEFAULT_TRIGGER_FILE, TRIGGER_FILE_ENV, TRIGGER_FILE_MODE, resolve_trigger_file,
    trigger_file_from_env_value,
};
pub use writer::{SysRq, trigger, trigger_default};
