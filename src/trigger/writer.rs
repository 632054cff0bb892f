//! Writes command bytes to the trigger file

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::error::{IoOperation, Result, SysrqError};

use super::config::{
    DEFAULT_TRIGGER_FILE, TRIGGER_FILE_ENV, resolve_trigger_file, trigger_file_from_env_value,
};

/// Access to the SysRq interface through a trigger file.
///
/// Holds nothing but the target path. An empty path means
/// [`DEFAULT_TRIGGER_FILE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysRq {
    trigger_file: PathBuf,
}

impl Default for SysRq {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_FILE)
    }
}

impl SysRq {
    /// Create a writer for the given trigger file
    pub fn new(trigger_file: impl Into<PathBuf>) -> Self {
        Self {
            trigger_file: trigger_file.into(),
        }
    }

    /// Create a writer from the `TRIGGER_FILE` environment variable
    #[must_use]
    pub fn from_env() -> Self {
        let value = std::env::var(TRIGGER_FILE_ENV).ok();
        Self::new(trigger_file_from_env_value(value.as_deref()))
    }

    /// Path that writes will actually go to
    #[must_use]
    pub fn trigger_file(&self) -> &Path {
        resolve_trigger_file(&self.trigger_file)
    }

    /// Submit commands in order, one open-write-close cycle each.
    ///
    /// Stops at the first failure and returns it; later commands are never
    /// written.
    pub fn trigger<I>(&self, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = Command>,
    {
        let path = self.trigger_file();
        submit_each(commands, |cmd| write_code(path, cmd))
    }
}

/// Submit commands to `trigger_file`. An empty path means [`DEFAULT_TRIGGER_FILE`].
pub fn trigger<P, I>(trigger_file: P, commands: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Command>,
{
    SysRq::new(trigger_file.as_ref()).trigger(commands)
}

/// Submit commands to [`DEFAULT_TRIGGER_FILE`]
pub fn trigger_default<I>(commands: I) -> Result<()>
where
    I: IntoIterator<Item = Command>,
{
    SysRq::default().trigger(commands)
}

fn submit_each<I, F>(commands: I, mut submit: F) -> Result<()>
where
    I: IntoIterator<Item = Command>,
    F: FnMut(Command) -> Result<()>,
{
    for cmd in commands {
        submit(cmd)?;
    }
    Ok(())
}

fn write_code(path: &Path, cmd: Command) -> Result<()> {
    log::debug!(
        "Writing SysRq command {} ({:?}) to {}",
        cmd,
        char::from(cmd.code()),
        path.display()
    );

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use super::config::TRIGGER_FILE_MODE;
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(TRIGGER_FILE_MODE);
    }

    let mut file = options.open(path).map_err(|e| {
        log::warn!("Failed to open {}: {}", path.display(), e);
        SysrqError::io(IoOperation::Open, path, e)
    })?;

    file.write_all(&[cmd.code()]).map_err(|e| {
        log::warn!("Failed to write {} to {}: {}", cmd, path.display(), e);
        SysrqError::io(IoOperation::Write, path, e)
    })
}
