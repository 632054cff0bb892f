//! SysRq command registry
//!
//! Every command the kernel accepts through the trigger file is declared once
//! in the `sysrq_commands!` table below. The enum, its byte codes, the
//! canonical names and both lookup directions are generated from that table.
//!
//! See <https://docs.kernel.org/admin-guide/sysrq.html> for what each command
//! does on the kernel side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SysrqError};

macro_rules! sysrq_commands {
    ($( $variant:ident = $code:literal, $name:literal, $desc:literal; )*) => {
        /// A SysRq command, represented by the byte written to the trigger file
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum Command {
            $(
                #[doc = $desc]
                $variant = $code,
            )*
        }

        impl Command {
            /// Every registered command, in declared order
            pub const ALL: &'static [Command] = &[$(Command::$variant,)*];

            /// Canonical lowercase kebab-case name
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Command::$variant => $name,)*
                }
            }

            /// Short summary of what the kernel does for this command
            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Command::$variant => $desc,)*
                }
            }

            /// Look up a command by its trigger byte
            #[must_use]
            pub const fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($code => Some(Command::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

sysrq_commands! {
    Reboot = b'b', "reboot",
        "Immediately reboot the system without syncing or unmounting disks.";
    Crash = b'c', "crash",
        "Crash the system by a NULL pointer dereference, taking a crashdump if configured.";
    TerminateAllTasks = b'e', "terminate-all-tasks",
        "Send SIGTERM to all processes except init.";
    MemoryFullOomKill = b'f', "memory-full-oom-kill",
        "Call the OOM killer to kill a memory hog, without panicking if nothing can be killed.";
    KillAllTasks = b'i', "kill-all-tasks",
        "Send SIGKILL to all processes except init.";
    ThawFilesystems = b'j', "thaw-filesystems",
        "Forcibly thaw filesystems frozen by the FIFREEZE ioctl.";
    Sak = b'k', "sak",
        "Secure Access Key: kill all programs on the current virtual console.";
    ShowBacktraceAllActiveCpus = b'l', "show-backtrace-all-active-cpus",
        "Show a stack backtrace for all active CPUs.";
    ShowMemoryUsage = b'm', "show-memory-usage",
        "Dump current memory info to the console.";
    NiceAllRtTasks = b'n', "nice-all-rt-tasks",
        "Make RT tasks nice-able.";
    Poweroff = b'o', "poweroff",
        "Shut the system off, if configured and supported.";
    ShowRegisters = b'p', "show-registers",
        "Dump the current registers and flags to the console.";
    ShowAllTimers = b'q', "show-all-timers",
        "Dump per-CPU lists of armed hrtimers and clockevent device details.";
    Unraw = b'r', "unraw",
        "Turn off keyboard raw mode and set it to XLATE.";
    Sync = b's', "sync",
        "Attempt to sync all mounted filesystems.";
    ShowTaskStates = b't', "show-task-states",
        "Dump a list of current tasks and their information to the console.";
    Unmount = b'u', "unmount",
        "Attempt to remount all mounted filesystems read-only.";
    ShowBlockedTasks = b'w', "show-blocked-tasks",
        "Dump tasks in uninterruptible (blocked) state.";
    DumpFtraceBuffer = b'z', "dump-ftrace-buffer",
        "Dump the ftrace buffer.";
    Loglevel0 = b'0', "loglevel0",
        "Set the console log level to 0 (emergency messages only).";
    Loglevel1 = b'1', "loglevel1",
        "Set the console log level to 1.";
    Loglevel2 = b'2', "loglevel2",
        "Set the console log level to 2.";
    Loglevel3 = b'3', "loglevel3",
        "Set the console log level to 3.";
    Loglevel4 = b'4', "loglevel4",
        "Set the console log level to 4.";
    Loglevel5 = b'5', "loglevel5",
        "Set the console log level to 5.";
    Loglevel6 = b'6', "loglevel6",
        "Set the console log level to 6.";
    Loglevel7 = b'7', "loglevel7",
        "Set the console log level to 7.";
    Loglevel8 = b'8', "loglevel8",
        "Set the console log level to 8.";
    Loglevel9 = b'9', "loglevel9",
        "Set the console log level to 9, the most verbose level.";
}

impl Command {
    /// Byte written to the trigger file for this command
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolve a command name, ignoring case.
    ///
    /// Only exact matches succeed. On failure the error carries `name` exactly
    /// as it was passed in.
    pub fn parse(name: &str) -> Result<Self> {
        let normalized = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name() == normalized)
            .ok_or_else(|| SysrqError::invalid_command(name))
    }
}

/// Resolve a command name. See [`Command::parse`].
pub fn parse(name: &str) -> Result<Command> {
    Command::parse(name)
}

/// Canonical name of a command. See [`Command::name`].
#[must_use]
pub fn format(cmd: Command) -> &'static str {
    cmd.name()
}

/// Iterate over all registered commands in declared order
pub fn commands() -> impl Iterator<Item = Command> {
    Command::ALL.iter().copied()
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = SysrqError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd.code()
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).map_err(serde::de::Error::custom)
    }
}

/// Listing entry for a command, used for machine-readable output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    /// Canonical name
    pub name: &'static str,
    /// Trigger byte as a one-character string
    pub code: char,
    /// Short summary
    pub description: &'static str,
}

impl From<Command> for CommandInfo {
    fn from(cmd: Command) -> Self {
        Self {
            name: cmd.name(),
            code: char::from(cmd.code()),
            description: cmd.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size() {
        assert_eq!(Command::ALL.len(), 29);
    }

    #[test]
    fn test_names_are_lowercase_kebab() {
        for cmd in commands() {
            let name = cmd.name();
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad name {name}"
            );
            assert!(!name.starts_with('-') && !name.ends_with('-'));
        }
    }

    #[test]
    fn test_codes_are_printable_ascii() {
        for cmd in commands() {
            assert!(cmd.code().is_ascii_alphanumeric(), "bad code for {cmd}");
        }
    }

    #[test]
    fn test_command_info() {
        let info = CommandInfo::from(Command::Sync);
        assert_eq!(info.name, "sync");
        assert_eq!(info.code, 's');
        assert_eq!(info.description, Command::Sync.description());
    }
}
