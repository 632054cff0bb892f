//! Unit tests for the command registry
//!
//! Tests name and code lookup in both directions

use std::collections::HashSet;

use sysrq::{Command, SysrqError, commands, format, parse};

#[test]
fn test_parse_kill_all_tasks() {
    assert_eq!(parse("kill-all-tasks").unwrap(), Command::KillAllTasks);
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(
        parse("Kill-All-Tasks").unwrap(),
        parse("kill-all-tasks").unwrap()
    );
    assert_eq!(parse("SYNC").unwrap(), Command::Sync);
    assert_eq!(parse("LogLevel7").unwrap(), Command::Loglevel7);
}

#[test]
fn test_parse_folds_unicode_case() {
    // KELVIN SIGN lowercases to 'k'
    assert_eq!(parse("\u{212A}ill-all-tasks").unwrap(), Command::KillAllTasks);
}

#[test]
fn test_parse_invalid_carries_input() {
    match parse("foo") {
        Err(SysrqError::InvalidCommand(input)) => assert_eq!(input, "foo"),
        other => panic!("Expected InvalidCommand, got {other:?}"),
    }

    let err = parse("Not-A-Command").unwrap_err();
    assert_eq!(err.to_string(), "invalid command: Not-A-Command");
}

#[test]
fn test_parse_rejects_partial_matches() {
    for input in ["", "syn", "sync ", " sync", "show", "loglevel", "loglevel10", "s"] {
        assert!(parse(input).is_err(), "{input:?} should not resolve");
    }
}

#[test]
fn test_format() {
    assert_eq!(format(Command::MemoryFullOomKill), "memory-full-oom-kill");
    assert_eq!(Command::ShowBacktraceAllActiveCpus.to_string(), "show-backtrace-all-active-cpus");
}

#[test]
fn test_name_round_trip() {
    for cmd in commands() {
        let name = format(cmd);
        assert_eq!(parse(name).unwrap(), cmd);
        assert_eq!(format(parse(&name.to_uppercase()).unwrap()), name);
    }
}

#[test]
fn test_code_round_trip() {
    for cmd in commands() {
        assert_eq!(Command::from_code(cmd.code()), Some(cmd));
        assert_eq!(u8::from(cmd), cmd.code());
    }
    assert_eq!(Command::from_code(b'a'), None);
    assert_eq!(Command::from_code(b'S'), None);
    assert_eq!(Command::from_code(0), None);
}

#[test]
fn test_bijection_integrity() {
    let names: HashSet<&str> = commands().map(Command::name).collect();
    let codes: HashSet<u8> = commands().map(Command::code).collect();
    assert_eq!(names.len(), Command::ALL.len());
    assert_eq!(codes.len(), Command::ALL.len());
}

#[test]
fn test_listing_order() {
    let names: Vec<&str> = commands().map(Command::name).collect();
    assert_eq!(names.len(), 29);
    assert_eq!(names.first(), Some(&"reboot"));
    assert_eq!(names.last(), Some(&"loglevel9"));

    // Listing twice yields the same order
    let again: Vec<&str> = commands().map(Command::name).collect();
    assert_eq!(names, again);
}

#[test]
fn test_known_codes() {
    assert_eq!(Command::Sync.code(), 0x73);
    assert_eq!(Command::Reboot.code(), b'b');
    assert_eq!(Command::Crash.code(), b'c');
    assert_eq!(Command::Sak.code(), b'k');
    assert_eq!(Command::DumpFtraceBuffer.code(), b'z');
    assert_eq!(Command::Loglevel0.code(), b'0');
}

#[test]
fn test_from_str() {
    let cmd: Command = "poweroff".parse().unwrap();
    assert_eq!(cmd, Command::Poweroff);
    assert!("power-off".parse::<Command>().is_err());
}

#[test]
fn test_serde_uses_canonical_name() {
    let json = serde_json::to_string(&Command::ThawFilesystems).unwrap();
    assert_eq!(json, "\"thaw-filesystems\"");

    let cmd: Command = serde_json::from_str("\"Unmount\"").unwrap();
    assert_eq!(cmd, Command::Unmount);

    assert!(serde_json::from_str::<Command>("\"foo\"").is_err());
}

#[test]
fn test_every_command_has_description() {
    for cmd in commands() {
        assert!(!cmd.description().is_empty(), "{cmd} has no description");
    }
}
