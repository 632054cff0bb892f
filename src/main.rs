// Command-line front end for the SysRq trigger file.
//
// All command names are resolved before anything is written, so a typo late
// in the list never leaves the system partially triggered.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sysrq::{Command, CommandInfo, SysRq, TRIGGER_FILE_ENV};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trigger Linux Magic SysRq commands", long_about = None)]
struct Args {
    /// List SysRq commands
    #[arg(long)]
    list: bool,

    /// With --list, also show each command's code and description
    #[arg(long, requires = "list")]
    long: bool,

    /// With --list, print the listing as JSON
    #[arg(long, requires = "list", conflicts_with = "long")]
    json: bool,

    /// Trigger file to write to (defaults to /proc/sysrq-trigger)
    #[arg(long, env = TRIGGER_FILE_ENV, value_name = "PATH")]
    trigger_file: Option<PathBuf>,

    /// Commands to trigger, in order
    #[arg(value_name = "COMMAND")]
    commands: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if args.list {
        return list_commands(args.long, args.json);
    }

    if args.commands.is_empty() {
        bail!("no command specified");
    }

    let cmds = args
        .commands
        .iter()
        .map(|arg| Command::parse(arg))
        .collect::<sysrq::Result<Vec<_>>>()?;

    let sysrq = SysRq::new(args.trigger_file.unwrap_or_default());
    log::debug!("Using trigger file {}", sysrq.trigger_file().display());

    for cmd in cmds {
        println!("Triggering SysRq command {:?} ...", cmd.name());
        sysrq.trigger([cmd])?;
    }

    Ok(())
}

fn list_commands(long: bool, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        let infos: Vec<CommandInfo> = sysrq::commands().map(CommandInfo::from).collect();
        serde_json::to_writer_pretty(&mut out, &infos).context("failed to encode command list")?;
        writeln!(out)?;
        return Ok(());
    }

    for cmd in sysrq::commands() {
        if long {
            writeln!(
                out,
                "{:<32} {}  {}",
                cmd.name(),
                char::from(cmd.code()),
                cmd.description()
            )?;
        } else {
            writeln!(out, "{cmd}")?;
        }
    }

    Ok(())
}
