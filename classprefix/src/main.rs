// classprefix/src/main.rs
//! classprefix entry point.
//!
//! Parses arguments, initializes logging and dispatches to the `add` / `remove`
//! command runner.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use classprefix::cli::{Cli, Commands};
use classprefix::commands::rewrite::error_msg;
use classprefix::{RunStatus, logger, run_rewrite_command};
use classprefix_core::Direction;

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else {
        logger::init_logger(None);
    }

    match run(&args) {
        Ok(RunStatus::CheckFailed) => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(args: &Cli) -> Result<RunStatus> {
    match &args.command {
        Commands::Add(cmd) => run_rewrite_command(cmd, Direction::Add, args.quiet),
        Commands::Remove(cmd) => run_rewrite_command(cmd, Direction::Remove, args.quiet),
    }
}
