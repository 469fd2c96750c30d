//! git-sync: keep local branches consistent with `origin` after a fetch.
//!
//! Parses arguments, runs the sync in the current directory, and maps any
//! error to a single `fatal:` line and a non-zero exit code.

mod cli;
mod config;
mod error;
mod exit_codes;
mod git;
mod logging;
mod range;
mod repo;
mod sync;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::SyncConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _cli = Cli::parse_args();
    logging::init();

    let config = SyncConfig::from_env();

    match sync::cmd_sync(&config) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            println!("fatal: {}", err.fatal_message());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
