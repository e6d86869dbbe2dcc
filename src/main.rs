//! gitcompare - export the files changed between two commits
//!
//! Binary entry point.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use gitcompare::app::App;
use gitcompare::cli::Cli;
use gitcompare::ui::{Formatter, TerminalSelector};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let config = Cli::parse().into_config();
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let errors = Formatter::new(config.color && io::stderr().is_terminal());
    let mut app = App::new(config, io::stdout(), TerminalSelector);

    match app.run() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{}", errors.error(&err.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}
