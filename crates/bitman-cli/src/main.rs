//! `bitman`: print or modify bit fields of big numbers from the command line.

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log.as_deref());

    let request = cli.request().unwrap_or_else(|err| err.exit());

    let mut stdout = std::io::stdout().lock();
    match commands::run(&request, cli.json, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
