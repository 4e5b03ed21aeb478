//! fattura24 CLI entrypoint.
//!
//! Parses arguments, imports every CSV file in order and exits non-zero with
//! a single-line message on the first error.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse_from(cli::normalize_flags(std::env::args_os()));
    cli::init_logging(args.verbose);

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", cli::one_line(&e));
            ExitCode::FAILURE
        }
    }
}
