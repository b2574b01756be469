//! CLI entrypoint for `paramgen`.

use std::process::ExitCode;

use clap::Parser;
use paramgen_cli::cli::Args;
use paramgen_cli::logging;
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.is_verbose);
    match paramgen_cli::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
