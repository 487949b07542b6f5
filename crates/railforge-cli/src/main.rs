//! `railforge` - plan transit lines from CSV station and connection lists.

mod args;
mod error;
mod loader;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use args::Args;
use error::CliError;

fn main() -> ExitCode {
    railforge::logging::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(event = "cli_error", error = %e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let network = loader::load_network(&args.stations, &args.connections)?;
    let config = args.to_config()?;
    let result = railforge::solve(&network, config)?;

    let stdout = std::io::stdout();
    output::print_summary(&mut stdout.lock(), &network, &result)?;
    if let Some(path) = &args.output {
        output::write_result(path, &network, &result)?;
    }
    Ok(())
}
