use std::process::ExitCode;

use preflight::cli::CliCommand;
use preflight::logging;

fn main() -> ExitCode {
    // Initialize logging as early as possible.
    logging::init();

    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("preflight error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
