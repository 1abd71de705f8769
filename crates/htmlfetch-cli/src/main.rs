use htmlfetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; the session needs stdout, so
    // fall back to a quiet stderr logger if the log file is unavailable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("htmlfetch error: {:#}", err);
        std::process::exit(1);
    }
}
