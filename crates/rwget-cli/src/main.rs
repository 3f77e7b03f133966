use rwget_core::logging;
use rwget_core::WgetError;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args().await {
        tracing::error!("rwget failed: {:#}", err);
        // Download errors were already written to the report.
        if err.downcast_ref::<WgetError>().is_none() {
            eprintln!("rwget error: {:#}", err);
        }
        std::process::exit(1);
    }
}
