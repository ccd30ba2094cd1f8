//! HTTP service and CLI wrapping the crewmatch matching engine.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use crewmatch::error::AppError;

/// Parse the command line and dispatch to the selected command.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
