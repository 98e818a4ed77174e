mod cli;
mod infra;
mod preview;
mod routes;
mod server;

use candidate_hub::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
