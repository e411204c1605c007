mod cli;
mod infra;
mod reports;
mod routes;
mod server;

use homestay::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
