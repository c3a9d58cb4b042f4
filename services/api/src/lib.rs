mod cli;
mod infra;
mod preview;
mod routes;
mod server;

use inquiry_relay::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
