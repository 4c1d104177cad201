mod cli;
mod infra;
mod recommend;
mod routes;
mod server;

use menu_match::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
