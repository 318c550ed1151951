mod config;
mod error;
mod routes;

use std::process::ExitCode;

use config::SiteConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    // A missing .env file is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "site server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = SiteConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "novovcap site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
