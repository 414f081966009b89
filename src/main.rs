mod config;
mod routes;

use std::process::ExitCode;

use config::HostConfig;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let host = match HostConfig::from_env() {
        Ok(host) => host,
        Err(e) => {
            tracing::error!(error = %e, "invalid host configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = match routes::app(&host) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to assemble router");
            return ExitCode::FAILURE;
        }
    };

    let addr = host.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, "folio listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
