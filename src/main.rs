//! impactor server binary.
//!
//! Binds the estimation engine to an HTTP listener. Configuration comes
//! from the environment: `PORT` (default 8080), `NASA_API_KEY` (optional,
//! enables NEO enrichment), `IMPACTOR_DENSITY_TABLE` (optional path to a
//! YAML density table overriding the embedded default).

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use impactor::casualty::DensityTable;
use impactor::neo::NeoClient;
use impactor::server::{self, AppState};
use impactor::EngineResult;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(version = env!("IMPACTOR_VERSION"), "starting impactor");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "impactor failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> EngineResult<()> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let densities = match std::env::var("IMPACTOR_DENSITY_TABLE") {
        Ok(path) => {
            tracing::info!(path, "loading density table");
            DensityTable::load(path)?
        }
        Err(_) => DensityTable::default(),
    };

    let neo = NeoClient::from_env()?;
    if !neo.has_credential() {
        tracing::info!("no NEO credential configured, enrichment disabled");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    server::serve(addr, AppState::new(neo, densities)).await
}
