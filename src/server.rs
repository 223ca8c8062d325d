//! HTTP surface for the estimation engine.
//!
//! One JSON request/response operation plus a health probe. Every
//! response, including the preflight, carries the cross-origin headers.
//! The NEO fetch is spawned before the physics pipeline runs and joined
//! at assembly time, so enrichment adds no latency and its failures
//! cannot fail the request.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;

use crate::casualty::DensityTable;
use crate::error::{EngineError, EngineResult};
use crate::neo::{NeoClient, NeoEnrichment};
use crate::params::AsteroidParameters;
use crate::result::ImpactResult;

/// Allowed cross-origin requesters.
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Headers accepted from cross-origin requesters.
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Shared, immutable per-process state.
///
/// Requests share nothing mutable, so arbitrarily many run in parallel
/// with no coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Enrichment client (cheap to clone, shares its connection pool).
    pub neo: NeoClient,
    /// Injectable population density policy.
    pub densities: Arc<DensityTable>,
}

impl AppState {
    /// Create server state from an enrichment client and density table.
    #[must_use]
    pub fn new(neo: NeoClient, densities: DensityTable) -> Self {
        Self {
            neo,
            densities: Arc::new(densities),
        }
    }
}

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/calculate-impact",
            post(calculate_impact).options(preflight),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// Bind and serve until the listener fails.
///
/// # Errors
///
/// Returns an error if binding or serving fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> EngineResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "impactor listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

/// Preflight probe: short-circuits before any computation.
async fn preflight() -> Response {
    with_cors(StatusCode::OK.into_response())
}

async fn health() -> Response {
    with_cors("OK".into_response())
}

/// The single estimation operation.
async fn calculate_impact(State(state): State<AppState>, body: Bytes) -> Response {
    let raw = String::from_utf8_lossy(&body);
    let params = match AsteroidParameters::from_json(&raw) {
        Ok(params) => params,
        Err(error) => {
            tracing::debug!(%error, "rejected impact request");
            return error_response(StatusCode::BAD_REQUEST, &error.to_string());
        }
    };

    tracing::debug!(?params, "calculating impact");

    // Fire the enrichment fetch first so it overlaps the physics pipeline.
    let neo_task = tokio::spawn({
        let client = state.neo.clone();
        async move { client.fetch().await }
    });

    let result = ImpactResult::compute(&params, &state.densities);
    if let Err(error) = result.ensure_finite() {
        tracing::error!(%error, "impact computation produced invalid output");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string());
    }

    let enrichment = match neo_task.await {
        Ok(enrichment) => enrichment,
        Err(join_error) => {
            tracing::warn!(%join_error, "NEO enrichment task aborted");
            NeoEnrichment::Absent
        }
    };
    let result = result.with_enrichment(enrichment);

    tracing::debug!(
        risk = ?result.risk_level,
        casualties = result.casualties,
        "impact calculation complete"
    );

    match serde_json::to_string(&result) {
        Ok(payload) => with_cors(
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                payload,
            )
                .into_response(),
        ),
        Err(error) => {
            let error = EngineError::internal(format!("response serialization failed: {error}"));
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    with_cors(
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            json!({ "error": message }).to_string(),
        )
            .into_response(),
    )
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    response
}
