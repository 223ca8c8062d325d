//! Near-Earth-object feed enrichment.
//!
//! Best-effort, read-only lookup against the NASA NEO feed for a fixed
//! forward-looking window. Enrichment is purely additive context: every
//! failure path (missing credential, transport error, non-success status,
//! malformed body, timeout) collapses to [`NeoEnrichment::Absent`] and is
//! logged, never raised to the caller. One attempt per request, no retries.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{Days, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default NEO feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Forward-looking window queried from the feed (days).
pub const WINDOW_DAYS: u64 = 7;

/// Maximum number of sample entries carried in a snapshot.
pub const SAMPLE_LIMIT: usize = 5;

/// Total time budget for one fetch attempt.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable holding the feed credential.
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Outcome of one enrichment attempt.
///
/// A single variant pair keeps every failure path out of the rest of the
/// pipeline: downstream code only ever sees present-or-absent.
#[derive(Debug, Clone, PartialEq)]
pub enum NeoEnrichment {
    /// The feed answered and parsed; a capped summary is attached.
    Present(NeoSnapshot),
    /// No credential, or the fetch failed; nothing is attached.
    Absent,
}

impl NeoEnrichment {
    /// Convert to an optional snapshot for response assembly.
    #[must_use]
    pub fn into_option(self) -> Option<NeoSnapshot> {
        match self {
            Self::Present(snapshot) => Some(snapshot),
            Self::Absent => None,
        }
    }

    /// Whether a snapshot is attached.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// Capped summary of currently tracked near-Earth objects.
///
/// Entries are opaque feed records; this engine never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeoSnapshot {
    /// Total objects tracked in the queried window.
    pub element_count: u64,
    /// At most [`SAMPLE_LIMIT`] entries, in ascending date order.
    pub near_earth_objects: Vec<serde_json::Value>,
}

/// Raw feed response shape: a count plus per-date object lists.
#[derive(Debug, Deserialize)]
struct NeoFeed {
    element_count: u64,
    near_earth_objects: BTreeMap<String, Vec<serde_json::Value>>,
}

impl NeoSnapshot {
    fn from_feed(feed: NeoFeed) -> Self {
        let near_earth_objects = feed
            .near_earth_objects
            .into_values()
            .flatten()
            .take(SAMPLE_LIMIT)
            .collect();
        Self {
            element_count: feed.element_count,
            near_earth_objects,
        }
    }
}

/// Client for the NEO feed.
#[derive(Debug, Clone)]
pub struct NeoClient {
    http: reqwest::Client,
    api_key: Option<String>,
    feed_url: String,
}

impl NeoClient {
    /// Create a client with an explicit credential.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(api_key: Option<String>) -> EngineResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| EngineError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key,
            feed_url: DEFAULT_FEED_URL.to_string(),
        })
    }

    /// Create a client from the `NASA_API_KEY` environment variable.
    ///
    /// A missing credential is not an error; it makes every fetch return
    /// [`NeoEnrichment::Absent`] immediately.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn from_env() -> EngineResult<Self> {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Override the feed endpoint. Used by tests.
    #[must_use]
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Whether a credential is configured.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch a snapshot for the next [`WINDOW_DAYS`] days.
    ///
    /// Never fails: every error is logged and absorbed into
    /// [`NeoEnrichment::Absent`].
    pub async fn fetch(&self) -> NeoEnrichment {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!("{API_KEY_ENV} not configured, skipping NEO enrichment");
            return NeoEnrichment::Absent;
        };

        match self.try_fetch(api_key).await {
            Ok(snapshot) => NeoEnrichment::Present(snapshot),
            Err(error) => {
                tracing::warn!(%error, "NEO feed fetch failed");
                NeoEnrichment::Absent
            }
        }
    }

    async fn try_fetch(&self, api_key: &str) -> EngineResult<NeoSnapshot> {
        let start = Utc::now().date_naive();
        let end = start
            .checked_add_days(Days::new(WINDOW_DAYS))
            .ok_or_else(|| EngineError::external("window end date overflow"))?;

        let response = self
            .http
            .get(&self.feed_url)
            .query(&[
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
                ("api_key", api_key.to_string()),
            ])
            .send()
            .await
            .map_err(|e| EngineError::external(format!("NEO feed request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::external(format!(
                "NEO feed returned HTTP {status}"
            )));
        }

        let feed: NeoFeed = response
            .json()
            .await
            .map_err(|e| EngineError::external(format!("NEO feed body unparsable: {e}")))?;

        Ok(NeoSnapshot::from_feed(feed))
    }
}
