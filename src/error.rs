//! Error types for impactor.
//!
//! All fallible operations return `Result<T, EngineError>` instead of
//! panicking. External-feed failures are absorbed inside the `neo` module
//! and never reach callers of the estimation pipeline; everything that does
//! reach a caller is either a validation failure (the request never starts)
//! or an internal failure (the whole request fails, no partial result).

use thiserror::Error;

/// Result type alias for impactor operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Unified error type for all impactor operations.
#[derive(Debug, Error)]
pub enum EngineError {
    // ===== Validation Errors =====
    /// Malformed or out-of-range input parameter.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the rejected input.
        message: String,
    },

    /// Schema-level validation failure (range constraints).
    #[error("validation error: {0}")]
    Schema(#[from] validator::ValidationErrors),

    // ===== External Service Errors =====
    /// NEO feed unreachable, unauthenticated, or unparsable.
    ///
    /// Absorbed inside the enrichment client; degrades the response to an
    /// absent `neoData` field rather than failing the request.
    #[error("external service error: {0}")]
    ExternalService(String),

    // ===== Configuration Errors =====
    /// YAML parsing error (density table).
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ===== Unexpected Errors =====
    /// Any other failure during computation or serving.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Create a validation error with a message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an external service error with a message.
    #[must_use]
    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalService(message.into())
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error with a message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check whether this error is a request-level validation failure.
    ///
    /// Validation failures map to a client error status; everything else
    /// that escapes the pipeline is a server error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Schema(_))
    }
}
