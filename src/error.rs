//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced by the registry, recorder, and aggregation services.
///
/// All variants are recoverable from the caller's perspective.
/// [`AppError::StoreUnavailable`] is fatal to the single operation that hit
/// it; the core never retries storage failures internally.
#[derive(Debug, Error)]
pub enum AppError {
    /// The destination URL is malformed or uses an unsupported scheme.
    #[error("invalid destination URL: {reason}")]
    InvalidDestination { reason: String },

    /// Short id allocation kept colliding with existing links.
    #[error("could not allocate a unique short id after {attempts} attempts")]
    CapacityExhausted { attempts: usize },

    /// No link exists under the given short id.
    #[error("short link '{short_id}' not found")]
    NotFound { short_id: String },

    /// The requesting owner does not own the link.
    #[error("operation not permitted for this owner")]
    Forbidden,

    /// The persistence medium failed (I/O error, corrupt blob).
    #[error("persistent store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl AppError {
    pub fn invalid_destination(reason: impl Into<String>) -> Self {
        Self::InvalidDestination {
            reason: reason.into(),
        }
    }

    pub fn not_found(short_id: impl Into<String>) -> Self {
        Self::NotFound {
            short_id: short_id.into(),
        }
    }

    pub fn store_unavailable(reason: impl std::fmt::Display) -> Self {
        Self::StoreUnavailable {
            reason: reason.to_string(),
        }
    }
}
