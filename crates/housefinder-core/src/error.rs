// crates/housefinder-core/src/error.rs
use thiserror::Error;

/// Errors raised at the edges of the crate: loading, validating and
/// snapshotting catalogs, and parsing user-supplied coordinates.
///
/// The query functions themselves ([`crate::search()`], [`crate::rank()`],
/// [`crate::distance_km`], the index helpers) never fail.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid catalog record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("invalid coordinates '{0}': expected \"<lat>,<lon>\" in degrees")]
    InvalidCoordinates(String),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
