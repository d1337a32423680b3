// crates/countrydex-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or fetching country data.
///
/// None of these are fatal to a front end: the state machine turns a failed
/// load into a user-facing notice and keeps whatever list it already had.
#[derive(Debug, Error)]
pub enum DexError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport failure or a non-success HTTP status.
    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, DexError>;
