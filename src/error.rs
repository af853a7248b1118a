//! Error handling for NDBC retrieval and parsing.
//!
//! Structural errors come from malformed feed text (too few header lines or a
//! short data row). Missing or unparsable values inside a row are never errors;
//! they surface as absent fields on the record instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NdbcError {
    #[error("Insufficient header lines: expected at least {expected}, found {found}")]
    InsufficientHeaderLines { expected: usize, found: usize },

    #[error("Insufficient columns on data line {line}: expected {expected}, found {found}")]
    InsufficientColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid station id '{id}': {reason}")]
    InvalidStationId { id: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl NdbcError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid station id error
    pub fn invalid_station_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStationId {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }

    /// True for failures caused by the shape of the feed text itself
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InsufficientHeaderLines { .. } | Self::InsufficientColumns { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NdbcError>;
