//! Error types for the audit library.

use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors that can occur while auditing a page
#[derive(Error, Debug)]
pub enum AuditError {
    /// The audit target is not an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page request could not be completed (DNS, connection, body read)
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page request exceeded the configured timeout
    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// Remote entity annotation failed.
    ///
    /// Never escapes an audit run; see [`crate::EntityAnnotator::annotate`].
    #[error("Entity annotation failed: {0}")]
    Annotation(String),

    /// Writing the report document failed
    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),

    /// Building the PDF document failed
    #[error("PDF export failed: {0}")]
    Pdf(String),

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuditError {
    /// Classify a reqwest failure for the page at `url`.
    pub(crate) fn from_fetch(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuditError::Timeout {
                url: url.to_string(),
            }
        } else if let Some(status) = err.status() {
            AuditError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
        } else {
            AuditError::Fetch {
                url: url.to_string(),
                source: err,
            }
        }
    }
}
