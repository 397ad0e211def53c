use thiserror::Error;

/// Errors that can occur during catalog import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// HTTP request to the catalog backend failed
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend rejected {entity}: HTTP {status}: {body}")]
    Backend {
        entity: &'static str,
        status: u16,
        body: String,
    },

    /// The backend response was missing an expected field
    #[error("Unexpected backend response for {entity}: {detail}")]
    BadResponse {
        entity: &'static str,
        detail: String,
    },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}
