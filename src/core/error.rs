use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IgError {
    /// An error occurred during an HTTP request (including timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The numeric account id could not be determined by any resolution path.
    #[error("{0}")]
    Resolution(String),

    /// A username or session token supplied by the user was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Writing an export file failed.
    #[error("failed to export to {}: {source}", path.display())]
    Export {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O (or encoding) failure.
        #[source]
        source: std::io::Error,
    },

    /// An export of the last result was requested before any investigation finished.
    #[error("no investigation has been performed yet")]
    NoInvestigation,
}
