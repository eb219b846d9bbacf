//! Client errors

use thiserror::Error;

/// Everything that can go wrong between sending a request and reading its body
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL could not be parsed
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// DNS, connection, TLS or body transfer failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
}
