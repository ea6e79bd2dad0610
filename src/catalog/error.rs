use thiserror::Error;

/// Errors produced by [`CatalogClient`](super::CatalogClient).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure: DNS, connect, TLS or body read.
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not the JSON shape we expect.
    #[error("Failed to decode response from '{url}' (HTTP {status}): {source}")]
    Decode {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification used for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Client(_) | CatalogError::Network { .. } => ErrorKind::Network,
            CatalogError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Short text for the UI when errors are made visible.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Network => "Could not reach the catalog",
            ErrorKind::Decode => "The catalog sent an unexpected response",
        }
    }
}
