use prodsearch_core::errors::ErrorMap;

/// Failures that never reached a usable backend answer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected error response (status {status})")]
    UnexpectedBody { status: u16 },
}

impl ClientError {
    /// The user only ever sees the generic `general` message for these.
    pub fn into_error_map(self) -> ErrorMap {
        ErrorMap::general()
    }
}
