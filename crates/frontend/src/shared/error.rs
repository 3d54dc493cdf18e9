use thiserror::Error;

/// Failure of a call to the document Q&A service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The request never completed
    #[error("Request failed: {0}")]
    Network(String),

    /// The request could not be built or the response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}
