//! Failure classification for API calls.
//!
//! Every request resolves to `Result<T, ApiError>`; pages render the
//! `Display` text inline and the session treats any error as signed-out.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the credentials (HTTP 401).
    #[error("not signed in")]
    Unauthorized,

    /// Non-success HTTP status without a readable envelope.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The envelope reported success but carried no `data`.
    #[error("response contained no data")]
    MissingData,

    /// Network calls are only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the failure means the stored credentials are no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
