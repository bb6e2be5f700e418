//! Error type shared by the page renderers.
//!
//! ERROR HANDLING
//! ==============
//! Every render path returns `Result<(), ClientError>`. The browser entry
//! points log these instead of panicking, and each render target shows an
//! inline failure message so stale content is never left silently.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while loading or rendering one page component.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },
    /// The endpoint answered with a non-success HTTP status.
    #[error("request to {endpoint} failed: {status}")]
    Status { endpoint: String, status: u16 },
    /// The body was not the JSON shape the endpoint promises.
    #[error("unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
    /// The page has no element with the configured id.
    #[error("missing page element #{0}")]
    MissingTarget(String),
    /// Browser APIs are not compiled into this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ClientError {
    pub(crate) fn network(endpoint: &str, err: impl ToString) -> Self {
        Self::Network { endpoint: endpoint.to_owned(), message: err.to_string() }
    }

    pub(crate) fn decode(endpoint: &str, err: impl ToString) -> Self {
        Self::Decode { endpoint: endpoint.to_owned(), message: err.to_string() }
    }
}
