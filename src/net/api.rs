//! REST helpers for the page's collaborator endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: requests return [`ClientError::Unavailable`] so the pure
//! decoding layer stays testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failure, non-2xx status and malformed bodies map to distinct
//! [`ClientError`] variants. Nothing here defaults a failed read to an empty
//! list or a signed-out session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Comment, CommentsResponse, SessionInfo};
use crate::error::ClientError;

/// Fetch the comment list from `endpoint` (normally `/comments`).
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the
/// body is not `{ "comments": [...] }`.
pub async fn fetch_comments(endpoint: &str) -> Result<Vec<Comment>, ClientError> {
    let body = get_text(endpoint).await?;
    parse_comments(endpoint, &body)
}

/// Fetch the visitor's session status from `endpoint` (normally `/login`).
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the
/// body does not decode as [`SessionInfo`].
pub async fn fetch_session(endpoint: &str) -> Result<SessionInfo, ClientError> {
    let body = get_text(endpoint).await?;
    parse_session(endpoint, &body)
}

/// Fetch the plain-text body of `endpoint` (normally `/data`).
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn fetch_text(endpoint: &str) -> Result<String, ClientError> {
    get_text(endpoint).await
}

pub(crate) fn parse_comments(endpoint: &str, body: &str) -> Result<Vec<Comment>, ClientError> {
    serde_json::from_str::<CommentsResponse>(body)
        .map(|resp| resp.comments)
        .map_err(|e| ClientError::decode(endpoint, e))
}

pub(crate) fn parse_session(endpoint: &str, body: &str) -> Result<SessionInfo, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::decode(endpoint, e))
}

async fn get_text(endpoint: &str) -> Result<String, ClientError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;
        if !resp.ok() {
            return Err(ClientError::Status { endpoint: endpoint.to_owned(), status: resp.status() });
        }
        resp.text().await.map_err(|e| ClientError::network(endpoint, e))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(ClientError::Unavailable)
    }
}
