//! Login-aware comment-section state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/login` decides between two mutually exclusive displays: the comment
//! submission form for a signed-in visitor, or a login prompt. The choice is
//! re-derived from every response; nothing carries over between fetches.
//!
//! ERROR HANDLING
//! ==============
//! A response that cannot drive either display is an error. It is never
//! mapped to `LoggedOut` (or `LoggedIn`) as a fallback.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::load::Tracked;
use crate::error::ClientError;
use crate::net::types::SessionInfo;

/// Inline message shown when the session cannot be checked.
pub const LOAD_FAILED_MESSAGE: &str = "Unable to check login status.";

/// Multipart field carrying the comment text.
pub const COMMENT_FIELD: &str = "text-input";
/// Multipart field carrying the optional image upload.
pub const IMAGE_FIELD: &str = "imageFile";
pub const FORM_ENCTYPE: &str = "multipart/form-data";

/// Session display state with stale-response tracking.
pub type SessionState = Tracked<SessionDisplay>;

/// Which comment-section variant to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionDisplay {
    LoggedIn(SignedIn),
    LoggedOut { login_url: String },
}

/// Everything the submission form needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedIn {
    pub email: String,
    pub logout_url: String,
    /// Multipart form target minted by the backend.
    pub upload_url: String,
}

impl SessionDisplay {
    /// Pick the display for a `/login` response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when a signed-in response carries no
    /// upload URL, since the form would have nowhere to post.
    pub fn from_info(endpoint: &str, info: SessionInfo) -> Result<Self, ClientError> {
        let Some(email) = info.email().map(str::to_owned) else {
            return Ok(Self::LoggedOut { login_url: info.url });
        };
        let upload_url = info
            .upload_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::decode(endpoint, "signed-in session without uploadUrl"))?;
        Ok(Self::LoggedIn(SignedIn { email, logout_url: info.url, upload_url }))
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}

/// Greeting shown at the top of the submission form.
pub fn form_greeting(email: &str) -> String {
    format!("Hello {email}! Enter any comments (multiple comments are separated by enter):")
}
