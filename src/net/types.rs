//! Wire DTOs for the `/comments` and `/login` collaborator endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`comment`, `imageUrl`, ...). Both
//! `null` and a missing key decode to `None`; extra keys such as `id` and
//! `timestamp` are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One visitor comment as produced by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Free text the visitor entered.
    #[serde(rename = "comment")]
    pub comment_text: String,
    pub username: String,
    /// Serving URL of the attached image, if one was uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Classifier labels for the attached image, most confident first.
    #[serde(default)]
    pub image_labels: Option<Vec<String>>,
}

/// Body of `GET /comments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// Body of `GET /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default)]
    pub user_email: Option<String>,
    /// Logout URL when authenticated, login URL otherwise.
    pub url: String,
    #[serde(default)]
    pub upload_url: Option<String>,
}

impl SessionInfo {
    /// The signed-in email, treating an empty string as signed out.
    pub fn email(&self) -> Option<&str> {
        self.user_email.as_deref().filter(|email| !email.is_empty())
    }
}
