//! Comment-list view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Turns the `/comments` snapshot into the rows the comments list renders:
//! one list item per comment, followed by its image and, when the image has
//! classifier labels, a caption paragraph. Order is the backend's order.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::load::Tracked;
use crate::net::types::Comment;

/// Inline message shown when the list cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load comments.";

/// Display name used when the backend sends an empty username.
pub const ANONYMOUS_USERNAME: &str = "Anonymous User";

/// Comments list state with stale-response tracking.
pub type CommentsState = Tracked<Vec<CommentEntry>>;

/// One rendered comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentEntry {
    /// List item text, `"{comment} - by {username}"`.
    pub line: String,
    pub image: Option<CommentImage>,
}

/// Attached image rendered right after the list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentImage {
    pub url: String,
    /// Label paragraph rendered right after the image.
    pub caption: Option<String>,
}

/// Build the rows for a snapshot, one per comment, in order.
pub fn build_entries(comments: &[Comment]) -> Vec<CommentEntry> {
    comments.iter().map(build_entry).collect()
}

fn build_entry(comment: &Comment) -> CommentEntry {
    // Labels only ever render beneath an image.
    let image = comment.image_url.as_ref().map(|url| CommentImage {
        url: url.clone(),
        caption: comment.image_labels.as_deref().and_then(labels_caption),
    });
    CommentEntry { line: comment_line(comment), image }
}

/// `"{comment} - by {username}"`.
pub fn comment_line(comment: &Comment) -> String {
    let username = if comment.username.is_empty() {
        ANONYMOUS_USERNAME
    } else {
        comment.username.as_str()
    };
    format!("{} - by {username}", comment.comment_text)
}

/// `"This is a/an: {l1}, ..., {lN} image"`, or `None` for no labels.
pub fn labels_caption(labels: &[String]) -> Option<String> {
    if labels.is_empty() {
        return None;
    }
    Some(format!("This is a/an: {} image", labels.join(", ")))
}
