//! Plain-text data panel state.

use super::load::Tracked;

/// Inline message shown when `/data` cannot be read.
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load data.";

pub type DataState = Tracked<String>;
