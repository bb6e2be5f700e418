//! Page element lookup for the render targets.
//!
//! Requires a browser environment; only compiled with the `csr` feature.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::error::ClientError;

/// Element with `id`, if the page has one.
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Element with `id`, or [`ClientError::MissingTarget`].
///
/// # Errors
///
/// Returns an error if the page has no such element.
pub fn require_element(id: &str) -> Result<HtmlElement, ClientError> {
    element_by_id(id).ok_or_else(|| ClientError::MissingTarget(id.to_owned()))
}

/// Drop all children of a render target before mounting into it.
pub fn clear(target: &HtmlElement) {
    target.set_inner_html("");
}
