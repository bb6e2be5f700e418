//! Fetch-and-render flows for each page component.
//!
//! SYSTEM CONTEXT
//! ==============
//! A renderer owns one reactive state signal and the endpoint it reads.
//! `mount` attaches the matching component to a page container once;
//! every `render` call afterwards performs one fetch and, if no newer call
//! has been issued meanwhile, replaces what that container shows.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch shows the component's inline failure message and is also
//! returned to the caller. Stale outcomes, successful or not, never touch
//! the displayed state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::future::Future;

use leptos::prelude::*;

use crate::error::ClientError;
use crate::net::api;
use crate::state::comments::{self, CommentsState};
use crate::state::data::{self, DataState};
use crate::state::load::Tracked;
use crate::state::session::{self, SessionDisplay, SessionState};

/// Run one tracked request against `state`.
///
/// The token is taken before `fetch` is first polled, so a later call
/// always supersedes this one regardless of which response lands first.
pub(crate) async fn run_tracked<T, F>(
    state: RwSignal<Tracked<T>>,
    failed_message: &'static str,
    fetch: F,
) -> Result<(), ClientError>
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ClientError>>,
{
    let Some(token) = state.try_update_untracked(Tracked::begin) else {
        // Signal disposed: the component is gone, nothing to render into.
        return Ok(());
    };

    let (outcome, result) = match fetch.await {
        Ok(value) => (Ok(value), Ok(())),
        Err(e) => (Err(failed_message.to_owned()), Err(e)),
    };

    // Only an accepted outcome notifies; a stale one must not rebuild the view.
    let applied = state
        .try_maybe_update(|s| {
            let applied = s.resolve(token, outcome);
            (applied, applied)
        })
        .unwrap_or(false);
    if !applied {
        #[cfg(feature = "csr")]
        log::debug!("discarded stale response ({failed_message})");
    }
    result
}

/// Renders the `/comments` snapshot into the comments list container.
#[derive(Clone, Debug)]
pub struct CommentsRenderer {
    endpoint: String,
    state: RwSignal<CommentsState>,
}

impl CommentsRenderer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), state: RwSignal::new(CommentsState::default()) }
    }

    pub fn state(&self) -> RwSignal<CommentsState> {
        self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Clear `target` and attach the comments list to it.
    #[cfg(feature = "csr")]
    pub fn mount(&self, target: web_sys::HtmlElement) {
        use crate::components::comments_list::CommentsList;

        crate::util::dom::clear(&target);
        let state = self.state;
        leptos::mount::mount_to(target, move || view! { <CommentsList state/> }).forget();
    }

    /// Fetch the comment list and replace the rendered rows.
    ///
    /// # Errors
    ///
    /// Returns the fetch or decode error; the list then shows
    /// [`comments::LOAD_FAILED_MESSAGE`].
    pub async fn render(&self) -> Result<(), ClientError> {
        let endpoint = self.endpoint.as_str();
        run_tracked(self.state, comments::LOAD_FAILED_MESSAGE, async move {
            let list = api::fetch_comments(endpoint).await?;
            Ok(comments::build_entries(&list))
        })
        .await
    }
}

/// Renders the login-aware comment section from `/login`.
#[derive(Clone, Debug)]
pub struct SessionView {
    endpoint: String,
    state: RwSignal<SessionState>,
}

impl SessionView {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), state: RwSignal::new(SessionState::default()) }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Clear `target` and attach the comment section to it.
    #[cfg(feature = "csr")]
    pub fn mount(&self, target: web_sys::HtmlElement) {
        use crate::components::comments_section::CommentsSection;

        crate::util::dom::clear(&target);
        let state = self.state;
        leptos::mount::mount_to(target, move || view! { <CommentsSection state/> }).forget();
    }

    /// Fetch session status and show the form or the login prompt.
    ///
    /// # Errors
    ///
    /// Returns the fetch or decode error; the section then shows
    /// [`session::LOAD_FAILED_MESSAGE`] rather than either display.
    pub async fn render(&self) -> Result<(), ClientError> {
        let endpoint = self.endpoint.as_str();
        run_tracked(self.state, session::LOAD_FAILED_MESSAGE, async move {
            let info = api::fetch_session(endpoint).await?;
            SessionDisplay::from_info(endpoint, info)
        })
        .await
    }
}

/// Shows the plain-text `/data` body.
#[derive(Clone, Debug)]
pub struct DataLoader {
    endpoint: String,
    state: RwSignal<DataState>,
}

impl DataLoader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), state: RwSignal::new(DataState::default()) }
    }

    pub fn state(&self) -> RwSignal<DataState> {
        self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[cfg(feature = "csr")]
    pub fn mount(&self, target: web_sys::HtmlElement) {
        use crate::components::data_panel::DataPanel;

        crate::util::dom::clear(&target);
        let state = self.state;
        leptos::mount::mount_to(target, move || view! { <DataPanel state/> }).forget();
    }

    /// # Errors
    ///
    /// Returns the fetch error; the panel then shows
    /// [`data::LOAD_FAILED_MESSAGE`].
    pub async fn render(&self) -> Result<(), ClientError> {
        let endpoint = self.endpoint.as_str();
        run_tracked(self.state, data::LOAD_FAILED_MESSAGE, api::fetch_text(endpoint)).await
    }
}
