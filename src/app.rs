//! Page wiring: attaches each renderer to its container and runs the
//! page-load fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component mounts on its own. A missing container only disables
//! the component that renders into it; the rest of the page still loads.
//! Comments and session status are fetched at load, each spawned on its
//! own; the data panel only loads on request.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::PageConfig;
use crate::error::ClientError;
use crate::render::{CommentsRenderer, DataLoader, SessionView};

/// Renderers for one page, each bound to its endpoint.
///
/// A `None` renderer means its container is absent from the page.
#[derive(Clone, Debug)]
pub struct Page {
    pub config: PageConfig,
    pub comments: Option<CommentsRenderer>,
    pub session: Option<SessionView>,
    pub data: Option<DataLoader>,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        Self {
            comments: Some(CommentsRenderer::new(config.comments_endpoint.clone())),
            session: Some(SessionView::new(config.login_endpoint.clone())),
            data: Some(DataLoader::new(config.data_endpoint.clone())),
            config,
        }
    }
}

/// Mount `renderer` into `target`, or drop it when the target lookup failed.
pub(crate) fn attach<R, E>(
    renderer: R,
    target: Result<E, ClientError>,
    mount: impl FnOnce(&R, E),
) -> Option<R> {
    match target {
        Ok(target) => {
            mount(&renderer, target);
            Some(renderer)
        }
        Err(e) => {
            #[cfg(feature = "csr")]
            log::warn!("{e}; component disabled");
            #[cfg(not(feature = "csr"))]
            let _ = e;
            None
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;

    use super::{Page, attach};
    use crate::config::PageConfig;
    use crate::error::ClientError;
    use crate::render::{CommentsRenderer, DataLoader, SessionView};
    use crate::state::greeting::{browser_rng, pick_greeting};
    use crate::util::dom;

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    impl Page {
        /// Look up each container and attach the components that have one.
        pub fn mount(config: PageConfig) -> Self {
            let page = Self::new(config);
            let config = &page.config;

            let comments = page.comments.clone().and_then(|renderer| {
                attach(renderer, dom::require_element(&config.comments_container_id), CommentsRenderer::mount)
            });
            let session = page.session.clone().and_then(|renderer| {
                attach(renderer, dom::require_element(&config.comments_section_id), SessionView::mount)
            });
            // Optional container: no warning when the page omits it.
            let data = page
                .data
                .clone()
                .zip(dom::element_by_id(&config.data_container_id))
                .and_then(|(renderer, target)| attach(renderer, Ok(target), DataLoader::mount));

            Self { comments, session, data, ..page }
        }

        pub fn spawn_comments(&self) {
            let Some(comments) = self.comments.clone() else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = comments.render().await {
                    log::warn!("comments: {e}");
                }
            });
        }

        pub fn spawn_session(&self) {
            let Some(session) = self.session.clone() else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = session.render().await {
                    log::warn!("session: {e}");
                }
            });
        }

        pub fn spawn_data(&self) {
            let Some(data) = self.data.clone() else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = data.render().await {
                    log::warn!("data: {e}");
                }
            });
        }

        /// Write a random greeting into the greeting container.
        ///
        /// # Errors
        ///
        /// Returns [`ClientError::MissingTarget`] if the container is absent.
        pub fn show_greeting(&self) -> Result<(), ClientError> {
            let target = dom::require_element(&self.config.greeting_container_id)?;
            target.set_inner_text(pick_greeting(&mut browser_rng()));
            Ok(())
        }
    }

    /// Mount the page and kick off the comments and session fetches.
    pub fn boot(config: PageConfig) {
        let page = Page::mount(config);
        page.spawn_comments();
        page.spawn_session();
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    }

    /// Run `f` against the mounted page, if any.
    pub fn with_page(f: impl FnOnce(&Page)) {
        PAGE.with(|slot| match slot.borrow().as_ref() {
            Some(page) => f(page),
            None => log::warn!("page not mounted"),
        });
    }
}

#[cfg(feature = "csr")]
pub use browser::{boot, with_page};
