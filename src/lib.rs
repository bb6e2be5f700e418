//! # portfolio-page
//!
//! Leptos + WASM client for the portfolio site's interactive parts: the
//! random greeting, the visitor comment list, and the login-aware comment
//! form. Comments and session status come from the site's `/comments` and
//! `/login` endpoints; this crate only reads them and renders.
//!
//! Browser glue is behind the `csr` feature. Without it the crate builds
//! natively and exposes the pure state and decoding layers for testing.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
mod entry {
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::app;
    use crate::config::PageConfig;

    /// Runs once when the WASM module is instantiated.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logging disabled: {e}").into());
        }
        if let Err(e) = leptos::task::Executor::init_wasm_bindgen() {
            log::debug!("executor already set: {e}");
        }
        app::boot(PageConfig::load());
    }

    /// Bound to the page's "Click here for a greeting" button.
    #[wasm_bindgen]
    pub fn add_random_greeting() {
        app::with_page(|page| {
            if let Err(e) = page.show_greeting() {
                log::warn!("greeting: {e}");
            }
        });
    }

    /// Re-fetch `/comments` and replace the rendered list.
    #[wasm_bindgen]
    pub fn refresh_comments() {
        app::with_page(app::Page::spawn_comments);
    }

    /// Re-fetch `/login` and re-render the comment section.
    #[wasm_bindgen]
    pub fn refresh_session() {
        app::with_page(app::Page::spawn_session);
    }

    /// Fetch `/data` into the data panel. Not run at page load.
    #[wasm_bindgen]
    pub fn refresh_data() {
        app::with_page(app::Page::spawn_data);
    }
}
