//! Page configuration: container ids and collaborator endpoint paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the portfolio page markup. A page may override any subset
//! by embedding `<script type="application/json" id="portfolio-config">`;
//! keys it omits keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ClientError;

/// Element id of the optional inline JSON config document.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Where each component renders and which endpoint it reads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub greeting_container_id: String,
    pub comments_container_id: String,
    pub comments_section_id: String,
    /// Optional container; the data panel is skipped when the page lacks it.
    pub data_container_id: String,
    pub comments_endpoint: String,
    pub login_endpoint: String,
    pub data_endpoint: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            greeting_container_id: "greeting-container".to_owned(),
            comments_container_id: "comments-servlet".to_owned(),
            comments_section_id: "comments-section".to_owned(),
            data_container_id: "data-servlet".to_owned(),
            comments_endpoint: "/comments".to_owned(),
            login_endpoint: "/login".to_owned(),
            data_endpoint: "/data".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse an override document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the document is not a JSON object
    /// of string fields.
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ClientError::decode(CONFIG_ELEMENT_ID, e))
    }

    /// Read the inline config document from the page, falling back to
    /// defaults when it is absent or unreadable.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(raw) = crate::util::dom::element_by_id(CONFIG_ELEMENT_ID)
                .and_then(|el| el.text_content())
            else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring page config: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
