//! Networking modules for the page's REST collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP reads and `types` defines the wire schema of the
//! `/comments` and `/login` endpoints.

pub mod api;
pub mod types;
