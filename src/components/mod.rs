//! Leptos components mounted into the page's existing containers.

pub mod comments_list;
pub mod comments_section;
pub mod data_panel;
