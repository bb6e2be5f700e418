//! Pure view state for the page components.
//!
//! DESIGN
//! ======
//! State modules hold no browser handles, so everything that decides what
//! the page shows is testable natively. Components wrap these types in
//! `RwSignal`s and render them.

pub mod comments;
pub mod data;
pub mod greeting;
pub mod load;
pub mod session;
