//! Unified error handling for the client core.
//!
//! Each component has its own `thiserror` enum; [`ClientError`] collects them
//! for callers that drive several components at once.
//!
//! | Category | Source | Effect |
//! |----------|--------|--------|
//! | Input | Key binding conflict or bad configuration | Table unchanged |
//! | Protocol | Malformed or mis-shaped server data | Model unchanged |
//!
//! No error from this crate leaves shared state half-updated.

mod category;
mod client_error;

pub use category::ErrorCategory;
pub use client_error::{ClientError, ClientResult};
