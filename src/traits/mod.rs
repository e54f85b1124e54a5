//! Trait abstractions shared across models and transport glue.
//!
//! # Traits
//!
//! - [`StructuredData`] - Entities exchanged as typed columns

pub mod structured;

pub use structured::{ApplyError, StructuredData};
