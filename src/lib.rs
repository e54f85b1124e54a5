//! playctl - remote-control client core for a media player
//!
//! Key bindings between device input codes and player actions, and the
//! columnar codec that carries the playlist listing from the server.
//! This library exposes modules for use in integration tests.

pub mod cli;
pub mod codec;
pub mod error;
pub mod input;
pub mod models;
pub mod monitor;
pub mod session;
pub mod startup;
pub mod storage;
pub mod traits;
