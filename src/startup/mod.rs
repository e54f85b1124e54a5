//! Startup: configuration, logging and session bootstrap.
//!
//! # Usage
//!
//! ```no_run
//! use playctl::startup::{init_logging, ClientConfig};
//! use playctl::session::Session;
//!
//! let config = ClientConfig::from_env();
//! init_logging(&config.log_filter);
//! let session = Session::start(config);
//! ```

pub mod config;
pub mod logging;

pub use config::{ClientConfig, DecodeFailurePolicy};
pub use logging::init_logging;
