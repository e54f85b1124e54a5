//! Client configuration types.
//!
//! Settings come from defaults, then environment variables, then builder
//! calls made by the binary.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable overriding the configuration directory.
pub const ENV_CONFIG_DIR: &str = "PLAYCTL_CONFIG_DIR";
/// Environment variable holding a `tracing` filter directive.
pub const ENV_LOG: &str = "PLAYCTL_LOG";
/// Environment variable selecting the [`DecodeFailurePolicy`].
pub const ENV_DECODE_FAILURE: &str = "PLAYCTL_DECODE_FAILURE";

/// Name of the persisted key configuration file.
pub const KEY_CONFIG_FILE: &str = "keys.json";

/// What the listing does when a pushed snapshot cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeFailurePolicy {
    /// Keep showing the last good listing
    #[default]
    KeepStale,
    /// Drop to an empty listing
    Reset,
}

impl DecodeFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeFailurePolicy::KeepStale => "keep-stale",
            DecodeFailurePolicy::Reset => "reset",
        }
    }
}

impl fmt::Display for DecodeFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodeFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep-stale" | "keep" | "stale" => Ok(DecodeFailurePolicy::KeepStale),
            "reset" | "clear" => Ok(DecodeFailurePolicy::Reset),
            other => Err(format!("unknown decode failure policy '{}'", other)),
        }
    }
}

/// Configuration for a client session.
///
/// # Example
///
/// ```
/// use playctl::startup::{ClientConfig, DecodeFailurePolicy};
///
/// let config = ClientConfig::default()
///     .with_persist_keys(false)
///     .with_decode_failure(DecodeFailurePolicy::Reset);
/// assert!(config.key_config_path().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory holding persisted settings (default: `<config_dir>/playctl`)
    pub config_dir: Option<PathBuf>,
    /// `tracing` filter directive (default: `info`)
    pub log_filter: String,
    /// Listing behaviour on undecodable pushes
    pub decode_failure: DecodeFailurePolicy,
    /// Load and save the key configuration on disk
    pub persist_keys: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_dir: dirs::config_dir().map(|dir| dir.join("playctl")),
            log_filter: "info".to_string(),
            decode_failure: DecodeFailurePolicy::default(),
            persist_keys: true,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_decode_failure(mut self, policy: DecodeFailurePolicy) -> Self {
        self.decode_failure = policy;
        self
    }

    pub fn with_persist_keys(mut self, persist: bool) -> Self {
        self.persist_keys = persist;
        self
    }

    /// Where the key configuration is persisted, if persistence is enabled.
    pub fn key_config_path(&self) -> Option<PathBuf> {
        if !self.persist_keys {
            return None;
        }
        self.config_dir.as_ref().map(|dir| dir.join(KEY_CONFIG_FILE))
    }

    /// Create config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_CONFIG_DIR).filter(|d| !d.is_empty()) {
            config = config.with_config_dir(dir);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.is_empty()) {
            config = config.with_log_filter(filter);
        }
        if let Some(policy) = lookup(ENV_DECODE_FAILURE).and_then(|p| p.parse().ok()) {
            config = config.with_decode_failure(policy);
        }

        config
    }
}
