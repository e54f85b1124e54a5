//! Persistence of the key configuration.
//!
//! The file holds a JSON array of one input code per action, indexed by
//! action code, with `0` for unbound actions.

use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::path::Path;

use crate::input::KeyConfig;

/// Load a key configuration from `path`.
///
/// Returns `Ok(None)` if the file does not exist. A file that parses but
/// violates injectivity or has the wrong length is an error.
pub fn load_key_config(path: &Path) -> Result<Option<KeyConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .wrap_err(format!("Failed to read key configuration from {:?}", path))?;
    let config = serde_json::from_str(&json)
        .wrap_err(format!("Invalid key configuration in {:?}", path))?;
    Ok(Some(config))
}

/// Save a key configuration to `path`, creating parent directories.
pub fn save_key_config(path: &Path, config: &KeyConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .wrap_err(format!("Failed to create directory {:?}", parent))?;
        }
    }

    let json = serde_json::to_string(config).wrap_err("Failed to serialize key configuration")?;
    fs::write(path, json).wrap_err(format!("Failed to write key configuration to {:?}", path))?;
    Ok(())
}
