//! Key configuration commands.

use color_eyre::eyre::{eyre, Report};
use color_eyre::Result;

use crate::input::{key_label, Action, InputCode};
use crate::session::Session;

/// Handle `--keys`.
pub fn handle_show_keys(session: &Session) -> Result<()> {
    print!("{}", session.bindings().configuration());
    Ok(())
}

/// Handle `--reset-keys`.
pub fn handle_reset_keys(session: &Session) -> Result<()> {
    session.bindings().reset_to_default();
    persist(session)?;
    println!("Key configuration reset to defaults.");
    Ok(())
}

/// Handle `--bind`.
///
/// A key held by another action is refused unless `steal` is set, in which
/// case the previous holder is left unbound.
pub fn handle_bind(session: &Session, action: Action, code: InputCode, steal: bool) -> Result<()> {
    let previous = session.bind_key(action, code, steal).map_err(|e| {
        let hint = e.category().recovery_hint();
        Report::new(e).wrap_err(format!(
            "Cannot bind {} to {}. {} (or pass --steal)",
            key_label(code),
            action,
            hint
        ))
    })?;

    match previous {
        Some(previous) => println!(
            "{} moved from {} to {}; {} is now unbound.",
            key_label(code),
            previous,
            action,
            previous
        ),
        _ => println!("{} bound to {}.", key_label(code), action),
    }
    persist(session)
}

fn persist(session: &Session) -> Result<()> {
    if session.save_keys()? {
        Ok(())
    } else {
        Err(eyre!("no configuration directory; the change was not saved"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyConfig, KEY_NUM5, KEY_NUM9, UNBOUND};
    use crate::startup::ClientConfig;
    use crate::storage::load_key_config;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        Session::start(ClientConfig::new().with_config_dir(dir.path()))
    }

    #[test]
    fn test_bind_persists() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        handle_bind(&session, Action::Stop, KEY_NUM9, false).unwrap();

        let path = session.config().key_config_path().unwrap();
        let saved = load_key_config(&path).unwrap().unwrap();
        assert_eq!(saved.get(Action::Stop), KEY_NUM9);
    }

    #[test]
    fn test_bind_conflict_is_refused() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        let err = handle_bind(&session, Action::Stop, KEY_NUM5, false).unwrap_err();

        assert!(format!("{:#}", err).contains("already bound to 'Play/Pause'"));
        assert_eq!(session.bindings().configuration(), KeyConfig::DEFAULT);
        assert!(!session.config().key_config_path().unwrap().exists());
    }

    #[test]
    fn test_bind_steals_code() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        handle_bind(&session, Action::Stop, KEY_NUM5, true).unwrap();

        let keys = session.bindings();
        assert_eq!(keys.resolve_action(KEY_NUM5), Some(Action::Stop));
        assert_eq!(keys.lookup_input_code(Action::PlayPause), UNBOUND);
    }

    #[test]
    fn test_reset_persists_defaults() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);
        handle_bind(&session, Action::Stop, KEY_NUM9, false).unwrap();
        handle_reset_keys(&session).unwrap();

        let path = session.config().key_config_path().unwrap();
        let saved = load_key_config(&path).unwrap().unwrap();
        assert_eq!(saved, KeyConfig::DEFAULT);
    }

    #[test]
    fn test_persist_disabled_is_error() {
        let session = Session::new(ClientConfig::new().with_persist_keys(false));
        assert!(handle_reset_keys(&session).is_err());
    }
}
