//! Action to input-code bindings.
//!
//! The [`BindingTable`] holds a bijection between [`Action`]s and input
//! codes. Every action owns one slot; a slot is either [`UNBOUND`] or a
//! positive input code, and no positive code appears in two slots.
//!
//! One table is shared between the input dispatch path (frequent readers)
//! and the key configuration editor (rare writers). All operations take a
//! single table-wide lock for their full duration, so no caller can observe
//! a table that violates injectivity.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::action::{Action, ACTION_COUNT};
use super::keycodes::{
    InputCode, KEY_NUM0, KEY_NUM1, KEY_NUM2, KEY_NUM3, KEY_NUM4, KEY_NUM5, KEY_NUM6, KEY_NUM7,
    KEY_NUM8, KEY_POUND, KEY_STAR, UNBOUND,
};

/// Built-in key configuration, indexed by action code.
const DEFAULT_SLOTS: [InputCode; ACTION_COUNT] = [
    KEY_NUM5,  // Play/Pause
    UNBOUND,   // Stop
    KEY_NUM8,  // Next
    KEY_NUM2,  // Previous
    KEY_NUM6,  // Volume up
    KEY_NUM4,  // Volume down
    KEY_NUM1,  // Volume mute
    KEY_POUND, // Rate up
    KEY_STAR,  // Rate down
    KEY_NUM3,  // Edit item
    KEY_NUM0,  // Show playlist
    KEY_NUM7,  // Show image
];

/// Returned by [`BindingTable::bind`] when the key already belongs to another action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("key {code} is already bound to '{holder}'")]
    Conflict { code: InputCode, holder: Action },
}

/// Why a candidate configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("configuration has {actual} slots, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("key {0} is bound to more than one action")]
    DuplicateCode(InputCode),
}

/// A complete key configuration: one input code per action, indexed by action code.
///
/// Serializes as a plain array of `ACTION_COUNT` integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<InputCode>", into = "Vec<InputCode>")]
pub struct KeyConfig {
    slots: [InputCode; ACTION_COUNT],
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl KeyConfig {
    /// The built-in configuration.
    pub const DEFAULT: KeyConfig = KeyConfig {
        slots: DEFAULT_SLOTS,
    };

    /// A configuration with every action unbound.
    pub const fn empty() -> Self {
        Self {
            slots: [UNBOUND; ACTION_COUNT],
        }
    }

    /// Checks length and injectivity of a raw slot sequence.
    pub fn validate(slots: &[InputCode]) -> Result<(), ValidationError> {
        if slots.len() != ACTION_COUNT {
            return Err(ValidationError::WrongLength {
                expected: ACTION_COUNT,
                actual: slots.len(),
            });
        }

        for (i, &code) in slots.iter().enumerate() {
            if code == UNBOUND {
                continue;
            }
            if slots[i + 1..].contains(&code) {
                return Err(ValidationError::DuplicateCode(code));
            }
        }

        Ok(())
    }

    /// Builds a configuration from a raw slot sequence, validating it first.
    pub fn from_slots(slots: &[InputCode]) -> Result<Self, ValidationError> {
        Self::validate(slots)?;
        let mut config = Self::empty();
        config.slots.copy_from_slice(slots);
        Ok(config)
    }

    /// Input code bound to `action`, or [`UNBOUND`].
    pub fn get(&self, action: Action) -> InputCode {
        self.slots[action.code()]
    }

    /// Raw slots, indexed by action code.
    pub fn as_slots(&self) -> &[InputCode] {
        &self.slots
    }

    /// Action currently holding `code`, if any.
    pub fn holder_of(&self, code: InputCode) -> Option<Action> {
        if code == UNBOUND {
            return None;
        }
        self.slots
            .iter()
            .position(|&slot| slot == code)
            .and_then(Action::from_code)
    }

    /// Iterates over `(action, code)` pairs in action order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, InputCode)> + '_ {
        Action::ALL.iter().map(move |&a| (a, self.slots[a.code()]))
    }
}

impl TryFrom<Vec<InputCode>> for KeyConfig {
    type Error = ValidationError;

    fn try_from(slots: Vec<InputCode>) -> Result<Self, Self::Error> {
        Self::from_slots(&slots)
    }
}

impl From<KeyConfig> for Vec<InputCode> {
    fn from(config: KeyConfig) -> Self {
        config.slots.to_vec()
    }
}

impl fmt::Display for KeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (action, code) in self.iter() {
            writeln!(
                f,
                "{:>2}  {:<14} {}",
                action.code(),
                action.display_name(),
                super::keycodes::key_label(code)
            )?;
        }
        Ok(())
    }
}

/// Shared, lock-protected key configuration.
///
/// Create one per session and hand out `Arc<BindingTable>` to the input
/// dispatcher and the settings editor.
#[derive(Debug)]
pub struct BindingTable {
    config: RwLock<KeyConfig>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingTable {
    /// Creates a table holding the default configuration.
    pub fn new() -> Self {
        Self::with_config(KeyConfig::DEFAULT)
    }

    /// Creates a table holding an already validated configuration.
    pub fn with_config(config: KeyConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    // Writes are single-step, so a poisoned table is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, KeyConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, KeyConfig> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolves an input code to its action. `None` means no-op.
    pub fn resolve_action(&self, code: InputCode) -> Option<Action> {
        self.read().holder_of(code)
    }

    /// Input code bound to `action`, or [`UNBOUND`].
    pub fn lookup_input_code(&self, action: Action) -> InputCode {
        self.read().get(action)
    }

    /// Whether any action currently claims `code`.
    pub fn is_input_code_bound(&self, code: InputCode) -> bool {
        self.read().holder_of(code).is_some()
    }

    /// Binds `code` to `action`. Binding [`UNBOUND`] clears the slot.
    ///
    /// Fails without changing anything if another action holds `code`.
    pub fn bind(&self, action: Action, code: InputCode) -> Result<(), BindError> {
        let mut config = self.write();

        if let Some(holder) = config.holder_of(code) {
            if holder != action {
                warn!(%action, %holder, code, "Key bind rejected: key already in use");
                return Err(BindError::Conflict { code, holder });
            }
        }

        config.slots[action.code()] = code;
        debug!(%action, code, "Key bound");
        Ok(())
    }

    /// Clears the slot of `action`.
    pub fn unbind(&self, action: Action) {
        self.write().slots[action.code()] = UNBOUND;
        debug!(%action, "Key unbound");
    }

    /// Frees `code`, returning the action that held it.
    pub fn release_input_code(&self, code: InputCode) -> Option<Action> {
        let mut config = self.write();
        let holder = config.holder_of(code)?;
        config.slots[holder.code()] = UNBOUND;
        debug!(action = %holder, code, "Key released");
        Some(holder)
    }

    /// Moves `code` to `action`, taking it away from its current holder.
    ///
    /// Returns the action that lost the key, if it was another action.
    pub fn reassign(&self, action: Action, code: InputCode) -> Option<Action> {
        let mut config = self.write();

        let previous = config.holder_of(code).filter(|&holder| holder != action);
        if let Some(holder) = previous {
            config.slots[holder.code()] = UNBOUND;
        }
        config.slots[action.code()] = code;

        debug!(%action, code, previous = ?previous, "Key reassigned");
        previous
    }

    /// Replaces the whole configuration after validating it.
    ///
    /// On error the current configuration is left untouched.
    pub fn replace_configuration(&self, slots: &[InputCode]) -> Result<(), ValidationError> {
        let config = KeyConfig::from_slots(slots).inspect_err(|e| {
            warn!(error = %e, "Bad key configuration, keeping current");
        })?;

        *self.write() = config;
        debug!("Key configuration replaced");
        Ok(())
    }

    /// Restores the built-in configuration.
    pub fn reset_to_default(&self) {
        *self.write() = KeyConfig::DEFAULT;
        debug!("Key configuration reset to defaults");
    }

    /// A consistent copy of the current configuration.
    pub fn configuration(&self) -> KeyConfig {
        *self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keycodes::KEY_NUM9;

    #[test]
    fn test_default_config_is_valid() {
        assert!(KeyConfig::validate(&DEFAULT_SLOTS).is_ok());
        assert_eq!(KeyConfig::DEFAULT.get(Action::PlayPause), KEY_NUM5);
        assert_eq!(KeyConfig::DEFAULT.get(Action::Stop), UNBOUND);
    }

    #[test]
    fn test_validate_wrong_length() {
        let err = KeyConfig::validate(&[KEY_NUM1, KEY_NUM2]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongLength {
                expected: ACTION_COUNT,
                actual: 2
            }
        );
    }

    #[test]
    fn test_validate_duplicate() {
        let mut slots = DEFAULT_SLOTS;
        slots[1] = KEY_NUM5;
        assert_eq!(
            KeyConfig::validate(&slots),
            Err(ValidationError::DuplicateCode(KEY_NUM5))
        );
    }

    #[test]
    fn test_validate_allows_many_unbound() {
        assert!(KeyConfig::validate(&[UNBOUND; ACTION_COUNT]).is_ok());
    }

    #[test]
    fn test_resolve_action() {
        let table = BindingTable::new();
        assert_eq!(table.resolve_action(KEY_NUM8), Some(Action::Next));
        assert_eq!(table.resolve_action(KEY_NUM9), None);
        assert_eq!(table.resolve_action(UNBOUND), None);
    }

    #[test]
    fn test_unbound_is_never_bound() {
        let table = BindingTable::new();
        assert!(!table.is_input_code_bound(UNBOUND));
        assert!(table.is_input_code_bound(KEY_STAR));
    }

    #[test]
    fn test_bind_conflict_leaves_table_unchanged() {
        let table = BindingTable::new();
        let before = table.configuration();

        let err = table.bind(Action::Stop, KEY_NUM5).unwrap_err();
        assert_eq!(
            err,
            BindError::Conflict {
                code: KEY_NUM5,
                holder: Action::PlayPause
            }
        );
        assert_eq!(table.configuration(), before);
    }

    #[test]
    fn test_bind_same_action_same_key_succeeds() {
        let table = BindingTable::new();
        assert!(table.bind(Action::PlayPause, KEY_NUM5).is_ok());
        assert_eq!(table.lookup_input_code(Action::PlayPause), KEY_NUM5);
    }

    #[test]
    fn test_bind_zero_unbinds() {
        let table = BindingTable::new();
        table.bind(Action::Next, UNBOUND).unwrap();
        assert_eq!(table.lookup_input_code(Action::Next), UNBOUND);
        assert_eq!(table.resolve_action(KEY_NUM8), None);
    }

    #[test]
    fn test_release_input_code() {
        let table = BindingTable::new();
        table.bind(Action::Stop, KEY_NUM9).unwrap();
        assert_eq!(table.release_input_code(KEY_NUM9), Some(Action::Stop));
        assert_eq!(table.lookup_input_code(Action::Stop), UNBOUND);
        assert_eq!(table.release_input_code(KEY_NUM9), None);
        assert_eq!(table.release_input_code(UNBOUND), None);
    }

    #[test]
    fn test_reassign_steals_key() {
        let table = BindingTable::new();
        let previous = table.reassign(Action::Stop, KEY_NUM5);
        assert_eq!(previous, Some(Action::PlayPause));
        assert_eq!(table.lookup_input_code(Action::PlayPause), UNBOUND);
        assert_eq!(table.resolve_action(KEY_NUM5), Some(Action::Stop));
        assert!(KeyConfig::validate(table.configuration().as_slots()).is_ok());
    }

    #[test]
    fn test_reassign_own_key_reports_nothing() {
        let table = BindingTable::new();
        assert_eq!(table.reassign(Action::Next, KEY_NUM8), None);
        assert_eq!(table.lookup_input_code(Action::Next), KEY_NUM8);
    }

    #[test]
    fn test_replace_configuration_rejects_without_partial_write() {
        let table = BindingTable::new();
        let mut slots = [UNBOUND; ACTION_COUNT];
        slots[0] = KEY_NUM9;
        slots[11] = KEY_NUM9;

        assert_eq!(
            table.replace_configuration(&slots),
            Err(ValidationError::DuplicateCode(KEY_NUM9))
        );
        assert_eq!(table.configuration(), KeyConfig::DEFAULT);
    }

    #[test]
    fn test_reset_to_default() {
        let table = BindingTable::new();
        table.replace_configuration(&[UNBOUND; ACTION_COUNT]).unwrap();
        table.reset_to_default();
        assert_eq!(table.configuration(), KeyConfig::DEFAULT);
        table.reset_to_default();
        assert_eq!(table.configuration(), KeyConfig::DEFAULT);
    }

    #[test]
    fn test_key_config_serde() {
        let json = serde_json::to_string(&KeyConfig::DEFAULT).unwrap();
        assert_eq!(json, "[53,0,56,50,54,52,49,35,42,51,48,55]");
        let parsed: KeyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, KeyConfig::DEFAULT);
    }

    #[test]
    fn test_key_config_serde_rejects_duplicates() {
        let result: Result<KeyConfig, _> =
            serde_json::from_str("[53,53,0,0,0,0,0,0,0,0,0,0]");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_lists_every_action() {
        let text = KeyConfig::DEFAULT.to_string();
        assert_eq!(text.lines().count(), ACTION_COUNT);
        assert!(text.contains("Play/Pause"));
    }
}
