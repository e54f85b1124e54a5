//! Dispatching terminal key events to actions.
//!
//! ```text
//! KeyEvent -> input_code_for_key() -> BindingTable::resolve_action() -> Action
//! ```

use std::sync::Arc;

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::trace;

use super::action::Action;
use super::bindings::BindingTable;
use super::keycodes::{input_code_for_key, InputCode};

/// Resolves key presses through a shared [`BindingTable`].
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    table: Arc<BindingTable>,
}

impl InputDispatcher {
    pub fn new(table: Arc<BindingTable>) -> Self {
        Self { table }
    }

    /// Returns the action for a key press, or `None` when the key is unbound,
    /// untranslatable, or not a press.
    pub fn dispatch(&self, key: KeyEvent) -> Option<Action> {
        self.resolve_key(&key)?.1
    }

    /// Translates a key press and resolves it.
    ///
    /// `None` for releases and keys with no input code; otherwise the code
    /// together with the action bound to it, if any.
    pub fn resolve_key(&self, key: &KeyEvent) -> Option<(InputCode, Option<Action>)> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let code = input_code_for_key(key)?;
        let action = self.table.resolve_action(code);
        trace!(code, action = ?action, "Key dispatched");
        Some((code, action))
    }

    /// The table this dispatcher reads from.
    pub fn table(&self) -> &Arc<BindingTable> {
        &self.table
    }
}
