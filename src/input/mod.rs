//! Input handling: actions, key bindings and key event dispatch.
//!
//! # Architecture
//!
//! ```text
//! KeyEvent -> InputDispatcher::dispatch() -> BindingTable -> Action -> UI
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use playctl::input::{Action, BindingTable, KEY_NUM5};
//!
//! let table = Arc::new(BindingTable::new());
//! assert_eq!(table.resolve_action(KEY_NUM5), Some(Action::PlayPause));
//! ```
//!
//! # Modules
//!
//! - [`action`] - The [`Action`] enum with all bindable user intents
//! - [`bindings`] - [`BindingTable`] and [`KeyConfig`]
//! - [`keycodes`] - Input code constants and key event translation
//! - [`dispatch`] - [`InputDispatcher`] for resolving key events

pub mod action;
pub mod bindings;
pub mod dispatch;
pub mod keycodes;

pub use action::{Action, ACTION_COUNT};
pub use bindings::{BindError, BindingTable, KeyConfig, ValidationError};
pub use dispatch::InputDispatcher;
pub use keycodes::{
    input_code_for_key, key_label, InputCode, KEY_NUM0, KEY_NUM1, KEY_NUM2, KEY_NUM3, KEY_NUM4,
    KEY_NUM5, KEY_NUM6, KEY_NUM7, KEY_NUM8, KEY_NUM9, KEY_POUND, KEY_STAR, UNBOUND,
};
