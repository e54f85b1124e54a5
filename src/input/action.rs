//! Action definitions for player remote control.
//!
//! An [`Action`] is a device-independent user intent. Each action has a
//! stable code in `[0, ACTION_COUNT)` which doubles as its slot index in a
//! key configuration, so the order of variants here is part of the
//! persisted format and must not change.

use std::fmt;

/// Number of bindable actions.
pub const ACTION_COUNT: usize = 12;

/// Represents every user intent that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Toggle between playing and paused
    PlayPause,
    /// Stop playback
    Stop,
    /// Skip to the next item
    Next,
    /// Go back to the previous item
    Previous,
    /// Raise the volume
    VolumeUp,
    /// Lower the volume
    VolumeDown,
    /// Toggle mute
    VolumeMute,
    /// Rate the current item higher
    RateUp,
    /// Rate the current item lower
    RateDown,
    /// Edit the current item's metadata
    EditItem,
    /// Show the playlist listing
    ShowListing,
    /// Show the current item's cover image
    ShowImage,
}

impl Action {
    /// Wire-level code sent for "no action".
    pub const NOOP_CODE: u8 = 100;

    /// All actions, in code order.
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::PlayPause,
        Action::Stop,
        Action::Next,
        Action::Previous,
        Action::VolumeUp,
        Action::VolumeDown,
        Action::VolumeMute,
        Action::RateUp,
        Action::RateDown,
        Action::EditItem,
        Action::ShowListing,
        Action::ShowImage,
    ];

    /// Returns the stable action code (also the configuration slot index).
    pub const fn code(self) -> usize {
        self as usize
    }

    /// Looks up an action by code.
    pub fn from_code(code: usize) -> Option<Action> {
        Self::ALL.get(code).copied()
    }

    /// Human-readable name shown in the key configuration screen.
    pub const fn display_name(self) -> &'static str {
        match self {
            Action::PlayPause => "Play/Pause",
            Action::Stop => "Stop",
            Action::Next => "Next",
            Action::Previous => "Previous",
            Action::VolumeUp => "Volume up",
            Action::VolumeDown => "Volume down",
            Action::VolumeMute => "Volume mute",
            Action::RateUp => "Rate up",
            Action::RateDown => "Rate down",
            Action::EditItem => "Edit item",
            Action::ShowListing => "Show playlist",
            Action::ShowImage => "Show image",
        }
    }

    /// Converts an optional resolution result into the code sent over the wire.
    pub fn wire_code(action: Option<Action>) -> u8 {
        action.map_or(Self::NOOP_CODE, |a| a.code() as u8)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
