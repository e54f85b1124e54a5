//! Device input codes and translation from terminal key events.
//!
//! Input codes follow the handset keypad convention: digit, `*` and `#` keys
//! report their ASCII value. Printable characters map to their Unicode scalar
//! value; navigation keys live above the Unicode range so they can never
//! collide with a character. `0` is reserved for "unbound" and is never
//! produced here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A device-specific identifier for a physical key. `0` means unbound.
pub type InputCode = u32;

/// Sentinel stored in a configuration slot with no key.
pub const UNBOUND: InputCode = 0;

pub const KEY_NUM0: InputCode = b'0' as InputCode;
pub const KEY_NUM1: InputCode = b'1' as InputCode;
pub const KEY_NUM2: InputCode = b'2' as InputCode;
pub const KEY_NUM3: InputCode = b'3' as InputCode;
pub const KEY_NUM4: InputCode = b'4' as InputCode;
pub const KEY_NUM5: InputCode = b'5' as InputCode;
pub const KEY_NUM6: InputCode = b'6' as InputCode;
pub const KEY_NUM7: InputCode = b'7' as InputCode;
pub const KEY_NUM8: InputCode = b'8' as InputCode;
pub const KEY_NUM9: InputCode = b'9' as InputCode;
pub const KEY_STAR: InputCode = b'*' as InputCode;
pub const KEY_POUND: InputCode = b'#' as InputCode;

/// First code used for non-character keys (one past the last Unicode scalar).
const SPECIAL_BASE: InputCode = 0x11_0000;

pub const KEY_UP: InputCode = SPECIAL_BASE + 1;
pub const KEY_DOWN: InputCode = SPECIAL_BASE + 2;
pub const KEY_LEFT: InputCode = SPECIAL_BASE + 3;
pub const KEY_RIGHT: InputCode = SPECIAL_BASE + 4;
pub const KEY_SELECT: InputCode = SPECIAL_BASE + 5;
pub const KEY_BACK: InputCode = SPECIAL_BASE + 6;
pub const KEY_PAGE_UP: InputCode = SPECIAL_BASE + 7;
pub const KEY_PAGE_DOWN: InputCode = SPECIAL_BASE + 8;

/// Offset for function keys (`F1` is `KEY_F_BASE + 1`).
const KEY_F_BASE: InputCode = SPECIAL_BASE + 0x100;

/// Translates a terminal key event into a device input code.
///
/// Returns `None` for keys that have no device equivalent and for any key
/// combined with Control, Alt or Super, which the terminal reserves.
pub fn input_code_for_key(key: &KeyEvent) -> Option<InputCode> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(c as InputCode).filter(|code| *code != UNBOUND),
        KeyCode::Up => Some(KEY_UP),
        KeyCode::Down => Some(KEY_DOWN),
        KeyCode::Left => Some(KEY_LEFT),
        KeyCode::Right => Some(KEY_RIGHT),
        KeyCode::Enter => Some(KEY_SELECT),
        KeyCode::Esc | KeyCode::Backspace => Some(KEY_BACK),
        KeyCode::PageUp => Some(KEY_PAGE_UP),
        KeyCode::PageDown => Some(KEY_PAGE_DOWN),
        KeyCode::F(n) if n > 0 => Some(KEY_F_BASE + InputCode::from(n)),
        _ => None,
    }
}

/// Short label for an input code, used when listing bindings.
pub fn key_label(code: InputCode) -> String {
    match code {
        UNBOUND => "-".to_string(),
        KEY_UP => "Up".to_string(),
        KEY_DOWN => "Down".to_string(),
        KEY_LEFT => "Left".to_string(),
        KEY_RIGHT => "Right".to_string(),
        KEY_SELECT => "Select".to_string(),
        KEY_BACK => "Back".to_string(),
        KEY_PAGE_UP => "PgUp".to_string(),
        KEY_PAGE_DOWN => "PgDn".to_string(),
        c if c > KEY_F_BASE && c <= KEY_F_BASE + 0xFF => format!("F{}", c - KEY_F_BASE),
        c => match char::from_u32(c) {
            Some(ch) if !ch.is_control() => ch.to_string(),
            _ => format!("#{}", c),
        },
    }
}
