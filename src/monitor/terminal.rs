//! Raw-mode handling for the key monitor.

use std::io::{self, Write};
use std::panic;

use color_eyre::Result;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::cursor::Show;

/// RAII guard that leaves raw mode on drop.
pub struct RawModeGuard {
    cleaned_up: bool,
}

impl RawModeGuard {
    /// Enter raw mode.
    pub fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self { cleaned_up: false })
    }

    /// Leave raw mode now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        restore(&mut io::stdout());
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn restore<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal before the panic message prints.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore(&mut io::stdout());
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_writes_show_cursor() {
        let mut out = Vec::new();
        restore(&mut out);
        assert!(!out.is_empty());
    }
}
