//! Interactive key monitor.
//!
//! Reads key presses from the terminal, resolves them through the session's
//! binding table and prints the action each one triggers. `ShowListing`
//! prints the current listing. Ctrl+C quits.

mod terminal;

pub use terminal::{setup_panic_hook, RawModeGuard};

use std::io::{self, Write};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tracing::debug;

use crate::input::{key_label, Action, InputDispatcher};
use crate::models::ListingModel;
use crate::session::Session;

/// What the monitor does with one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorStep {
    /// Print a line and keep going
    Print(String),
    /// Key has no device equivalent
    Ignore,
    /// Leave the monitor
    Quit,
}

/// Decides the response to one key event.
pub fn step(dispatcher: &InputDispatcher, listing: &ListingModel, key: KeyEvent) -> MonitorStep {
    if key.kind != KeyEventKind::Release
        && key.code == KeyCode::Char('c')
        && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        return MonitorStep::Quit;
    }

    let Some((code, action)) = dispatcher.resolve_key(&key) else {
        return MonitorStep::Ignore;
    };

    match action {
        Some(Action::ShowListing) => {
            MonitorStep::Print(format!("{} -> {}", key_label(code), listing))
        }
        Some(action) => MonitorStep::Print(format!(
            "{} -> {} (code {})",
            key_label(code),
            action,
            Action::wire_code(Some(action))
        )),
        None => MonitorStep::Print(format!("{} -> unbound", key_label(code))),
    }
}

/// Runs the monitor until Ctrl+C or the end of the event stream.
pub async fn run_monitor(session: &Session) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", session.bindings().configuration())?;
    writeln!(stdout, "Press keys to see their actions, Ctrl+C to quit.")?;

    let dispatcher = session.dispatcher();
    let mut guard = RawModeGuard::enable()?;
    let mut events = EventStream::new();

    while let Some(event) = events.next().await {
        let Event::Key(key) = event? else {
            continue;
        };
        match step(&dispatcher, session.listing(), key) {
            MonitorStep::Print(line) => {
                // Raw mode needs an explicit carriage return
                write!(stdout, "{}\r\n", line)?;
                stdout.flush()?;
            }
            MonitorStep::Ignore => debug!(code = ?key.code, "Key ignored"),
            MonitorStep::Quit => break,
        }
    }

    guard.cleanup();
    Ok(())
}
