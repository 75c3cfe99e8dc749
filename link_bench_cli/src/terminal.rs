use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use error_printer::ErrorPrinter;
use link_bench::CancellationSignal;
use tracing::info;

/// Raw terminal mode for as long as the guard lives.  Dropping it restores the previous mode on every exit
/// path, including early returns and unwinding.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode().warn_error("Failed to restore terminal mode");
    }
}

/// `q`, `Esc` and `Ctrl-C` stop the benchmark.
pub fn is_stop_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Polls the keyboard without blocking, consuming at most one pending event per poll.  Once a stop key was
/// seen, every later poll reports cancellation.
#[derive(Debug, Default)]
pub struct KeypressCancellation {
    requested: bool,
}

impl KeypressCancellation {
    pub fn new() -> Self {
        Self::default()
    }

    fn observe(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if is_stop_key(key) {
                info!("Stop requested from keyboard");
                self.requested = true;
            }
        }
    }
}

impl CancellationSignal for KeypressCancellation {
    fn poll_cancelled(&mut self) -> bool {
        if self.requested {
            return true;
        }

        let pending = event::poll(Duration::ZERO).warn_error("Failed to poll keyboard").unwrap_or(false);
        if pending {
            if let Ok(event) = event::read().warn_error("Failed to read keyboard event") {
                self.observe(&event);
            }
        }

        self.requested
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_stop_keys() {
        assert!(is_stop_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_stop_key(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_stop_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));

        assert!(!is_stop_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_stop_key(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_stop_key(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(!is_stop_key(&release));
    }

    #[test]
    fn test_stop_request_is_sticky() {
        let mut cancel = KeypressCancellation::new();
        cancel.observe(&Event::Key(key(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(!cancel.requested);
        cancel.observe(&Event::Resize(80, 24));
        assert!(!cancel.requested);

        cancel.observe(&Event::Key(key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(cancel.poll_cancelled());
        assert!(cancel.poll_cancelled());
    }
}
