use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

pub enum TerminalEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Polls crossterm on the calling thread. Each call blocks for at most one
/// tick, so a key is fully handled before the next one is read.
pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn next(&self) -> io::Result<TerminalEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TerminalEvent::Tick);
        }

        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(TerminalEvent::Key(key)),
            CrosstermEvent::Resize(_, _) => Ok(TerminalEvent::Resize),
            _ => Ok(TerminalEvent::Tick),
        }
    }
}
