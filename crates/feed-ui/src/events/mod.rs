//! Event handling

use anyhow::Result;
use crossterm::event::{self, KeyEvent};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Input(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick (no input within the poll interval)
    Tick,
}

/// Polls the terminal for events
#[derive(Debug, Clone, Copy)]
pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    /// Create an event source with the given poll interval
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for the next event
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        Ok(match event::read()? {
            event::Event::Key(key) => Event::Input(key),
            event::Event::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        })
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
