//! Drop-hold tracking for terminal environments.
//!
//! Fast drop is a *held* control: the simulation needs a `DropStart` when
//! the key goes down and a `DropEnd` when it comes back up. Terminals that
//! do not emit key release events get a timeout-based auto-release instead,
//! refreshed by the key-repeat stream while the key stays down.

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::map;
use crate::types::InputCommand;

// Keyboard auto-repeat usually fires well under 250ms apart, so a hold
// that has gone quiet for longer than this is treated as released.
const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 250;

/// Turns raw key events into edge-triggered drop commands.
#[derive(Debug, Clone)]
pub struct InputHandler {
    drop_held: bool,
    last_drop_press: Instant,
    release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            drop_held: false,
            last_drop_press: Instant::now(),
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    pub fn drop_held(&self) -> bool {
        self.drop_held
    }

    /// Handle a key press (or repeat). Drop keys emit `DropStart` only on
    /// the initial press; repeats just refresh the hold. Everything else
    /// maps straight through.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<InputCommand> {
        if map::should_quit(key) {
            return Some(InputCommand::Quit);
        }
        match map::handle_key_event(key) {
            Some(InputCommand::DropStart) => {
                self.last_drop_press = Instant::now();
                if self.drop_held {
                    None
                } else {
                    self.drop_held = true;
                    Some(InputCommand::DropStart)
                }
            }
            other => other,
        }
    }

    /// Handle a real key release event, when the terminal provides them.
    pub fn handle_key_release(&mut self, key: KeyEvent) -> Option<InputCommand> {
        if map::handle_key_event(key) == Some(InputCommand::DropStart) && self.drop_held {
            self.drop_held = false;
            return Some(InputCommand::DropEnd);
        }
        None
    }

    /// Auto-release a stale hold. Call once per frame.
    pub fn update(&mut self) -> Option<InputCommand> {
        if self.drop_held
            && self.last_drop_press.elapsed().as_millis() as u32 > self.release_timeout_ms
        {
            self.drop_held = false;
            return Some(InputCommand::DropEnd);
        }
        None
    }

    pub fn reset(&mut self) {
        self.drop_held = false;
        self.last_drop_press = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
