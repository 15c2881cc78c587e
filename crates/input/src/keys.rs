//! Held-key tracking for terminal environments.
//!
//! The engine wants "which controls are held right now", sampled once per
//! frame. Terminals deliver press, repeat and (sometimes) release events.
//! Terminals without release events fall back to a timeout: a key counts as
//! released once it has not been seen for a while.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::binding;
use crate::types::{Control, Player, PlayerInput};

// Longer than a typical OS auto-repeat interval so a held key does not flicker.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

const CONTROLS: usize = 5;

fn slot(control: Control) -> usize {
    match control {
        Control::Left => 0,
        Control::Right => 1,
        Control::Down => 2,
        Control::RotateCw => 3,
        Control::RotateCcw => 4,
    }
}

const SLOT_CONTROLS: [Control; CONTROLS] = [
    Control::Left,
    Control::Right,
    Control::Down,
    Control::RotateCw,
    Control::RotateCcw,
];

/// Held controls of both players.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    /// Last time each (player, control) was pressed or repeated
    last_seen_ms: [[Option<u64>; CONTROLS]; 2],
    release_timeout_ms: Option<u64>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            last_seen_ms: [[None; CONTROLS]; 2],
            release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// `None` disables the timeout, for terminals that report key releases.
    pub fn with_release_timeout(mut self, timeout_ms: Option<u64>) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> Option<u64> {
        self.release_timeout_ms
    }

    /// Record a press or auto-repeat. Returns false for unbound keys.
    pub fn press(&mut self, code: KeyCode, now_ms: u64) -> bool {
        match binding(code) {
            Some((player, control)) => {
                self.last_seen_ms[player.index()][slot(control)] = Some(now_ms);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, code: KeyCode) {
        if let Some((player, control)) = binding(code) {
            self.last_seen_ms[player.index()][slot(control)] = None;
        }
    }

    /// Route a crossterm key event by its kind.
    pub fn handle_event(&mut self, key: KeyEvent, now_ms: u64) -> bool {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key.code, now_ms),
            KeyEventKind::Release => {
                self.release(key.code);
                binding(key.code).is_some()
            }
        }
    }

    pub fn release_all(&mut self) {
        self.last_seen_ms = [[None; CONTROLS]; 2];
    }

    /// Held controls per player at `now_ms`; timed-out keys are released.
    pub fn sample(&mut self, now_ms: u64) -> [PlayerInput; 2] {
        let mut inputs = [PlayerInput::IDLE; 2];
        for player in Player::BOTH {
            let seen = &mut self.last_seen_ms[player.index()];
            for (i, entry) in seen.iter_mut().enumerate() {
                let Some(at) = *entry else {
                    continue;
                };
                if let Some(timeout) = self.release_timeout_ms {
                    if now_ms.saturating_sub(at) > timeout {
                        *entry = None;
                        continue;
                    }
                }
                inputs[player.index()].set(SLOT_CONTROLS[i], true);
            }
        }
        inputs
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}
