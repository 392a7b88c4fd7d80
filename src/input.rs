//! Polled logical input state
//!
//! The core never talks to an event system. Hosts translate whatever they
//! have (keyboard events, touch buttons) into press/release edges on an
//! [`InputState`], and the simulation polls it once at the start of each
//! tick. Press/release may arrive between ticks; with a single mutator
//! there is no tick that can observe a torn update.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Logical input codes the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCode {
    Up,
    Down,
    Left,
    Right,
    /// Cloak toggle (hold to stay cloaked)
    Stealth,
}

/// Currently-held codes plus the cloak press edge
///
/// The cloak activates on the press *edge*, not the held level, so the
/// edge is recorded here and consumed by the next tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    held: Vec<InputCode>,
    stealth_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press edge
    pub fn press(&mut self, code: InputCode) {
        if !self.held.contains(&code) {
            self.held.push(code);
            if code == InputCode::Stealth {
                self.stealth_pressed = true;
            }
        }
    }

    /// Record a release edge
    pub fn release(&mut self, code: InputCode) {
        self.held.retain(|&c| c != code);
    }

    /// Drop everything held (level switch / focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
        self.stealth_pressed = false;
    }

    #[inline]
    pub fn is_held(&self, code: InputCode) -> bool {
        self.held.contains(&code)
    }

    /// Consume the cloak press edge recorded since the last tick
    pub fn take_stealth_edge(&mut self) -> bool {
        std::mem::take(&mut self.stealth_pressed)
    }

    /// Combined directional intent, unnormalized (the collision resolver
    /// normalizes, so diagonals are not faster)
    pub fn movement_intent(&self) -> DVec2 {
        let mut intent = DVec2::ZERO;
        if self.is_held(InputCode::Up) {
            intent.y -= 1.0;
        }
        if self.is_held(InputCode::Down) {
            intent.y += 1.0;
        }
        if self.is_held(InputCode::Left) {
            intent.x -= 1.0;
        }
        if self.is_held(InputCode::Right) {
            intent.x += 1.0;
        }
        intent
    }
}
