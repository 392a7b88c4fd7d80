//! Host-side session state machine
//!
//! The simulation core only reports how a single attempt ended; deciding
//! what happens next (retry, advance, victory screen) is session policy
//! and lives here. The session owns the campaign list, the current
//! attempt's [`SimState`], and the [`InputState`], so swapping in a fresh
//! attempt atomically discards every piece of stale per-attempt state.

use serde::{Deserialize, Serialize};

use crate::input::InputState;
use crate::sim::{self, Level, Outcome, SimState, Snapshot};

/// Where the session is in the menu/level flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Menu,
    Playing,
    LevelComplete,
    GameOver,
    /// Final level cleared
    Victory,
}

/// A playthrough across the level sequence
pub struct Session {
    levels: Vec<Level>,
    level_index: usize,
    phase: SessionPhase,
    sim: Option<SimState>,
    pub input: InputState,
}

impl Session {
    /// Session over the built-in campaign
    pub fn new() -> Self {
        Self::with_levels(sim::campaign())
    }

    /// Session over a custom level sequence (external level packs)
    pub fn with_levels(levels: Vec<Level>) -> Self {
        Self {
            levels,
            level_index: 0,
            phase: SessionPhase::Menu,
            sim: None,
            input: InputState::new(),
        }
    }

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// 1-based number of the level currently loaded
    #[inline]
    pub fn level_number(&self) -> usize {
        self.level_index + 1
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Leave the menu and start the first level
    pub fn start(&mut self) {
        self.level_index = 0;
        self.load_current_level();
    }

    /// After `LevelComplete`: advance, or finish the campaign
    pub fn next_level(&mut self) {
        if self.level_index + 1 < self.levels.len() {
            self.level_index += 1;
            self.load_current_level();
        } else {
            log::info!("campaign complete");
            self.sim = None;
            self.phase = SessionPhase::Victory;
        }
    }

    /// Retry the current level (or restart the campaign after victory)
    pub fn restart(&mut self) {
        if self.phase == SessionPhase::Victory {
            self.level_index = 0;
        }
        self.load_current_level();
    }

    fn load_current_level(&mut self) {
        let level = self.levels[self.level_index].clone();
        log::info!("loading level {} ({})", level.id, level.name);
        // Replacing the SimState wholesale is the reset: nothing from the
        // previous attempt can leak into the new one
        self.sim = Some(SimState::new(level));
        self.input.clear();
        self.phase = SessionPhase::Playing;
    }

    /// Advance one frame while playing, then apply session policy to the
    /// core's outcome. No-op in menu/terminal phases.
    pub fn tick(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let Some(attempt) = self.sim.as_mut() else {
            return;
        };

        sim::tick(attempt, &mut self.input);

        match attempt.outcome {
            Outcome::Ongoing => {}
            Outcome::ExitReached => {
                log::info!("level {} complete", self.level_number());
                self.phase = SessionPhase::LevelComplete;
            }
            Outcome::Caught => {
                log::info!("caught on level {}", self.level_number());
                self.phase = SessionPhase::GameOver;
            }
        }
    }

    /// Read-only view of the running attempt, if one exists
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.sim.as_ref().map(SimState::snapshot)
    }

    /// Direct access to the running attempt (host debugging/tests)
    pub fn sim(&self) -> Option<&SimState> {
        self.sim.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
