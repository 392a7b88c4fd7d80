//! Mutable simulation state
//!
//! Everything that changes from tick to tick lives here, owned by a single
//! [`SimState`] that is updated in place by [`tick`](super::tick::tick).
//! Renderers and UI read [`Snapshot`]s, never live references.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::guard::Guard;
use super::level::Level;
use super::vision;
use crate::consts::*;

/// Terminal signal reported by the core each tick
///
/// Session policy (retry, next level, victory screens) is the host's
/// business; the core only says how this attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    /// Player reached the exit zone
    ExitReached,
    /// Player touched a guard or was seen by one
    Caught,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// The player avatar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec2,
    pub radius: f64,
    pub speed: f64,
}

impl Player {
    pub fn at(start: DVec2) -> Self {
        Self {
            position: start,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
        }
    }
}

/// Cloak battery gauge
///
/// Drains while the cloak is engaged, recharges while it is not. Draining
/// is faster than recharging, so the cloak is a burst resource rather than
/// a sustained one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Battery {
    /// Charge in [0, BATTERY_MAX]
    pub charge: f64,
    /// Whether the cloak is currently engaged
    pub active: bool,
}

impl Default for Battery {
    fn default() -> Self {
        Self {
            charge: BATTERY_MAX,
            active: false,
        }
    }
}

impl Battery {
    /// Apply one tick of input edges and drain/recharge.
    ///
    /// `engage` is the press edge of the cloak key: engaging requires more
    /// than [`MIN_ACTIVATION_CHARGE`] at that moment, so a near-empty
    /// battery cannot flicker on. Holding the key through a recharge does
    /// not re-engage. Releasing (`held == false`) always disengages, as
    /// does running dry.
    pub fn update(&mut self, engage: bool, held: bool) {
        if engage && self.charge > MIN_ACTIVATION_CHARGE {
            if !self.active {
                log::debug!("cloak engaged at charge {:.1}", self.charge);
            }
            self.active = true;
        }
        if !held {
            self.active = false;
        }

        if self.active && self.charge > 0.0 {
            self.charge = (self.charge - BATTERY_DRAIN_RATE).max(0.0);
            if self.charge <= 0.0 {
                log::debug!("cloak battery empty, disengaging");
                self.active = false;
            }
        } else if !self.active && self.charge < BATTERY_MAX {
            self.charge = (self.charge + BATTERY_RECHARGE_RATE).min(BATTERY_MAX);
        }
    }
}

/// One guard's pose and vision area, as seen by a renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardView {
    pub id: u32,
    pub position: DVec2,
    pub angle: f64,
    pub radius: f64,
    /// Fan polygon of the area this guard can currently see
    pub vision_polygon: Vec<DVec2>,
}

/// Read-only per-tick view of the simulation for rendering/UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_position: DVec2,
    pub player_radius: f64,
    pub guards: Vec<GuardView>,
    pub battery_charge: f64,
    pub stealth_active: bool,
    pub outcome: Outcome,
}

/// Complete mutable state for one level attempt
///
/// Deterministic: a `SimState` built from the same [`Level`] and fed the
/// same input history reproduces identical positions bit for bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub level: Level,
    pub player: Player,
    pub guards: Vec<Guard>,
    pub battery: Battery,
    /// Animation-phase accumulator, advanced TIME_STEP per tick; capture
    /// checks stay off until it passes GRACE_TIME
    pub time: f64,
    /// Tick counter since level start
    pub ticks: u64,
    pub outcome: Outcome,
}

impl SimState {
    /// Instantiate a fresh attempt from a level definition
    pub fn new(level: Level) -> Self {
        level.validate();
        let player = Player::at(level.start);
        let guards = level.guards.iter().map(Guard::from_config).collect();
        Self {
            level,
            player,
            guards,
            battery: Battery::default(),
            time: 0.0,
            ticks: 0,
            outcome: Outcome::Ongoing,
        }
    }

    /// Whether the spawn grace period has elapsed (capture checks active)
    #[inline]
    pub fn grace_elapsed(&self) -> bool {
        self.time > GRACE_TIME
    }

    /// Build the read-only view handed to rendering/UI collaborators.
    /// Vision polygons reflect the current cloak state.
    pub fn snapshot(&self) -> Snapshot {
        let guards = self
            .guards
            .iter()
            .map(|guard| GuardView {
                id: guard.id,
                position: guard.position,
                angle: guard.angle,
                radius: GUARD_RADIUS,
                vision_polygon: vision::vision_polygon(
                    guard,
                    &self.level.walls,
                    guard.effective_view_distance(self.battery.active),
                ),
            })
            .collect();

        Snapshot {
            player_position: self.player.position,
            player_radius: self.player.radius,
            guards,
            battery_charge: self.battery.charge,
            stealth_active: self.battery.active,
            outcome: self.outcome,
        }
    }
}
