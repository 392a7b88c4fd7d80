//! Guard patrol behavior
//!
//! Each guard walks a cyclic waypoint path: move toward the current target
//! waypoint, pause there for `wait_time` ticks, advance to the next one,
//! wrapping at the end of the list. Guards do not collide with walls;
//! paths are authored to stay clear of geometry.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry;
use super::level::GuardConfig;
use crate::consts::*;

/// A patrolling guard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guard {
    pub id: u32,
    pub position: DVec2,
    /// Facing direction (radians); tracks movement heading, frozen while
    /// waiting at a waypoint
    pub angle: f64,
    /// Cyclic waypoint list (never mutated after spawn)
    pub path: Vec<DVec2>,
    /// Index of the waypoint currently being walked toward
    pub current_path_index: usize,
    pub speed: f64,
    pub view_distance: f64,
    pub fov: f64,
    /// Ticks to pause at each waypoint
    pub wait_time: u32,
    /// Ticks spent waiting at the current waypoint so far
    pub wait_timer: u32,
}

impl Guard {
    /// Instantiate from a level's authored config (wait timer starts at 0)
    pub fn from_config(config: &GuardConfig) -> Self {
        Self {
            id: config.id,
            position: config.position,
            angle: config.angle,
            path: config.path.clone(),
            current_path_index: 0,
            speed: config.speed,
            view_distance: config.view_distance,
            fov: config.fov,
            wait_time: config.wait_time,
            wait_timer: 0,
        }
    }

    /// Vision range for this tick, shrunk while the player's cloak is on
    #[inline]
    pub fn effective_view_distance(&self, stealth_active: bool) -> f64 {
        if stealth_active {
            self.view_distance * DARKNESS_VISION_MULTIPLIER
        } else {
            self.view_distance
        }
    }

    /// Advance one tick of patrol movement
    pub fn advance(&mut self) {
        let Some(&target) = self.path.get(self.current_path_index) else {
            // Empty path: guard stands still (authoring defect, warned at
            // level load)
            return;
        };

        if geometry::distance(self.position, target) < WAYPOINT_ARRIVAL_THRESHOLD {
            self.wait_timer += 1;
            if self.wait_timer >= self.wait_time {
                self.wait_timer = 0;
                self.current_path_index = (self.current_path_index + 1) % self.path.len();
                log::trace!(
                    "guard {} heading for waypoint {}",
                    self.id,
                    self.current_path_index
                );
            }
        } else {
            let dir = geometry::normalize(target - self.position);
            self.position += dir * self.speed;
            self.angle = dir.y.atan2(dir.x);
        }
    }
}
