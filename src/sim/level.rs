//! Static level definitions
//!
//! A [`Level`] is immutable authored content: wall geometry, the spawn and
//! exit points, and the initial guard configurations. The simulation never
//! mutates it; restarting a level means rebuilding mutable state from this
//! definition. Levels round-trip through JSON so external packs can be
//! loaded with the same types the built-in campaign uses.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A wall segment. Zero-length segments are tolerated but never collide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl Wall {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: DVec2::new(x1, y1),
            p2: DVec2::new(x2, y2),
        }
    }

    /// True if both endpoints coincide (degenerate, skipped by collision)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

/// Level exit zone (reach it to win)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Exit {
    pub position: DVec2,
    pub radius: f64,
}

/// Initial configuration for one guard
///
/// `path` is a cyclic waypoint list the guard patrols forever. Paths are
/// authored to be collision-free; the engine does not validate them
/// against walls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    pub id: u32,
    pub position: DVec2,
    /// Initial facing (radians); reassigned once the guard starts moving
    pub angle: f64,
    pub path: Vec<DVec2>,
    pub speed: f64,
    pub view_distance: f64,
    /// Field of view in radians
    pub fov: f64,
    /// Ticks to pause at each waypoint before moving on
    pub wait_time: u32,
}

/// An authored level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub start: DVec2,
    pub exit: Exit,
    pub walls: Vec<Wall>,
    pub guards: Vec<GuardConfig>,
}

impl Level {
    /// Parse a level from JSON (external level packs)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Authoring lint: log content defects that the runtime tolerates
    /// silently. Runs on level load in debug builds.
    pub fn validate(&self) {
        for wall in &self.walls {
            if wall.is_degenerate() {
                log::warn!("level {}: zero-length wall at {:?}", self.id, wall.p1);
            }
        }
        for guard in &self.guards {
            if guard.path.is_empty() {
                log::warn!("level {}: guard {} has an empty path", self.id, guard.id);
            }
            debug_assert!(
                !guard.path.is_empty(),
                "guard {} in level {} has no waypoints",
                guard.id,
                self.id
            );
        }
        let in_bounds = self.start.x >= PLAYER_RADIUS
            && self.start.x <= ARENA_WIDTH - PLAYER_RADIUS
            && self.start.y >= PLAYER_RADIUS
            && self.start.y <= ARENA_HEIGHT - PLAYER_RADIUS;
        if !in_bounds {
            log::warn!("level {}: start point {:?} out of bounds", self.id, self.start);
        }
        debug_assert!(in_bounds, "level {} start point out of bounds", self.id);
    }
}

/// The four arena border walls shared by every campaign level
fn border_walls() -> Vec<Wall> {
    vec![
        Wall::new(0.0, 0.0, ARENA_WIDTH, 0.0),
        Wall::new(ARENA_WIDTH, 0.0, ARENA_WIDTH, ARENA_HEIGHT),
        Wall::new(ARENA_WIDTH, ARENA_HEIGHT, 0.0, ARENA_HEIGHT),
        Wall::new(0.0, ARENA_HEIGHT, 0.0, 0.0),
    ]
}

fn waypoints(points: &[(f64, f64)]) -> Vec<DVec2> {
    points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}

/// The built-in campaign, in play order
pub fn campaign() -> Vec<Level> {
    use std::f64::consts::PI;

    let mut level1_walls = border_walls();
    level1_walls.extend([
        Wall::new(200.0, 0.0, 200.0, 400.0),
        Wall::new(400.0, 200.0, 400.0, 600.0),
        Wall::new(600.0, 0.0, 600.0, 400.0),
    ]);

    let mut level2_walls = border_walls();
    level2_walls.extend([
        Wall::new(150.0, 150.0, 650.0, 150.0),
        Wall::new(150.0, 450.0, 650.0, 450.0),
        Wall::new(150.0, 150.0, 150.0, 250.0),
        Wall::new(150.0, 450.0, 150.0, 350.0),
        Wall::new(650.0, 150.0, 650.0, 250.0),
        Wall::new(650.0, 450.0, 650.0, 350.0),
        // Central block
        Wall::new(350.0, 250.0, 450.0, 250.0),
        Wall::new(450.0, 250.0, 450.0, 350.0),
        Wall::new(450.0, 350.0, 350.0, 350.0),
        Wall::new(350.0, 350.0, 350.0, 250.0),
    ]);

    let mut level3_walls = border_walls();
    level3_walls.extend([
        // Zig-zag corridor walls
        Wall::new(100.0, 600.0, 100.0, 150.0),
        Wall::new(250.0, 0.0, 250.0, 450.0),
        Wall::new(400.0, 600.0, 400.0, 150.0),
        Wall::new(550.0, 0.0, 550.0, 450.0),
        Wall::new(700.0, 600.0, 700.0, 200.0),
    ]);

    vec![
        Level {
            id: 1,
            name: "The Infiltration".into(),
            start: DVec2::new(50.0, 50.0),
            exit: Exit {
                position: DVec2::new(750.0, 550.0),
                radius: 20.0,
            },
            walls: level1_walls,
            guards: vec![
                GuardConfig {
                    id: 1,
                    position: DVec2::new(300.0, 100.0),
                    angle: 0.0,
                    path: waypoints(&[(300.0, 100.0), (300.0, 500.0)]),
                    speed: 1.5,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 3.0,
                    wait_time: 60,
                },
                GuardConfig {
                    id: 2,
                    position: DVec2::new(500.0, 500.0),
                    angle: 0.0,
                    path: waypoints(&[(500.0, 500.0), (500.0, 100.0)]),
                    speed: 1.5,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 3.0,
                    wait_time: 60,
                },
            ],
        },
        Level {
            id: 2,
            name: "Corridors of Silence".into(),
            start: DVec2::new(40.0, 300.0),
            exit: Exit {
                position: DVec2::new(750.0, 300.0),
                radius: 20.0,
            },
            walls: level2_walls,
            guards: vec![
                GuardConfig {
                    id: 1,
                    position: DVec2::new(100.0, 100.0),
                    angle: 0.0,
                    path: waypoints(&[(100.0, 100.0), (700.0, 100.0)]),
                    speed: 2.0,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 4.0,
                    wait_time: 30,
                },
                GuardConfig {
                    id: 2,
                    position: DVec2::new(700.0, 500.0),
                    angle: PI,
                    path: waypoints(&[(700.0, 500.0), (100.0, 500.0)]),
                    speed: 2.0,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 4.0,
                    wait_time: 30,
                },
                GuardConfig {
                    id: 3,
                    position: DVec2::new(400.0, 200.0),
                    angle: PI / 2.0,
                    path: waypoints(&[(400.0, 200.0), (400.0, 400.0)]),
                    speed: 1.0,
                    view_distance: 150.0,
                    fov: PI / 2.0,
                    wait_time: 90,
                },
            ],
        },
        Level {
            id: 3,
            name: "The Complex".into(),
            start: DVec2::new(50.0, 550.0),
            exit: Exit {
                position: DVec2::new(750.0, 50.0),
                radius: 20.0,
            },
            walls: level3_walls,
            guards: vec![
                GuardConfig {
                    id: 1,
                    position: DVec2::new(175.0, 200.0),
                    angle: 0.0,
                    path: waypoints(&[(175.0, 200.0), (175.0, 500.0)]),
                    speed: 1.8,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 3.0,
                    wait_time: 20,
                },
                GuardConfig {
                    id: 2,
                    position: DVec2::new(325.0, 400.0),
                    angle: 0.0,
                    path: waypoints(&[(325.0, 400.0), (325.0, 100.0)]),
                    speed: 1.8,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 3.0,
                    wait_time: 20,
                },
                GuardConfig {
                    id: 3,
                    position: DVec2::new(475.0, 200.0),
                    angle: 0.0,
                    path: waypoints(&[(475.0, 200.0), (475.0, 500.0)]),
                    speed: 1.8,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 3.0,
                    wait_time: 20,
                },
                GuardConfig {
                    id: 4,
                    position: DVec2::new(625.0, 400.0),
                    angle: 0.0,
                    path: waypoints(&[(625.0, 400.0), (625.0, 100.0)]),
                    speed: 1.8,
                    view_distance: NORMAL_VISION_DISTANCE,
                    fov: PI / 3.0,
                    wait_time: 20,
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_levels_well_formed() {
        let levels = campaign();
        assert_eq!(levels.len(), 3);
        for level in &levels {
            level.validate();
            assert!(!level.guards.is_empty());
            assert!(level.guards.iter().all(|g| !g.path.is_empty()));
            // Border walls plus interior geometry
            assert!(level.walls.len() > 4);
            assert!(level.walls.iter().all(|w| !w.is_degenerate()));
        }
    }

    #[test]
    fn test_level_json_round_trip() {
        for level in campaign() {
            let json = level.to_json().unwrap();
            let parsed = Level::from_json(&json).unwrap();
            assert_eq!(parsed.id, level.id);
            assert_eq!(parsed.name, level.name);
            assert_eq!(parsed.start, level.start);
            assert_eq!(parsed.walls.len(), level.walls.len());
            assert_eq!(parsed.guards.len(), level.guards.len());
            assert_eq!(parsed.guards[0].path, level.guards[0].path);
        }
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Level::from_json("{\"id\": 1}").is_err());
    }
}
