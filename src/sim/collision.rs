//! Player movement resolution against walls and arena bounds
//!
//! Movement is all-or-nothing: the candidate position is clamped to the
//! arena, then rejected outright if it would bring the player circle too
//! close to any wall segment. There is no sliding along walls and no
//! partial step; a blocked move leaves the player exactly where they were.

use glam::DVec2;

use super::geometry;
use super::level::Wall;
use crate::consts::*;

/// Closest point on the segment to `point`, via projection with the
/// parameter clamped to [0, 1]. Returns `None` for degenerate segments.
fn closest_point_on_wall(point: DVec2, wall: &Wall) -> Option<DVec2> {
    let seg = wall.p2 - wall.p1;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return None;
    }
    let t = ((point - wall.p1).dot(seg) / len_sq).clamp(0.0, 1.0);
    Some(wall.p1 + seg * t)
}

/// True if a player circle at `position` is too close to `wall` to occupy
/// that spot (wall thickness counts toward the clearance).
pub fn circle_hits_wall(position: DVec2, radius: f64, wall: &Wall) -> bool {
    match closest_point_on_wall(position, wall) {
        Some(closest) => geometry::distance(position, closest) < radius + WALL_HALF_WIDTH,
        None => false,
    }
}

/// Resolve one tick of player movement.
///
/// `intent` is the raw combined input axes; it is normalized here so
/// diagonal movement is no faster than cardinal movement. Returns the new
/// position: the clamped candidate if it is clear of every wall, otherwise
/// the unchanged `position`.
pub fn resolve_player_move(
    position: DVec2,
    radius: f64,
    speed: f64,
    intent: DVec2,
    walls: &[Wall],
) -> DVec2 {
    if intent == DVec2::ZERO {
        return position;
    }

    let dir = geometry::normalize(intent);
    let candidate = DVec2::new(
        (position.x + dir.x * speed).clamp(radius, ARENA_WIDTH - radius),
        (position.y + dir.y * speed).clamp(radius, ARENA_HEIGHT - radius),
    );

    for wall in walls {
        if circle_hits_wall(candidate, radius, wall) {
            return position;
        }
    }

    candidate
}
