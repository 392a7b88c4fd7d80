//! Guard vision cones
//!
//! A guard's visible area is approximated by a fan of rays spread evenly
//! across its field of view. Each ray runs until the first wall it hits or
//! the guard's effective range, whichever is shorter; walls occlude fully.
//! The resulting polygon is anchored at the guard and rebuilt from scratch
//! every tick, since both the guard and the player move.

use glam::DVec2;

use super::geometry;
use super::guard::Guard;
use super::level::Wall;
use crate::consts::RAY_COUNT;

/// How far a single ray reaches before the nearest wall (or `range`)
fn cast_ray(origin: DVec2, dir: DVec2, walls: &[Wall], range: f64) -> f64 {
    let mut closest = range;
    for wall in walls {
        if let Some(dist) = geometry::ray_segment_intersection(origin, dir, wall)
            && dist < closest
        {
            closest = dist;
        }
    }
    closest
}

/// Compute the guard's visible-area polygon for this tick.
///
/// The fan is `[guard_position, hit_0, .., hit_RAY_COUNT]`: RAY_COUNT + 1
/// rays spaced evenly across the field of view, endpoints inclusive, so
/// both cone edges are always present.
pub fn vision_polygon(guard: &Guard, walls: &[Wall], range: f64) -> Vec<DVec2> {
    let mut polygon = Vec::with_capacity(RAY_COUNT as usize + 2);
    polygon.push(guard.position);

    let angle_step = guard.fov / RAY_COUNT as f64;
    let start_angle = guard.angle - guard.fov / 2.0;

    for i in 0..=RAY_COUNT {
        let angle = start_angle + angle_step * i as f64;
        let dir = DVec2::new(angle.cos(), angle.sin());
        let dist = cast_ray(guard.position, dir, walls, range);
        polygon.push(guard.position + dir * dist);
    }

    polygon
}

/// Whether the guard can see the player this tick
pub fn sees(guard: &Guard, player_position: DVec2, walls: &[Wall], range: f64) -> bool {
    geometry::point_in_polygon(player_position, &vision_polygon(guard, walls, range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::GuardConfig;

    fn watcher(x: f64, y: f64, angle: f64) -> Guard {
        Guard::from_config(&GuardConfig {
            id: 1,
            position: DVec2::new(x, y),
            angle,
            path: vec![DVec2::new(x, y)],
            speed: 0.0,
            view_distance: NORMAL_VISION_DISTANCE,
            fov: std::f64::consts::FRAC_PI_3,
            wait_time: 0,
        })
    }

    #[test]
    fn test_polygon_is_fan_anchored_at_guard() {
        let guard = watcher(100.0, 100.0, 0.0);
        let polygon = vision_polygon(&guard, &[], guard.view_distance);
        assert_eq!(polygon.len(), RAY_COUNT as usize + 2);
        assert_eq!(polygon[0], guard.position);
        for hit in &polygon[1..] {
            let d = geometry::distance(guard.position, *hit);
            assert!((d - NORMAL_VISION_DISTANCE).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sees_player_ahead() {
        let guard = watcher(100.0, 100.0, 0.0);
        assert!(sees(
            &guard,
            DVec2::new(200.0, 100.0),
            &[],
            guard.view_distance
        ));
    }

    #[test]
    fn test_does_not_see_player_behind() {
        let guard = watcher(100.0, 100.0, 0.0);
        assert!(!sees(
            &guard,
            DVec2::new(50.0, 100.0),
            &[],
            guard.view_distance
        ));
    }

    #[test]
    fn test_does_not_see_player_outside_fov() {
        // 60-degree cone facing +x; player well above the upper edge
        let guard = watcher(100.0, 100.0, 0.0);
        assert!(!sees(
            &guard,
            DVec2::new(120.0, 180.0),
            &[],
            guard.view_distance
        ));
    }

    #[test]
    fn test_does_not_see_player_beyond_range() {
        let guard = watcher(100.0, 100.0, 0.0);
        assert!(!sees(
            &guard,
            DVec2::new(100.0 + NORMAL_VISION_DISTANCE + 5.0, 100.0),
            &[],
            guard.view_distance
        ));
    }

    #[test]
    fn test_wall_occludes_player() {
        let guard = watcher(100.0, 100.0, 0.0);
        let wall = Wall::new(150.0, 0.0, 150.0, 200.0);
        let player = DVec2::new(200.0, 100.0);
        assert!(sees(&guard, player, &[], guard.view_distance));
        assert!(!sees(&guard, player, &[wall], guard.view_distance));
    }

    #[test]
    fn test_rays_stop_at_occluder() {
        let guard = watcher(100.0, 100.0, 0.0);
        let wall = Wall::new(150.0, 0.0, 150.0, 200.0);
        let polygon = vision_polygon(&guard, &[wall], guard.view_distance);
        // The central ray hits the wall at x=150
        let mid = polygon[1 + RAY_COUNT as usize / 2];
        assert!((mid.x - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_shrunk_range_hides_mid_distance_player() {
        let guard = watcher(100.0, 100.0, 0.0);
        let player = DVec2::new(250.0, 100.0); // 150 away: inside 200, outside 80
        let shrunk = guard.effective_view_distance(true);
        assert_eq!(shrunk, NORMAL_VISION_DISTANCE * DARKNESS_VISION_MULTIPLIER);
        assert!(sees(&guard, player, &[], guard.effective_view_distance(false)));
        assert!(!sees(&guard, player, &[], shrunk));
    }
}
