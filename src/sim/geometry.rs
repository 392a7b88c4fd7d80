//! Pure 2D geometry kernel
//!
//! Every function here is deterministic and side-effect free. All of the
//! simulation's spatial queries (wall collision, ray occlusion, cone
//! containment) bottom out in these primitives, so they use `f64`
//! throughout to keep results bit-reproducible across platforms.

use glam::DVec2;

use super::level::Wall;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Unit vector in the direction of `v`
///
/// The zero vector maps to the zero vector rather than NaN, so callers
/// can feed combined input axes through without a special case.
#[inline]
pub fn normalize(v: DVec2) -> DVec2 {
    v.normalize_or_zero()
}

/// Ray / line-segment intersection
///
/// Returns the distance from `origin` along `dir` to the point where the
/// forward ray crosses the segment, or `None` when the ray is parallel to
/// the segment, crosses the segment's infinite line outside `t ∈ [0, 1]`,
/// or would have to travel backward (`u <= 0`) to reach it. `dir` does not
/// need to be unit length; the returned value is a world distance either
/// way.
pub fn ray_segment_intersection(origin: DVec2, dir: DVec2, wall: &Wall) -> Option<f64> {
    let (x1, y1) = (wall.p1.x, wall.p1.y);
    let (x2, y2) = (wall.p2.x, wall.p2.y);

    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + dir.x, origin.y + dir.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    if (0.0..=1.0).contains(&t) && u > 0.0 {
        let hit = DVec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1));
        Some(distance(origin, hit))
    } else {
        None
    }
}

/// Point-in-polygon test using the even-odd (ray casting) rule
///
/// The polygon is an ordered vertex list with an implicit closing edge
/// from the last vertex back to the first. Even-odd counting makes the
/// result independent of winding order.
pub fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        let crosses = (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Circle-circle overlap (strict: touching circles do not overlap)
#[inline]
pub fn circles_overlap(c1: DVec2, r1: f64, c2: DVec2, r2: f64) -> bool {
    distance(c1, c2) < r1 + r2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Wall {
        Wall {
            p1: DVec2::new(x1, y1),
            p2: DVec2::new(x2, y2),
        }
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize(DVec2::ZERO), DVec2::ZERO);
    }

    #[test]
    fn test_ray_hits_segment_ahead() {
        // Ray pointing +x at x=0, vertical wall at x=10 spanning the ray
        let d = ray_segment_intersection(DVec2::ZERO, DVec2::X, &wall(10.0, -5.0, 10.0, 5.0));
        assert_eq!(d, Some(10.0));
    }

    #[test]
    fn test_ray_ignores_segment_behind() {
        let d = ray_segment_intersection(DVec2::ZERO, DVec2::X, &wall(-10.0, -5.0, -10.0, 5.0));
        assert_eq!(d, None);
    }

    #[test]
    fn test_ray_parallel_to_segment() {
        // Horizontal ray, horizontal wall offset in y: denominator is zero
        let d = ray_segment_intersection(DVec2::ZERO, DVec2::X, &wall(0.0, 3.0, 10.0, 3.0));
        assert_eq!(d, None);
    }

    #[test]
    fn test_ray_misses_past_segment_end() {
        // Wall line crosses the ray, but only at t outside [0, 1]
        let d = ray_segment_intersection(DVec2::ZERO, DVec2::X, &wall(10.0, 5.0, 10.0, 15.0));
        assert_eq!(d, None);
    }

    #[test]
    fn test_ray_at_origin_excluded() {
        // Segment passing through the origin: u == 0, not a forward hit
        let d = ray_segment_intersection(DVec2::ZERO, DVec2::X, &wall(0.0, -5.0, 0.0, 5.0));
        assert_eq!(d, None);
    }

    #[test]
    fn test_ray_unnormalized_dir_gives_world_distance() {
        let d = ray_segment_intersection(
            DVec2::ZERO,
            DVec2::new(100.0, 0.0),
            &wall(10.0, -5.0, 10.0, 5.0),
        );
        assert_eq!(d, Some(10.0));
    }

    #[test]
    fn test_point_in_square() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(DVec2::new(5.0, 5.0), &square));
        assert!(!point_in_polygon(DVec2::new(15.0, 5.0), &square));
        assert!(!point_in_polygon(DVec2::new(5.0, -1.0), &square));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // An L-shape; the notch at the top right is outside
        let l_shape = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 5.0),
            DVec2::new(5.0, 5.0),
            DVec2::new(5.0, 10.0),
            DVec2::new(0.0, 10.0),
        ];
        assert!(point_in_polygon(DVec2::new(2.0, 8.0), &l_shape));
        assert!(!point_in_polygon(DVec2::new(8.0, 8.0), &l_shape));
    }

    #[test]
    fn test_circles_overlap_strict() {
        let a = DVec2::ZERO;
        let b = DVec2::new(10.0, 0.0);
        assert!(circles_overlap(a, 6.0, b, 5.0));
        // Exactly touching is not an overlap
        assert!(!circles_overlap(a, 5.0, b, 5.0));
        assert!(!circles_overlap(a, 4.0, b, 5.0));
    }

    #[test]
    fn test_circles_overlap_at_zero_distance() {
        assert!(circles_overlap(DVec2::ONE, 0.1, DVec2::ONE, 0.1));
    }

    proptest! {
        #[test]
        fn prop_normalize_unit_length(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            prop_assume!(x != 0.0 || y != 0.0);
            let n = normalize(DVec2::new(x, y));
            prop_assert!((n.length() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_point_in_polygon_rotation_invariant(
            px in -20.0f64..40.0,
            py in -20.0f64..40.0,
            rot in 0usize..6,
        ) {
            let hex: Vec<DVec2> = (0..6)
                .map(|i| {
                    let a = std::f64::consts::TAU * i as f64 / 6.0;
                    DVec2::new(10.0 + 12.0 * a.cos(), 10.0 + 12.0 * a.sin())
                })
                .collect();
            let p = DVec2::new(px, py);
            // Keep the point away from edges where FP order matters
            prop_assume!(hex.iter().zip(hex.iter().cycle().skip(1)).all(|(a, b)| {
                let ab = *b - *a;
                let ap = p - *a;
                (ab.perp_dot(ap) / ab.length()).abs() > 1e-3
            }));

            let mut rotated = hex.clone();
            rotated.rotate_left(rot);
            let mut reversed = hex.clone();
            reversed.reverse();

            let base = point_in_polygon(p, &hex);
            prop_assert_eq!(base, point_in_polygon(p, &rotated));
            prop_assert_eq!(base, point_in_polygon(p, &reversed));
        }
    }
}
