//! Closest-approach solvers shared by every line-like pair.
//!
//! All functions work on [`Parameterization`] values so a single formula
//! serves Line, Ray and BoundedRay; the bound of each side is applied
//! afterwards.

use log::trace;

use super::line_like::{Bound, Parameterization};
use super::Plane;
use crate::math::{Direction, Location};
use crate::precision;

/// Bounded parameter on `line` of the point closest to `point`.
#[inline]
pub(crate) fn bounded_distance_to_point(line: &Parameterization, point: Location) -> f32 {
    line.bind_distance(line.unbounded_distance_at_point_closest_to(point))
}

/// Parameters `(tA, tB)` of the closest pair of points between `a` and `b`,
/// each within its own bound.
///
/// Skew case: solve the unbounded system, then bind. If exactly one side was
/// moved by its bound, the other side is recomputed against the fixed point
/// and bound again. If both moved, both single corrections are evaluated and
/// the closer pair wins. There is no third pass.
pub(crate) fn closest_parameters(a: &Parameterization, b: &Parameterization) -> (f32, f32) {
    let (da, db) = match (a.direction, b.direction) {
        (Direction::None, Direction::None) => return (0.0, 0.0),
        (Direction::None, Direction::Unit(_)) => {
            return (0.0, bounded_distance_to_point(b, a.origin));
        }
        (Direction::Unit(_), Direction::None) => {
            return (bounded_distance_to_point(a, b.origin), 0.0);
        }
        (Direction::Unit(da), Direction::Unit(db)) => (da, db),
    };

    let w0 = (a.origin - b.origin).xyz();
    let cos = da.dot(&db);
    let d = da.dot_xyz(&w0);
    let e = db.dot_xyz(&w0);

    if 1.0 - cos.abs() < precision::PARALLEL_EPSILON {
        trace!("parallel line-likes, projecting start point");
        let tb = bounded_distance_to_point(b, a.origin);
        let ta = bounded_distance_to_point(a, b.unbounded_location_at_distance(tb));
        return (ta, tb);
    }

    let denom = 1.0 - cos * cos;
    let ta = (cos * e - d) / denom;
    let tb = (e - cos * d) / denom;
    let bound_ta = a.bind_distance(ta);
    let bound_tb = b.bind_distance(tb);

    let fix_a = || {
        let tb = bounded_distance_to_point(b, a.unbounded_location_at_distance(bound_ta));
        (bound_ta, tb)
    };
    let fix_b = || {
        let ta = bounded_distance_to_point(a, b.unbounded_location_at_distance(bound_tb));
        (ta, bound_tb)
    };

    match (bound_ta != ta, bound_tb != tb) {
        (false, false) => (ta, tb),
        (true, false) => fix_a(),
        (false, true) => fix_b(),
        (true, true) => {
            let first = fix_a();
            let second = fix_b();
            if gap_squared(a, b, first) <= gap_squared(a, b, second) {
                first
            } else {
                second
            }
        }
    }
}

#[inline]
fn gap_squared(a: &Parameterization, b: &Parameterization, (ta, tb): (f32, f32)) -> f32 {
    a.unbounded_location_at_distance(ta)
        .distance_squared_from(&b.unbounded_location_at_distance(tb))
}

/// Unbounded parameter where `line` meets `plane`. None when the direction
/// is `None` or exactly parallel to the plane.
pub(crate) fn plane_crossing_distance(line: &Parameterization, plane: &Plane) -> Option<f32> {
    let u = line.direction.unit()?;
    let similarity = plane.unit_normal().dot(&u);
    if similarity == 0.0 {
        return None;
    }
    Some(fast_plane_crossing_distance(line, plane, similarity))
}

/// Crossing distance restricted to the bound of `line`. A crossing that
/// falls outside only through rounding, with the nearest bounded point
/// on the plane to within [`precision::PLANE_CONTACT_ULPS`], is clamped
/// onto the bound instead of rejected.
pub(crate) fn bounded_plane_crossing_distance(line: &Parameterization, plane: &Plane) -> Option<f32> {
    let t = plane_crossing_distance(line, plane)?;
    if line.distance_is_within_bounds(t) {
        return Some(t);
    }
    let bound_t = line.bind_distance(t);
    let end = line.unbounded_location_at_distance(bound_t);
    let scale = end
        .xyz()
        .modulus()
        .max(plane.distance_from_origin().abs())
        .max(1.0);
    if plane.signed_distance_from(&end).abs() <= precision::PLANE_CONTACT_ULPS * f32::EPSILON * scale {
        trace!("plane crossing at t = {} clamped onto bound at {}", t, bound_t);
        return Some(bound_t);
    }
    None
}

/// Same as [`plane_crossing_distance`] with the dot product supplied and
/// no checks.
#[inline]
pub(crate) fn fast_plane_crossing_distance(line: &Parameterization, plane: &Plane, similarity: f32) -> f32 {
    (plane.distance_from_origin() - plane.unit_normal().dot_xyz(&line.origin.xyz())) / similarity
}

/// Bounded parameter of the point on `line` nearest `plane`, paired with
/// that point's signed distance. The distance is exactly 0 when the bounded
/// object reaches the plane.
pub(crate) fn plane_closest_parameter(line: &Parameterization, plane: &Plane) -> (f32, f32) {
    if let Some(t) = bounded_plane_crossing_distance(line, plane) {
        return (t, 0.0);
    }
    let start = plane.signed_distance_from(&line.origin);
    match line.bound {
        Bound::Finite(length) => {
            let end = plane.signed_distance_from(&line.unbounded_location_at_distance(length));
            if end.abs() < start.abs() {
                (length, end)
            } else {
                (0.0, start)
            }
        }
        Bound::Infinite | Bound::SemiInfinite => (0.0, start),
    }
}

/// Both unbounded roots of `|O + tD - C|^2 = r^2`, ascending. Equal roots
/// mean a tangent. None for no real root or a `None` direction.
pub(crate) fn sphere_crossing_distances(
    line: &Parameterization,
    center: Location,
    radius: f32,
) -> Option<(f32, f32)> {
    let u = line.direction.unit()?;
    let o = (line.origin - center).xyz();
    let od = u.dot_xyz(&o);
    let discriminant = od * od - (o.square_modulus() - radius * radius);
    if discriminant < 0.0 {
        return None;
    }
    if discriminant == 0.0 {
        trace!("tangent sphere contact at t = {}", -od);
        return Some((-od, -od));
    }
    let root = discriminant.sqrt();
    Some((-od - root, -od + root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(origin: Location, direction: Direction, bound: Bound) -> Parameterization {
        Parameterization { origin, direction, bound }
    }

    #[test]
    fn test_skew_lines() {
        let a = param(Location::new(0.0, 0.0, 0.0), Direction::left(), Bound::Infinite);
        let b = param(Location::new(5.0, 3.0, -2.0), Direction::forward(), Bound::Infinite);
        let (ta, tb) = closest_parameters(&a, &b);
        assert!((ta - 5.0).abs() < 1e-5);
        assert!((tb - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_one_side_clamped() {
        let a = param(Location::new(0.0, 0.0, 0.0), Direction::left(), Bound::Finite(2.0));
        let b = param(Location::new(5.0, 3.0, -2.0), Direction::forward(), Bound::Infinite);
        let (ta, tb) = closest_parameters(&a, &b);
        assert_eq!(ta, 2.0);
        assert!((tb - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_both_sides_clamped_takes_nearer_pair() {
        let a = param(Location::new(0.0, 0.0, 0.0), Direction::left(), Bound::Finite(1.0));
        let b = param(Location::new(3.0, 1.0, 0.0), Direction::up(), Bound::Finite(1.0));
        let (ta, tb) = closest_parameters(&a, &b);
        assert_eq!(ta, 1.0);
        assert_eq!(tb, 0.0);
    }

    #[test]
    fn test_parallel_fallback() {
        let a = param(Location::new(0.0, 1.0, 0.0), Direction::left(), Bound::SemiInfinite);
        let b = param(Location::new(-3.0, 0.0, 0.0), Direction::right(), Bound::SemiInfinite);
        let (ta, tb) = closest_parameters(&a, &b);
        // b points away from a's start, so b's start is the best b can do
        assert_eq!(tb, 0.0);
        assert_eq!(ta, 0.0);
    }

    #[test]
    fn test_degenerate_direction_is_point_query() {
        let a = param(Location::new(2.0, 2.0, 0.0), Direction::None, Bound::Finite(0.0));
        let b = param(Location::ORIGIN, Direction::left(), Bound::Infinite);
        let (ta, tb) = closest_parameters(&a, &b);
        assert_eq!(ta, 0.0);
        assert!((tb - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_crossing_just_behind_start_is_clamped() {
        let plane = Plane::new(Direction::up(), 0.0).unwrap();
        let grazing = param(Location::new(3.0, -1.0e-7, 0.0), Direction::down(), Bound::SemiInfinite);
        assert_eq!(bounded_plane_crossing_distance(&grazing, &plane), Some(0.0));

        let behind = param(Location::new(3.0, -1.0e-3, 0.0), Direction::down(), Bound::SemiInfinite);
        assert!(plane_crossing_distance(&behind, &plane).is_some());
        assert!(bounded_plane_crossing_distance(&behind, &plane).is_none());

        let short = param(Location::new(0.0, 2.0, 0.0), Direction::down(), Bound::Finite(2.0 - 1.0e-7));
        assert_eq!(bounded_plane_crossing_distance(&short, &plane), Some(2.0 - 1.0e-7));
    }

    #[test]
    fn test_sphere_roots() {
        let line = param(Location::new(-10.0, 0.0, 0.0), Direction::left(), Bound::Infinite);
        let (t1, t2) = sphere_crossing_distances(&line, Location::ORIGIN, 2.0).unwrap();
        assert!((t1 - 8.0).abs() < 1e-5);
        assert!((t2 - 12.0).abs() < 1e-5);

        let miss = param(Location::new(-10.0, 3.0, 0.0), Direction::left(), Bound::Infinite);
        assert!(sphere_crossing_distances(&miss, Location::ORIGIN, 2.0).is_none());
    }
}
