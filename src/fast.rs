//! Unchecked twins of the safe queries.
//!
//! These skip every degeneracy guard: `Direction::None`, a direction
//! parallel to the plane, a crossing outside the object's bound, a line
//! that misses the sphere. Violating a precondition gives an unspecified
//! (usually non-finite) result rather than `None`. Use the [`LineLike`]
//! methods when input validity is not already known.

use crate::geom::{
    closest_parameters, fast_plane_crossing_distance, LineLike, Pivot, Plane, Sphere,
};
use crate::math::{Angle, Location, UnitXyz};

/// Point on `a` closest to `b`.
#[inline]
pub fn closest_point<A: LineLike, B: LineLike>(a: &A, b: &B) -> Location {
    let pa = a.parameterization();
    let (ta, _) = closest_parameters(&pa, &b.parameterization());
    pa.unbounded_location_at_distance(ta)
}

/// Point on `b` closest to `a`, without a thickness test.
/// Precondition: the two actually meet.
#[inline]
pub fn intersection_with_line<A: LineLike, B: LineLike>(a: &A, b: &B) -> Location {
    closest_point(b, a)
}

/// Unbounded distance along `line` to `plane`.
#[inline]
fn plane_crossing<L: LineLike>(line: &L, plane: &Plane) -> f32 {
    let p = line.parameterization();
    let similarity = plane.unit_normal().dot_xyz(&p.direction.xyz());
    fast_plane_crossing_distance(&p, plane, similarity)
}

/// Precondition: `line` crosses `plane` within its bound.
#[inline]
pub fn intersection_with_plane<L: LineLike>(line: &L, plane: &Plane) -> Location {
    line.unbounded_location_at_distance(plane_crossing(line, plane))
}

/// Precondition: `line` crosses `plane` within its bound.
#[inline]
pub fn incident_angle_with_plane<L: LineLike>(line: &L, plane: &Plane) -> Angle {
    plane.fast_incident_angle_with(line.direction())
}

/// Precondition: `line` crosses `plane` within its bound.
#[inline]
pub fn reflected_by_plane<L: LineLike>(line: &L, plane: &Plane) -> L::Reflection {
    line.reflection_at_distance(plane_crossing(line, plane), plane.fast_reflection_of(line.direction()))
}

/// Precondition: `line` crosses `plane` within its bound.
#[inline]
pub fn split_by_plane<L: LineLike>(line: &L, plane: &Plane) -> (L::SplitHead, L::SplitTail) {
    line.split_at_distance(plane_crossing(line, plane))
}

/// Precondition: the direction is not along the normal.
#[inline]
pub fn parallelized_with_plane<L: LineLike>(line: &L, plane: &Plane) -> L {
    parallelized_with_plane_around(line, plane, Pivot::Start)
}

pub fn parallelized_with_plane_around<L: LineLike>(line: &L, plane: &Plane, pivot: Pivot) -> L {
    line.transform_around(pivot, |span| Some(plane.fast_parallelization_of_vect(span)))
        .unwrap_or(*line)
}

/// Precondition: the direction does not lie in the plane.
#[inline]
pub fn orthogonalized_against_plane<L: LineLike>(line: &L, plane: &Plane) -> L {
    orthogonalized_against_plane_around(line, plane, Pivot::Start)
}

pub fn orthogonalized_against_plane_around<L: LineLike>(line: &L, plane: &Plane, pivot: Pivot) -> L {
    line.transform_around(pivot, |span| Some(plane.fast_orthogonalization_of_vect(span)))
        .unwrap_or(*line)
}

/// Near root of the sphere quadratic.
#[inline]
fn sphere_entry<L: LineLike>(line: &L, sphere: &Sphere) -> f32 {
    let p = line.parameterization();
    let o = (p.origin - sphere.center()).xyz();
    let od = p.direction.xyz().dot(&o);
    let r = sphere.radius();
    -od - (od * od - (o.square_modulus() - r * r)).sqrt()
}

/// First contact with the sphere surface.
/// Precondition: `line` starts outside `sphere` and hits it.
#[inline]
pub fn intersection_with_sphere<L: LineLike>(line: &L, sphere: &Sphere) -> Location {
    line.unbounded_location_at_distance(sphere_entry(line, sphere))
}

fn tangent_plane_at_entry<L: LineLike>(line: &L, sphere: &Sphere) -> (f32, Plane) {
    let t = sphere_entry(line, sphere);
    let hit = line.unbounded_location_at_distance(t);
    let normal = (hit - sphere.center()).direction().unit().unwrap_or(UnitXyz::Y);
    let plane = Plane::from_unit_normal(normal, normal.dot_xyz(&hit.xyz()));
    (t, plane)
}

/// Precondition: `line` starts outside `sphere` and hits it.
#[inline]
pub fn incident_angle_with_sphere<L: LineLike>(line: &L, sphere: &Sphere) -> Angle {
    let (_, plane) = tangent_plane_at_entry(line, sphere);
    plane.fast_incident_angle_with(line.direction())
}

/// Precondition: `line` starts outside `sphere` and hits it.
pub fn reflected_by_sphere<L: LineLike>(line: &L, sphere: &Sphere) -> L::Reflection {
    let (t, plane) = tangent_plane_at_entry(line, sphere);
    line.reflection_at_distance(t, plane.fast_reflection_of(line.direction()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{BoundedRay, Line, Ray};
    use crate::math::Direction;

    #[test]
    fn test_fast_matches_safe_on_valid_input() {
        let plane = Plane::new(Direction::up(), 0.0).unwrap();
        let ray = Ray::new(Location::new(0.0, 4.0, 0.0), Direction::new(1.0, -1.0, 0.0));
        assert_eq!(intersection_with_plane(&ray, &plane), ray.intersection_with_plane(&plane).unwrap());
        assert_eq!(reflected_by_plane(&ray, &plane), ray.reflected_by_plane(&plane).unwrap());
        assert_eq!(split_by_plane(&ray, &plane), ray.split_by_plane(&plane).unwrap());
        assert!(incident_angle_with_plane(&ray, &plane)
            .approx_eq(&ray.incident_angle_with_plane(&plane).unwrap(), 1e-6));
    }

    #[test]
    fn test_fast_parallelize() {
        let plane = Plane::new(Direction::up(), 0.0).unwrap();
        let br = BoundedRay::new(Location::ORIGIN, Location::new(3.0, 4.0, 0.0));
        let fast = parallelized_with_plane(&br, &plane);
        let safe = br.parallelized_with_plane(&plane).unwrap();
        assert!(fast.approx_eq(&safe, 1e-5));
        let ortho = orthogonalized_against_plane(&br, &plane);
        assert!(ortho.approx_eq(&br.orthogonalized_against_plane(&plane).unwrap(), 1e-5));
    }

    #[test]
    fn test_fast_sphere() {
        let sphere = Sphere::new(Location::ORIGIN, 2.0);
        let line = Line::new(Location::new(-10.0, 0.0, 0.0), Direction::left());
        let hit = intersection_with_sphere(&line, &sphere);
        assert!(hit.approx_eq(&Location::new(-2.0, 0.0, 0.0), 1e-5));
        let reflected = reflected_by_sphere(&line, &sphere);
        assert!(reflected.direction().approx_eq(&Direction::right(), 1e-5));
        assert!(incident_angle_with_sphere(&line, &sphere).radians().abs() < 1e-3);
    }

    #[test]
    fn test_fast_line_intersection() {
        let a = Ray::new(Location::new(0.0, 1.0, 0.0), Direction::left());
        let b = Line::new(Location::new(100.0, 2.0, 0.0), Direction::down());
        assert!(intersection_with_line(&a, &b).approx_eq(&Location::new(100.0, 1.0, 0.0), 1e-4));
    }
}
