//! Infinite line.

use serde::{Deserialize, Serialize};

use super::{Bound, BoundedRay, LineLike, Parameterization, Ray};
use crate::math::{Direction, Location, Vect};

/// A line through `point_on_line`, infinite in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    point_on_line: Location,
    direction: Direction,
}

impl Line {
    #[inline]
    pub const fn new(point_on_line: Location, direction: Direction) -> Self {
        Self { point_on_line, direction }
    }

    /// Line through two points; directionless if they coincide.
    #[inline]
    pub fn from_two_points(a: Location, b: Location) -> Self {
        Self::new(a, (b - a).direction())
    }

    #[inline]
    pub const fn point_on_line(&self) -> Location {
        self.point_on_line
    }

    /// Same line, opposite direction.
    #[inline]
    pub fn reversed(&self) -> Line {
        Line::new(self.point_on_line, self.direction.reversed())
    }

    /// Ray starting at the point on the line.
    #[inline]
    pub fn to_ray(&self) -> Ray {
        Ray::new(self.point_on_line, self.direction)
    }

    /// Segment of `length` starting at the point on the line.
    #[inline]
    pub fn to_bounded_ray(&self, length: f32) -> BoundedRay {
        BoundedRay::from_start_and_vect(self.point_on_line, self.direction * length)
    }

    /// Point and direction each within `epsilon`.
    pub fn approx_eq(&self, other: &Line, epsilon: f32) -> bool {
        self.point_on_line.approx_eq(&other.point_on_line, epsilon)
            && self.direction.approx_eq(&other.direction, epsilon)
    }
}

impl LineLike for Line {
    type Reflection = Ray;
    type SplitHead = Ray;
    type SplitTail = Ray;

    #[inline]
    fn parameterization(&self) -> Parameterization {
        Parameterization {
            origin: self.point_on_line,
            direction: self.direction,
            bound: Bound::Infinite,
        }
    }

    #[inline]
    fn from_start_and_span(start: Location, span: Vect) -> Self {
        Line::new(start, span.direction())
    }

    #[inline]
    fn span(&self) -> Vect {
        self.direction * 1.0
    }

    /// Two rays leaving the split point in opposite directions; the head
    /// points back the way the line came.
    fn split_at_distance(&self, distance: f32) -> (Ray, Ray) {
        let p = self.unbounded_location_at_distance(distance);
        (Ray::new(p, self.direction.reversed()), Ray::new(p, self.direction))
    }

    fn reflection_at_distance(&self, distance: f32, direction: Direction) -> Ray {
        Ray::new(self.unbounded_location_at_distance(distance), direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Plane;

    #[test]
    fn test_line_contract_is_unbounded() {
        let line = Line::new(Location::new(0.0, 1.0, 0.0), Direction::left());
        assert!(line.distance_is_within_line_bounds(-1e9));
        assert_eq!(line.bind_distance(-5.0), -5.0);
        assert_eq!(line.location_at_distance_or_none(-5.0), Some(Location::new(-5.0, 1.0, 0.0)));
    }

    #[test]
    fn test_line_point_queries() {
        let line = Line::new(Location::new(0.0, 1.0, 0.0), Direction::left());
        assert_eq!(line.point_closest_to(Location::new(-7.0, 5.0, 0.0)), Location::new(-7.0, 1.0, 0.0));
        assert!((line.distance_from(Location::new(-7.0, 5.0, 0.0)) - 4.0).abs() < 1e-6);
        assert!((line.distance_from_origin() - 1.0).abs() < 1e-6);
        assert!(line.contains(Location::new(3.0, 1.005, 0.0), 0.01));
        assert!(!line.contains(Location::new(3.0, 1.02, 0.0), 0.01));
    }

    #[test]
    fn test_line_splits_into_opposed_rays() {
        let line = Line::new(Location::new(0.0, 5.0, 0.0), Direction::down());
        let plane = Plane::new(Direction::up(), 0.0).unwrap();
        let (head, tail) = line.split_by_plane(&plane).unwrap();
        assert_eq!(head.start_point(), Location::ORIGIN);
        assert_eq!(tail.start_point(), Location::ORIGIN);
        assert_eq!(head.direction(), Direction::up());
        assert_eq!(tail.direction(), Direction::down());
    }

    #[test]
    fn test_line_parallel_to_plane_never_splits() {
        let line = Line::new(Location::new(0.0, 5.0, 0.0), Direction::left());
        let plane = Plane::new(Direction::up(), 0.0).unwrap();
        assert!(line.split_by_plane(&plane).is_none());
        assert!(line.intersection_with_plane(&plane).is_none());
        assert_eq!(line.signed_distance_from_plane(&plane), 5.0);
    }

    #[test]
    fn test_line_conversions() {
        let line = Line::new(Location::new(1.0, 0.0, 0.0), Direction::up());
        assert_eq!(line.to_ray().start_point(), Location::new(1.0, 0.0, 0.0));
        assert_eq!(line.to_bounded_ray(3.0).end_point(), Location::new(1.0, 3.0, 0.0));
        assert_eq!(line.reversed().direction(), Direction::down());
    }
}
