//! Semi-infinite ray.

use serde::{Deserialize, Serialize};

use super::{Bound, BoundedRay, Line, LineLike, Parameterization};
use crate::math::{Direction, Location, Vect};

/// A ray from `start_point`, infinite along `direction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    start_point: Location,
    direction: Direction,
}

impl Ray {
    #[inline]
    pub const fn new(start_point: Location, direction: Direction) -> Self {
        Self { start_point, direction }
    }

    /// Same start, opposite direction.
    #[inline]
    pub fn flipped(&self) -> Ray {
        Ray::new(self.start_point, self.direction.reversed())
    }

    #[inline]
    pub fn to_line(&self) -> Line {
        Line::new(self.start_point, self.direction)
    }

    /// The first `length` of this ray.
    #[inline]
    pub fn to_bounded_ray(&self, length: f32) -> BoundedRay {
        BoundedRay::from_start_and_vect(self.start_point, self.direction * length)
    }

    pub fn approx_eq(&self, other: &Ray, epsilon: f32) -> bool {
        self.start_point.approx_eq(&other.start_point, epsilon)
            && self.direction.approx_eq(&other.direction, epsilon)
    }
}

impl LineLike for Ray {
    type Reflection = Ray;
    type SplitHead = BoundedRay;
    type SplitTail = Ray;

    #[inline]
    fn parameterization(&self) -> Parameterization {
        Parameterization {
            origin: self.start_point,
            direction: self.direction,
            bound: Bound::SemiInfinite,
        }
    }

    #[inline]
    fn from_start_and_span(start: Location, span: Vect) -> Self {
        Ray::new(start, span.direction())
    }

    #[inline]
    fn span(&self) -> Vect {
        self.direction * 1.0
    }

    fn split_at_distance(&self, distance: f32) -> (BoundedRay, Ray) {
        let p = self.unbounded_location_at_distance(distance);
        (BoundedRay::new(self.start_point, p), Ray::new(p, self.direction))
    }

    fn reflection_at_distance(&self, distance: f32, direction: Direction) -> Ray {
        Ray::new(self.unbounded_location_at_distance(distance), direction)
    }
}
