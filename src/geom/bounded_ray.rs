//! Finite segment between two points.
//!
//! Direction and length are derived from the endpoints. Coincident
//! endpoints give a zero-length segment with `Direction::None`; every query
//! then behaves as if asked of the start point alone.

use serde::{Deserialize, Serialize};

use super::{Bound, Line, LineLike, Parameterization, Pivot, Ray};
use crate::math::{Direction, Location, Vect};

/// A segment from `start_point` to `end_point`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundedRay {
    start_point: Location,
    end_point: Location,
}

impl BoundedRay {
    #[inline]
    pub const fn new(start_point: Location, end_point: Location) -> Self {
        Self { start_point, end_point }
    }

    #[inline]
    pub fn from_start_and_vect(start_point: Location, vect: Vect) -> Self {
        Self::new(start_point, start_point + vect)
    }

    #[inline]
    pub fn from_start_direction_and_length(start_point: Location, direction: Direction, length: f32) -> Self {
        Self::from_start_and_vect(start_point, direction * length)
    }

    #[inline]
    pub const fn end_point(&self) -> Location {
        self.end_point
    }

    #[inline]
    pub fn start_to_end_vect(&self) -> Vect {
        self.end_point - self.start_point
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start_to_end_vect().length()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.start_to_end_vect().length_squared()
    }

    #[inline]
    pub fn middle_point(&self) -> Location {
        self.start_point.midpoint(&self.end_point)
    }

    /// Same segment traversed end to start.
    #[inline]
    pub fn flipped(&self) -> BoundedRay {
        BoundedRay::new(self.end_point, self.start_point)
    }

    /// Same start and direction, new length.
    #[inline]
    pub fn with_length(&self, length: f32) -> BoundedRay {
        BoundedRay::from_start_and_vect(self.start_point, self.start_to_end_vect().with_length(length))
    }

    /// Length multiplied by `factor` keeping the point at `pivot` fixed.
    pub fn scaled_around(&self, pivot: Pivot, factor: f32) -> BoundedRay {
        self.transform_around(pivot, |span| Some(span * factor))
            .unwrap_or(*self)
    }

    #[inline]
    pub fn to_line(&self) -> Line {
        Line::new(self.start_point, self.direction())
    }

    /// Ray from the start through the end.
    #[inline]
    pub fn to_ray_from_start(&self) -> Ray {
        Ray::new(self.start_point, self.direction())
    }

    /// Ray from the end back through the start.
    #[inline]
    pub fn to_ray_from_end(&self) -> Ray {
        Ray::new(self.end_point, self.direction().reversed())
    }

    /// Endpoints each within `epsilon`.
    pub fn approx_eq(&self, other: &BoundedRay, epsilon: f32) -> bool {
        self.start_point.approx_eq(&other.start_point, epsilon)
            && self.end_point.approx_eq(&other.end_point, epsilon)
    }

    /// Same endpoints in either order.
    pub fn equals_disregarding_direction(&self, other: &BoundedRay, epsilon: f32) -> bool {
        self.approx_eq(other, epsilon) || self.approx_eq(&other.flipped(), epsilon)
    }
}

impl LineLike for BoundedRay {
    type Reflection = BoundedRay;
    type SplitHead = BoundedRay;
    type SplitTail = BoundedRay;

    #[inline]
    fn parameterization(&self) -> Parameterization {
        let span = self.start_to_end_vect();
        Parameterization {
            origin: self.start_point,
            direction: span.direction(),
            bound: Bound::Finite(span.length()),
        }
    }

    #[inline]
    fn from_start_and_span(start: Location, span: Vect) -> Self {
        BoundedRay::from_start_and_vect(start, span)
    }

    #[inline]
    fn span(&self) -> Vect {
        self.start_to_end_vect()
    }

    fn moved_by(&self, v: Vect) -> Self {
        BoundedRay::new(self.start_point + v, self.end_point + v)
    }

    fn split_at_distance(&self, distance: f32) -> (BoundedRay, BoundedRay) {
        let p = self.unbounded_location_at_distance(distance);
        (BoundedRay::new(self.start_point, p), BoundedRay::new(p, self.end_point))
    }

    /// Keeps whatever length was left after `distance`.
    fn reflection_at_distance(&self, distance: f32, direction: Direction) -> BoundedRay {
        let p = self.unbounded_location_at_distance(distance);
        let remaining = (self.length() - distance).max(0.0);
        BoundedRay::from_start_direction_and_length(p, direction, remaining)
    }
}
