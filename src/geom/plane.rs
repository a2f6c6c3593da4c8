//! Infinite plane.
//!
//! Stored in Hessian normal form: every point P on the plane satisfies
//! `dot(normal, P) == distance_from_origin`.

use serde::{Deserialize, Serialize};

use super::Line;
use crate::math::{Angle, Direction, Location, UnitXyz, Vect};
use crate::{GeomError, Result};

/// How an object sits relative to a plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaneObjectRelationship {
    /// The object touches or crosses the plane.
    PlaneIntersectsObject,
    /// The object lies entirely on the side the normal points to.
    PlaneFacesTowardsObject,
    /// The object lies entirely behind the plane.
    PlaneFacesAwayFromObject,
}

impl PlaneObjectRelationship {
    /// Classifies by the signed distance of the object's nearest point.
    #[inline]
    pub fn from_signed_distance(signed_distance: f32) -> Self {
        if signed_distance > 0.0 {
            PlaneObjectRelationship::PlaneFacesTowardsObject
        } else if signed_distance < 0.0 {
            PlaneObjectRelationship::PlaneFacesAwayFromObject
        } else {
            PlaneObjectRelationship::PlaneIntersectsObject
        }
    }
}

/// An infinite plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    normal: UnitXyz,
    distance_from_origin: f32,
}

impl Plane {
    /// Plane with the given normal at signed `distance_from_origin` along it.
    pub fn new(normal: Direction, distance_from_origin: f32) -> Result<Self> {
        match normal.unit() {
            Some(normal) => Ok(Self::from_unit_normal(normal, distance_from_origin)),
            None => {
                log::debug!("rejecting plane with no normal direction");
                Err(GeomError::DegenerateGeometry("plane normal has no direction".into()))
            }
        }
    }

    #[inline]
    pub const fn from_unit_normal(normal: UnitXyz, distance_from_origin: f32) -> Self {
        Self { normal, distance_from_origin }
    }

    /// Plane with the given normal passing through `point`.
    pub fn from_normal_and_point(normal: Direction, point: Location) -> Result<Self> {
        Self::new(normal, normal.xyz().dot(&point.xyz()))
    }

    /// Plane through three points, normal following the right-hand rule
    /// a -> b -> c. Fails for colinear points.
    pub fn from_triangle(a: Location, b: Location, c: Location) -> Result<Self> {
        let normal = (b - a).cross(&(c - a)).direction();
        if normal.is_none() {
            log::debug!("rejecting plane from colinear points {:?} {:?} {:?}", a, b, c);
            return Err(GeomError::DegenerateGeometry("triangle points are colinear".into()));
        }
        Self::from_normal_and_point(normal, a)
    }

    #[inline]
    pub const fn normal(&self) -> Direction {
        Direction::Unit(self.normal)
    }

    #[inline]
    pub const fn unit_normal(&self) -> UnitXyz {
        self.normal
    }

    #[inline]
    pub const fn distance_from_origin(&self) -> f32 {
        self.distance_from_origin
    }

    #[inline]
    pub fn point_closest_to_origin(&self) -> Location {
        Location::from_xyz(self.normal.xyz() * self.distance_from_origin)
    }

    // ---------------------------------------------------------------
    // Points
    // ---------------------------------------------------------------

    /// Positive in front (the side the normal points to), negative behind.
    #[inline]
    pub fn signed_distance_from(&self, point: &Location) -> f32 {
        self.normal.dot_xyz(&point.xyz()) - self.distance_from_origin
    }

    #[inline]
    pub fn distance_from(&self, point: &Location) -> f32 {
        self.signed_distance_from(point).abs()
    }

    #[inline]
    pub fn distance_squared_from(&self, point: &Location) -> f32 {
        let d = self.signed_distance_from(point);
        d * d
    }

    #[inline]
    pub fn point_closest_to(&self, point: &Location) -> Location {
        *point - Vect::from_xyz(self.normal.xyz() * self.signed_distance_from(point))
    }

    #[inline]
    pub fn contains(&self, point: &Location, thickness: f32) -> bool {
        self.distance_from(point) <= thickness
    }

    /// True if `point` is further than `thickness` in front of the plane.
    #[inline]
    pub fn faces_towards(&self, point: &Location, thickness: f32) -> bool {
        self.signed_distance_from(point) > thickness
    }

    /// True if `point` is further than `thickness` behind the plane.
    #[inline]
    pub fn faces_away_from(&self, point: &Location, thickness: f32) -> bool {
        self.signed_distance_from(point) < -thickness
    }

    pub fn relationship_to_point(&self, point: &Location) -> PlaneObjectRelationship {
        PlaneObjectRelationship::from_signed_distance(self.signed_distance_from(point))
    }

    /// Same plane, normal reversed.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane::from_unit_normal(self.normal.reversed(), -self.distance_from_origin)
    }

    #[inline]
    pub fn moved_by(&self, v: Vect) -> Plane {
        Plane::from_unit_normal(self.normal, self.distance_from_origin + v.dot_direction(self.normal()))
    }

    // ---------------------------------------------------------------
    // Directions and vects
    // ---------------------------------------------------------------

    /// Angle between `direction` and the plane surface, in [0, pi/2].
    pub fn angle_to(&self, direction: Direction) -> Angle {
        match direction.unit() {
            Some(u) => Angle::from_radians(self.normal.dot(&u).abs().min(1.0).asin()),
            None => Angle::ZERO,
        }
    }

    /// Acute angle between `direction` and the normal. None when the
    /// direction runs along the plane or is `None`.
    pub fn incident_angle_with(&self, direction: Direction) -> Option<Angle> {
        let u = direction.unit()?;
        let dot = self.normal.dot(&u);
        if dot == 0.0 {
            return None;
        }
        Some(self.fast_incident_angle_with(direction))
    }

    /// [`Plane::incident_angle_with`] without degeneracy checks.
    #[inline]
    pub fn fast_incident_angle_with(&self, direction: Direction) -> Angle {
        Angle::from_radians(self.normal.dot_xyz(&direction.xyz()).abs().min(1.0).acos())
    }

    /// Mirror image of `direction`. None when the direction runs along the
    /// plane or is `None`.
    pub fn reflection_of(&self, direction: Direction) -> Option<Direction> {
        let u = direction.unit()?;
        if self.normal.dot(&u) == 0.0 {
            return None;
        }
        Some(self.fast_reflection_of(direction))
    }

    /// `D - 2(D.N)N`, unchecked.
    #[inline]
    pub fn fast_reflection_of(&self, direction: Direction) -> Direction {
        let d = direction.xyz();
        let n = self.normal.xyz();
        Direction::from_xyz(d - n * (2.0 * n.dot(&d)))
    }

    /// `v` with its normal component removed.
    #[inline]
    pub fn projection_of(&self, v: Vect) -> Vect {
        v.orthogonalized_against(self.normal())
    }

    /// In-plane part of `direction`, renormalized. None if nothing is left.
    #[inline]
    pub fn parallelization_of(&self, direction: Direction) -> Option<Direction> {
        direction.orthogonalized_against(&self.normal())
    }

    /// The normal (or its reverse) nearest `direction`. None if the
    /// direction lies in the plane.
    #[inline]
    pub fn orthogonalization_of(&self, direction: Direction) -> Option<Direction> {
        direction.parallelized_with(&self.normal())
    }

    /// `v` turned into the plane keeping its length.
    #[inline]
    pub fn parallelization_of_vect(&self, v: Vect) -> Option<Vect> {
        Some(self.parallelization_of(v.direction())? * v.length())
    }

    /// `v` turned onto the normal keeping its length.
    #[inline]
    pub fn orthogonalization_of_vect(&self, v: Vect) -> Option<Vect> {
        Some(self.orthogonalization_of(v.direction())? * v.length())
    }

    /// Unchecked [`Plane::parallelization_of_vect`].
    #[inline]
    pub fn fast_parallelization_of_vect(&self, v: Vect) -> Vect {
        self.projection_of(v).with_length(v.length())
    }

    /// Unchecked [`Plane::orthogonalization_of_vect`].
    #[inline]
    pub fn fast_orthogonalization_of_vect(&self, v: Vect) -> Vect {
        v.projected_on_to(self.normal()).with_length(v.length())
    }

    pub fn is_parallel_to(&self, direction: Direction, tolerance: Angle) -> bool {
        direction.is_orthogonal_to(&self.normal(), tolerance)
    }

    pub fn is_orthogonal_to(&self, direction: Direction, tolerance: Angle) -> bool {
        direction.is_parallel_to(&self.normal(), tolerance)
    }

    // ---------------------------------------------------------------
    // Other planes
    // ---------------------------------------------------------------

    /// Acute angle between the two planes.
    pub fn angle_to_plane(&self, other: &Plane) -> Angle {
        let angle = self.normal().angle_to(&other.normal());
        if angle > Angle::QUARTER_CIRCLE {
            Angle::HALF_CIRCLE - angle
        } else {
            angle
        }
    }

    /// Line where two planes meet. None for parallel planes.
    pub fn intersection_with_plane(&self, other: &Plane) -> Option<Line> {
        let n1 = self.normal.xyz();
        let n2 = other.normal.xyz();
        let u = n1.crossed(&n2);
        let direction = Direction::from_xyz(u);
        if direction.is_none() {
            return None;
        }
        let point = (n2.crossed(&u) * self.distance_from_origin + u.crossed(&n1) * other.distance_from_origin)
            / u.square_modulus();
        Some(Line::new(Location::from_xyz(point), direction))
    }

    /// 0 unless the planes are parallel.
    pub fn distance_from_plane(&self, other: &Plane) -> f32 {
        if self.intersection_with_plane(other).is_some() {
            return 0.0;
        }
        self.distance_from(&other.point_closest_to_origin())
    }

    /// Normal and distance each within `epsilon`.
    pub fn approx_eq(&self, other: &Plane, epsilon: f32) -> bool {
        self.normal.xyz().is_equal(&other.normal.xyz(), epsilon)
            && (self.distance_from_origin - other.distance_from_origin).abs() <= epsilon
    }
}
