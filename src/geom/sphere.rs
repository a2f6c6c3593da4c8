//! Spheres: anywhere in space, or fixed at the origin.
//!
//! The implicit surface function is `|p - center| - radius`; it is
//! negative inside, positive outside, and drives every distance query.

use serde::{Deserialize, Serialize};

use super::kernel;
use super::{LineLike, Plane, PlaneObjectRelationship};
use crate::math::{Angle, Direction, Location, Vect};

/// Surface points where a line-like meets a sphere, in the line-like's own
/// direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereIntersection {
    pub first: Location,
    /// None for a tangent contact or when the second root is out of bounds.
    pub second: Option<Location>,
}

impl SphereIntersection {
    /// 1 or 2.
    #[inline]
    pub fn count(&self) -> usize {
        1 + usize::from(self.second.is_some())
    }

    pub fn points(&self) -> impl Iterator<Item = Location> {
        std::iter::once(self.first).chain(self.second)
    }
}

/// A sphere. Negative radii are clamped to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Location,
    radius: f32,
}

impl Sphere {
    #[inline]
    pub fn new(center: Location, radius: f32) -> Self {
        Self { center, radius: radius.max(0.0) }
    }

    #[inline]
    pub const fn center(&self) -> Location {
        self.center
    }

    #[inline]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * std::f32::consts::PI * self.radius.powi(3)
    }

    pub fn surface_area(&self) -> f32 {
        4.0 * std::f32::consts::PI * self.radius * self.radius
    }

    #[inline]
    pub fn scaled_by(&self, factor: f32) -> Sphere {
        Sphere::new(self.center, self.radius * factor)
    }

    #[inline]
    pub fn moved_by(&self, v: Vect) -> Sphere {
        Sphere::new(self.center + v, self.radius)
    }

    pub fn approx_eq(&self, other: &Sphere, epsilon: f32) -> bool {
        self.center.approx_eq(&other.center, epsilon) && (self.radius - other.radius).abs() <= epsilon
    }

    // ---------------------------------------------------------------
    // Points
    // ---------------------------------------------------------------

    /// Negative inside, positive outside.
    #[inline]
    pub fn signed_distance_from(&self, point: &Location) -> f32 {
        point.distance_from(&self.center) - self.radius
    }

    /// Distance to the solid sphere; 0 inside.
    #[inline]
    pub fn distance_from(&self, point: &Location) -> f32 {
        self.signed_distance_from(point).max(0.0)
    }

    /// Distance to the surface, from either side.
    #[inline]
    pub fn surface_distance_from(&self, point: &Location) -> f32 {
        self.signed_distance_from(point).abs()
    }

    #[inline]
    pub fn contains(&self, point: &Location) -> bool {
        point.distance_squared_from(&self.center) <= self.radius * self.radius
    }

    /// Nearest point of the solid sphere.
    pub fn point_closest_to(&self, point: &Location) -> Location {
        self.center + (*point - self.center).with_max_length(self.radius)
    }

    /// Nearest surface point. The centre maps to the top of the sphere.
    pub fn surface_point_closest_to(&self, point: &Location) -> Location {
        let direction = match (*point - self.center).direction() {
            Direction::None => Direction::up(),
            d => d,
        };
        self.center + direction * self.radius
    }

    // ---------------------------------------------------------------
    // Line-likes
    // ---------------------------------------------------------------

    /// Valid roots in travel order: the first, then the second if distinct.
    fn valid_crossings<L: LineLike>(&self, line: &L) -> Option<(f32, Option<f32>)> {
        let p = line.parameterization();
        let (near, far) = kernel::sphere_crossing_distances(&p, self.center, self.radius)?;
        let near_ok = p.distance_is_within_bounds(near);
        let far_ok = near != far && p.distance_is_within_bounds(far);
        match (near_ok, far_ok) {
            (true, true) => Some((near, Some(far))),
            (true, false) => Some((near, None)),
            (false, true) => Some((far, None)),
            (false, false) => None,
        }
    }

    pub fn intersection_with_line<L: LineLike>(&self, line: &L) -> Option<SphereIntersection> {
        let (first, second) = self.valid_crossings(line)?;
        Some(SphereIntersection {
            first: line.unbounded_location_at_distance(first),
            second: second.map(|t| line.unbounded_location_at_distance(t)),
        })
    }

    pub fn is_intersected_by_line<L: LineLike>(&self, line: &L) -> bool {
        self.valid_crossings(line).is_some()
    }

    /// Point on `line` nearest the centre.
    #[inline]
    pub fn closest_point_on_line<L: LineLike>(&self, line: &L) -> Location {
        line.point_closest_to(self.center)
    }

    /// Point of the solid sphere nearest `line`.
    pub fn point_closest_to_line<L: LineLike>(&self, line: &L) -> Location {
        self.point_closest_to(&self.closest_point_on_line(line))
    }

    /// Distance to the solid sphere; 0 when the line passes through it.
    pub fn distance_from_line<L: LineLike>(&self, line: &L) -> f32 {
        (line.distance_from(self.center) - self.radius).max(0.0)
    }

    /// Point on `line` nearest the surface: the first crossing if there is
    /// one, otherwise the best of the point nearest the centre and the
    /// line-like's endpoints.
    pub fn closest_point_to_surface_on_line<L: LineLike>(&self, line: &L) -> Location {
        if let Some(intersection) = self.intersection_with_line(line) {
            return intersection.first;
        }
        let p = line.parameterization();
        let mut best = self.closest_point_on_line(line);
        let mut best_distance = self.surface_distance_from(&best);
        let ends = std::iter::once(p.origin).chain(p.bound.length().map(|l| p.unbounded_location_at_distance(l)));
        for candidate in ends {
            let d = self.surface_distance_from(&candidate);
            if d < best_distance {
                best = candidate;
                best_distance = d;
            }
        }
        best
    }

    /// Surface point nearest `line`.
    pub fn surface_point_closest_to_line<L: LineLike>(&self, line: &L) -> Location {
        self.surface_point_closest_to(&self.closest_point_to_surface_on_line(line))
    }

    /// 0 when the line-like crosses the surface.
    pub fn surface_distance_from_line<L: LineLike>(&self, line: &L) -> f32 {
        if self.is_intersected_by_line(line) {
            return 0.0;
        }
        self.surface_distance_from(&self.closest_point_to_surface_on_line(line))
    }

    /// Distance along `line` to its first valid contact, with the tangent
    /// plane there. None without contact or for a zero radius.
    pub fn first_contact<L: LineLike>(&self, line: &L) -> Option<(f32, Plane)> {
        let (t, _) = self.valid_crossings(line)?;
        let hit = line.unbounded_location_at_distance(t);
        let normal = (hit - self.center).direction();
        if normal.is_none() {
            log::trace!("contact at sphere centre, no tangent plane");
            return None;
        }
        Plane::from_normal_and_point(normal, hit).ok().map(|plane| (t, plane))
    }

    /// Incident angle at the first contact.
    pub fn incident_angle_with_line<L: LineLike>(&self, line: &L) -> Option<Angle> {
        let (_, plane) = self.first_contact(line)?;
        plane.incident_angle_with(line.direction())
    }

    // ---------------------------------------------------------------
    // Planes
    // ---------------------------------------------------------------

    /// 0 when the plane cuts the sphere, else the gap, signed like the centre.
    pub fn signed_distance_from_plane(&self, plane: &Plane) -> f32 {
        let d = plane.signed_distance_from(&self.center);
        if d.abs() <= self.radius {
            0.0
        } else {
            d - self.radius.copysign(d)
        }
    }

    pub fn distance_from_plane(&self, plane: &Plane) -> f32 {
        self.signed_distance_from_plane(plane).abs()
    }

    pub fn is_intersected_by_plane(&self, plane: &Plane) -> bool {
        plane.distance_from(&self.center) <= self.radius
    }

    pub fn relationship_to_plane(&self, plane: &Plane) -> PlaneObjectRelationship {
        PlaneObjectRelationship::from_signed_distance(self.signed_distance_from_plane(plane))
    }

    /// Centre and radius of the circle where `plane` cuts the sphere.
    pub fn intersection_circle_with_plane(&self, plane: &Plane) -> Option<(Location, f32)> {
        let d = plane.signed_distance_from(&self.center);
        if d.abs() > self.radius {
            return None;
        }
        let radius = (self.radius * self.radius - d * d).max(0.0).sqrt();
        Some((plane.point_closest_to(&self.center), radius))
    }

    /// Point of the solid sphere nearest `plane`.
    pub fn point_closest_to_plane(&self, plane: &Plane) -> Location {
        if self.is_intersected_by_plane(plane) {
            return plane.point_closest_to(&self.center);
        }
        let toward = if plane.signed_distance_from(&self.center) > 0.0 {
            plane.normal().reversed()
        } else {
            plane.normal()
        };
        self.center + toward * self.radius
    }

    /// Point of `plane` nearest the sphere.
    pub fn closest_point_on_plane(&self, plane: &Plane) -> Location {
        plane.point_closest_to(&self.center)
    }
}

/// A sphere centred on the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginSphere {
    radius: f32,
}

impl OriginSphere {
    #[inline]
    pub fn new(radius: f32) -> Self {
        Self { radius: radius.max(0.0) }
    }

    #[inline]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn to_sphere(&self) -> Sphere {
        Sphere::new(Location::ORIGIN, self.radius)
    }

    /// The same radius around `center`.
    #[inline]
    pub fn at(&self, center: Location) -> Sphere {
        Sphere::new(center, self.radius)
    }

    pub fn volume(&self) -> f32 {
        self.to_sphere().volume()
    }

    pub fn surface_area(&self) -> f32 {
        self.to_sphere().surface_area()
    }

    pub fn scaled_by(&self, factor: f32) -> OriginSphere {
        OriginSphere::new(self.radius * factor)
    }

    pub fn approx_eq(&self, other: &OriginSphere, epsilon: f32) -> bool {
        (self.radius - other.radius).abs() <= epsilon
    }

    #[inline]
    pub fn signed_distance_from(&self, point: &Location) -> f32 {
        self.to_sphere().signed_distance_from(point)
    }

    #[inline]
    pub fn distance_from(&self, point: &Location) -> f32 {
        self.to_sphere().distance_from(point)
    }

    #[inline]
    pub fn surface_distance_from(&self, point: &Location) -> f32 {
        self.to_sphere().surface_distance_from(point)
    }

    #[inline]
    pub fn contains(&self, point: &Location) -> bool {
        self.to_sphere().contains(point)
    }

    pub fn point_closest_to(&self, point: &Location) -> Location {
        self.to_sphere().point_closest_to(point)
    }

    pub fn surface_point_closest_to(&self, point: &Location) -> Location {
        self.to_sphere().surface_point_closest_to(point)
    }

    pub fn intersection_with_line<L: LineLike>(&self, line: &L) -> Option<SphereIntersection> {
        self.to_sphere().intersection_with_line(line)
    }

    pub fn is_intersected_by_line<L: LineLike>(&self, line: &L) -> bool {
        self.to_sphere().is_intersected_by_line(line)
    }

    pub fn distance_from_line<L: LineLike>(&self, line: &L) -> f32 {
        self.to_sphere().distance_from_line(line)
    }

    pub fn surface_distance_from_line<L: LineLike>(&self, line: &L) -> f32 {
        self.to_sphere().surface_distance_from_line(line)
    }

    pub fn incident_angle_with_line<L: LineLike>(&self, line: &L) -> Option<Angle> {
        self.to_sphere().incident_angle_with_line(line)
    }

    pub fn signed_distance_from_plane(&self, plane: &Plane) -> f32 {
        self.to_sphere().signed_distance_from_plane(plane)
    }

    pub fn intersection_circle_with_plane(&self, plane: &Plane) -> Option<(Location, f32)> {
        self.to_sphere().intersection_circle_with_plane(plane)
    }
}

impl From<OriginSphere> for Sphere {
    #[inline]
    fn from(s: OriginSphere) -> Self {
        s.to_sphere()
    }
}
