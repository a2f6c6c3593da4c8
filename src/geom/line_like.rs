//! The shared parameterization of Line, Ray and BoundedRay.
//!
//! A line-like value is an origin, a direction and a [`Bound`] on the
//! distance travelled along that direction. Every pairwise query is written
//! once against [`Parameterization`] and then restricted by each side's
//! bound, so the [`LineLike`] trait supplies nearly all behavior as
//! provided methods and each concrete type only describes its own shape.

use super::kernel;
use super::predicates;
use super::{Plane, PlaneObjectRelationship, Sphere, SphereIntersection};
use crate::math::{Angle, Direction, Location, Rotation, Vect};
use crate::precision::Tolerance;

/// Which distances along the direction belong to the object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    /// Every distance (Line).
    Infinite,
    /// Distances `>= 0` (Ray).
    SemiInfinite,
    /// Distances in `[0, length]` (BoundedRay).
    Finite(f32),
}

impl Bound {
    /// True if `distance` lies within this bound.
    #[inline]
    pub fn contains(&self, distance: f32) -> bool {
        match *self {
            Bound::Infinite => true,
            Bound::SemiInfinite => distance >= 0.0,
            Bound::Finite(length) => distance >= 0.0 && distance <= length,
        }
    }

    /// Clamps `distance` into this bound.
    #[inline]
    pub fn bind(&self, distance: f32) -> f32 {
        match *self {
            Bound::Infinite => distance,
            Bound::SemiInfinite => distance.max(0.0),
            Bound::Finite(length) => distance.max(0.0).min(length),
        }
    }

    /// Length for finite bounds.
    #[inline]
    pub fn length(&self) -> Option<f32> {
        match *self {
            Bound::Finite(length) => Some(length),
            Bound::Infinite | Bound::SemiInfinite => None,
        }
    }
}

/// Origin, direction and bound of a line-like value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameterization {
    pub origin: Location,
    pub direction: Direction,
    pub bound: Bound,
}

impl Parameterization {
    /// `origin + direction * distance`, ignoring the bound.
    #[inline]
    pub fn unbounded_location_at_distance(&self, distance: f32) -> Location {
        self.origin + self.direction * distance
    }

    #[inline]
    pub fn distance_is_within_bounds(&self, distance: f32) -> bool {
        self.bound.contains(distance)
    }

    #[inline]
    pub fn bind_distance(&self, distance: f32) -> f32 {
        self.bound.bind(distance)
    }

    #[inline]
    pub fn bounded_location_at_distance(&self, distance: f32) -> Location {
        self.unbounded_location_at_distance(self.bind_distance(distance))
    }

    #[inline]
    pub fn location_at_distance_or_none(&self, distance: f32) -> Option<Location> {
        self.distance_is_within_bounds(distance)
            .then(|| self.unbounded_location_at_distance(distance))
    }

    /// Signed distance along the direction to the foot of `point`.
    /// Always 0 for a `None` direction.
    #[inline]
    pub fn unbounded_distance_at_point_closest_to(&self, point: Location) -> f32 {
        (point - self.origin).dot_direction(self.direction)
    }
}

/// Anchor for [`LineLike::transform_around`].
///
/// `Middle` and `End` only exist for bounded values; unbounded values
/// resolve them to their start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pivot {
    Start,
    Middle,
    End,
    /// Signed distance along the direction from the start.
    Distance(f32),
}

impl Pivot {
    /// Distance along a line-like with `bound` where this pivot sits.
    #[inline]
    pub fn resolve(&self, bound: Bound) -> f32 {
        match (*self, bound) {
            (Pivot::Start, _) => 0.0,
            (Pivot::Middle, Bound::Finite(length)) => length * 0.5,
            (Pivot::End, Bound::Finite(length)) => length,
            (Pivot::Middle | Pivot::End, _) => 0.0,
            (Pivot::Distance(d), _) => d,
        }
    }
}

/// Behavior common to Line, Ray and BoundedRay.
///
/// Implementors describe their parameterization, how to rebuild themselves
/// from a start point and a span, and what pieces they split or reflect
/// into. Everything else is provided.
pub trait LineLike: Copy + Sized {
    /// What remains after bouncing off a surface.
    type Reflection: LineLike;
    /// Piece from the original start up to a split point.
    type SplitHead: LineLike;
    /// Piece from a split point onwards.
    type SplitTail: LineLike;

    fn parameterization(&self) -> Parameterization;

    /// Rebuilds a value of this kind at `start` spanning `span`. Unbounded
    /// kinds only keep the direction of `span`.
    fn from_start_and_span(start: Location, span: Vect) -> Self;

    /// Unit direction vect for unbounded kinds, start-to-end for bounded ones.
    fn span(&self) -> Vect;

    /// Splits at an unbounded distance along the direction.
    fn split_at_distance(&self, distance: f32) -> (Self::SplitHead, Self::SplitTail);

    /// The remainder after `distance`, redirected along `direction`.
    fn reflection_at_distance(&self, distance: f32, direction: Direction) -> Self::Reflection;

    // ---------------------------------------------------------------
    // Parameterization contract
    // ---------------------------------------------------------------

    #[inline]
    fn start_point(&self) -> Location {
        self.parameterization().origin
    }

    #[inline]
    fn direction(&self) -> Direction {
        self.parameterization().direction
    }

    #[inline]
    fn bound(&self) -> Bound {
        self.parameterization().bound
    }

    #[inline]
    fn unbounded_location_at_distance(&self, distance: f32) -> Location {
        self.parameterization().unbounded_location_at_distance(distance)
    }

    #[inline]
    fn distance_is_within_line_bounds(&self, distance: f32) -> bool {
        self.parameterization().distance_is_within_bounds(distance)
    }

    #[inline]
    fn bind_distance(&self, distance: f32) -> f32 {
        self.parameterization().bind_distance(distance)
    }

    #[inline]
    fn bounded_location_at_distance(&self, distance: f32) -> Location {
        self.parameterization().bounded_location_at_distance(distance)
    }

    #[inline]
    fn location_at_distance_or_none(&self, distance: f32) -> Option<Location> {
        self.parameterization().location_at_distance_or_none(distance)
    }

    #[inline]
    fn unbounded_distance_at_point_closest_to(&self, point: Location) -> f32 {
        self.parameterization().unbounded_distance_at_point_closest_to(point)
    }

    #[inline]
    fn bounded_distance_at_point_closest_to(&self, point: Location) -> f32 {
        kernel::bounded_distance_to_point(&self.parameterization(), point)
    }

    // ---------------------------------------------------------------
    // Points
    // ---------------------------------------------------------------

    fn point_closest_to(&self, point: Location) -> Location {
        let p = self.parameterization();
        p.unbounded_location_at_distance(kernel::bounded_distance_to_point(&p, point))
    }

    fn distance_from(&self, point: Location) -> f32 {
        self.point_closest_to(point).distance_from(&point)
    }

    fn distance_squared_from(&self, point: Location) -> f32 {
        self.point_closest_to(point).distance_squared_from(&point)
    }

    /// True iff `distance_from(point) <= thickness`.
    fn contains(&self, point: Location, thickness: f32) -> bool {
        self.distance_from(point) <= thickness
    }

    fn point_closest_to_origin(&self) -> Location {
        self.point_closest_to(Location::ORIGIN)
    }

    fn distance_from_origin(&self) -> f32 {
        self.distance_from(Location::ORIGIN)
    }

    /// Returns a copy moved by `v`.
    fn moved_by(&self, v: Vect) -> Self {
        Self::from_start_and_span(self.start_point() + v, self.span())
    }

    // ---------------------------------------------------------------
    // Other line-likes
    // ---------------------------------------------------------------

    /// Point on `self` closest to `other`.
    fn point_closest_to_line<L: LineLike>(&self, other: &L) -> Location {
        let a = self.parameterization();
        let (ta, _) = kernel::closest_parameters(&a, &other.parameterization());
        a.unbounded_location_at_distance(ta)
    }

    /// Point on `other` closest to `self`.
    #[inline]
    fn closest_point_on_line<L: LineLike>(&self, other: &L) -> Location {
        other.point_closest_to_line(self)
    }

    /// Evaluated in both argument orders, keeping the smaller gap, so the
    /// result does not depend on which side is `self`.
    fn distance_squared_from_line<L: LineLike>(&self, other: &L) -> f32 {
        let a = self.parameterization();
        let b = other.parameterization();
        let (ta, tb) = kernel::closest_parameters(&a, &b);
        let forward = a
            .unbounded_location_at_distance(ta)
            .distance_squared_from(&b.unbounded_location_at_distance(tb));
        let (tb, ta) = kernel::closest_parameters(&b, &a);
        let backward = b
            .unbounded_location_at_distance(tb)
            .distance_squared_from(&a.unbounded_location_at_distance(ta));
        forward.min(backward)
    }

    fn distance_from_line<L: LineLike>(&self, other: &L) -> f32 {
        self.distance_squared_from_line(other).sqrt()
    }

    /// Point on `other` closest to `self`, if the gap is at most `thickness`.
    /// Some exactly when [`LineLike::is_intersected_by_line`] holds.
    fn intersection_with_line<L: LineLike>(&self, other: &L, thickness: f32) -> Option<Location> {
        if !self.is_intersected_by_line(other, thickness) {
            return None;
        }
        let (_, tb) = kernel::closest_parameters(&self.parameterization(), &other.parameterization());
        Some(other.unbounded_location_at_distance(tb))
    }

    fn is_intersected_by_line<L: LineLike>(&self, other: &L, thickness: f32) -> bool {
        self.distance_from_line(other) <= thickness
    }

    /// Angle between the two directions, in [0, pi].
    fn angle_to_line<L: LineLike>(&self, other: &L) -> Angle {
        self.direction().angle_to(&other.direction())
    }

    fn is_parallel_to_direction(&self, direction: Direction, tolerance: Angle) -> bool {
        self.direction().is_parallel_to(&direction, tolerance)
    }

    fn is_orthogonal_to_direction(&self, direction: Direction, tolerance: Angle) -> bool {
        self.direction().is_orthogonal_to(&direction, tolerance)
    }

    fn is_parallel_to_line<L: LineLike>(&self, other: &L, tolerance: Angle) -> bool {
        self.is_parallel_to_direction(other.direction(), tolerance)
    }

    fn is_orthogonal_to_line<L: LineLike>(&self, other: &L, tolerance: Angle) -> bool {
        self.is_orthogonal_to_direction(other.direction(), tolerance)
    }

    /// Parallel using the angular limit in `tolerance`; pass
    /// `Tolerance::default()` for the crate default.
    fn is_parallel_to_line_within<L: LineLike>(&self, other: &L, tolerance: &Tolerance) -> bool {
        self.is_parallel_to_line(other, tolerance.angular())
    }

    fn is_orthogonal_to_line_within<L: LineLike>(&self, other: &L, tolerance: &Tolerance) -> bool {
        self.is_orthogonal_to_line(other, tolerance.angular())
    }

    /// Colinear with the default [`Tolerance`].
    fn is_colinear_with<L: LineLike>(&self, other: &L) -> bool {
        let tolerance = Tolerance::default();
        self.is_approximately_colinear_with(other, tolerance.line_thickness, tolerance.angular())
    }

    /// Parallel within `angular_tolerance`, and the carrying lines lie
    /// within `thickness` of each other.
    fn is_approximately_colinear_with<L: LineLike>(
        &self,
        other: &L,
        thickness: f32,
        angular_tolerance: Angle,
    ) -> bool {
        predicates::are_colinear(
            &self.parameterization(),
            &other.parameterization(),
            thickness,
            angular_tolerance,
        )
    }

    /// Colinear using the limits in `tolerance`.
    fn is_colinear_within<L: LineLike>(&self, other: &L, tolerance: &Tolerance) -> bool {
        self.is_approximately_colinear_with(other, tolerance.line_thickness, tolerance.angular())
    }

    /// Same start, direction turned onto `other`'s (or its reverse,
    /// whichever is nearer). None if the two are orthogonal.
    fn parallelized_with_line<L: LineLike>(&self, other: &L) -> Option<Self> {
        self.parallelized_with_line_around(other, Pivot::Start)
    }

    fn parallelized_with_line_around<L: LineLike>(&self, other: &L, pivot: Pivot) -> Option<Self> {
        let target = other.direction();
        self.transform_around(pivot, |span| {
            Some(span.direction().parallelized_with(&target)? * span.length())
        })
    }

    /// Same start, direction made perpendicular to `other`'s. None if the two
    /// are parallel.
    fn orthogonalized_against_line<L: LineLike>(&self, other: &L) -> Option<Self> {
        self.orthogonalized_against_line_around(other, Pivot::Start)
    }

    fn orthogonalized_against_line_around<L: LineLike>(&self, other: &L, pivot: Pivot) -> Option<Self> {
        let target = other.direction();
        self.transform_around(pivot, |span| {
            Some(span.direction().orthogonalized_against(&target)? * span.length())
        })
    }

    // ---------------------------------------------------------------
    // Transforms
    // ---------------------------------------------------------------

    /// Applies `op` to the span while keeping the point at `pivot` fixed.
    /// Returns None when `op` does.
    fn transform_around(&self, pivot: Pivot, op: impl FnOnce(Vect) -> Option<Vect>) -> Option<Self> {
        let bound = self.bound();
        let distance = pivot.resolve(bound);
        let anchor = self.unbounded_location_at_distance(distance);
        let span = self.span();
        let new_span = match bound {
            Bound::Finite(_) => op(span)?,
            Bound::Infinite | Bound::SemiInfinite => op(span)?.with_length(1.0),
        };
        let span_length = span.length();
        let fraction = if span_length == 0.0 { 0.0 } else { distance / span_length };
        Some(Self::from_start_and_span(anchor - new_span * fraction, new_span))
    }

    fn rotated_around(&self, pivot: Pivot, rotation: &Rotation) -> Self {
        self.transform_around(pivot, |span| Some(rotation.rotate_vect(span)))
            .unwrap_or(*self)
    }

    /// Rotates the whole object about an arbitrary point.
    fn rotated_around_point(&self, rotation: &Rotation, point: Location) -> Self {
        let start = point + rotation.rotate_vect(self.start_point() - point);
        Self::from_start_and_span(start, rotation.rotate_vect(self.span()))
    }

    // ---------------------------------------------------------------
    // Planes
    // ---------------------------------------------------------------

    /// Signed distance of the nearest point to `plane`; 0 if it crosses.
    fn signed_distance_from_plane(&self, plane: &Plane) -> f32 {
        kernel::plane_closest_parameter(&self.parameterization(), plane).1
    }

    fn distance_from_plane(&self, plane: &Plane) -> f32 {
        self.signed_distance_from_plane(plane).abs()
    }

    fn distance_squared_from_plane(&self, plane: &Plane) -> f32 {
        let d = self.signed_distance_from_plane(plane);
        d * d
    }

    fn relationship_to_plane(&self, plane: &Plane) -> PlaneObjectRelationship {
        PlaneObjectRelationship::from_signed_distance(self.signed_distance_from_plane(plane))
    }

    /// Point on `self` nearest `plane` (the crossing point if there is one).
    fn point_closest_to_plane(&self, plane: &Plane) -> Location {
        let p = self.parameterization();
        p.unbounded_location_at_distance(kernel::plane_closest_parameter(&p, plane).0)
    }

    /// Point on `plane` nearest `self`.
    fn closest_point_on_plane(&self, plane: &Plane) -> Location {
        plane.point_closest_to(&self.point_closest_to_plane(plane))
    }

    fn intersection_with_plane(&self, plane: &Plane) -> Option<Location> {
        let p = self.parameterization();
        Some(p.unbounded_location_at_distance(kernel::bounded_plane_crossing_distance(&p, plane)?))
    }

    fn is_intersected_by_plane(&self, plane: &Plane) -> bool {
        self.intersection_with_plane(plane).is_some()
    }

    /// Angle between the direction and the plane surface.
    fn angle_to_plane(&self, plane: &Plane) -> Angle {
        plane.angle_to(self.direction())
    }

    /// Acute angle between the direction and the normal at the crossing.
    fn incident_angle_with_plane(&self, plane: &Plane) -> Option<Angle> {
        if !self.is_intersected_by_plane(plane) {
            return None;
        }
        plane.incident_angle_with(self.direction())
    }

    fn is_parallel_to_plane(&self, plane: &Plane, tolerance: Angle) -> bool {
        self.direction().is_orthogonal_to(&plane.normal(), tolerance)
    }

    fn is_orthogonal_to_plane(&self, plane: &Plane, tolerance: Angle) -> bool {
        self.direction().is_parallel_to(&plane.normal(), tolerance)
    }

    fn is_parallel_to_plane_within(&self, plane: &Plane, tolerance: &Tolerance) -> bool {
        self.is_parallel_to_plane(plane, tolerance.angular())
    }

    fn is_orthogonal_to_plane_within(&self, plane: &Plane, tolerance: &Tolerance) -> bool {
        self.is_orthogonal_to_plane(plane, tolerance.angular())
    }

    /// Post-crossing remainder, mirrored in the plane. The result starts on
    /// the plane, so it crosses the plane again at distance 0.
    fn reflected_by_plane(&self, plane: &Plane) -> Option<Self::Reflection> {
        let p = self.parameterization();
        let t = kernel::bounded_plane_crossing_distance(&p, plane)?;
        let direction = plane.reflection_of(p.direction)?;
        let reflected = self.reflection_at_distance(t, direction);
        let start = reflected.start_point();
        Some(reflected.moved_by(plane.point_closest_to(&start) - start))
    }

    /// Pieces before and after the crossing point.
    fn split_by_plane(&self, plane: &Plane) -> Option<(Self::SplitHead, Self::SplitTail)> {
        let p = self.parameterization();
        let t = kernel::bounded_plane_crossing_distance(&p, plane)?;
        Some(self.split_at_distance(t))
    }

    /// Flattened onto the plane. A value orthogonal to the plane collapses
    /// to a directionless one at the projected start.
    fn projected_on_to_plane(&self, plane: &Plane) -> Self {
        Self::from_start_and_span(plane.point_closest_to(&self.start_point()), plane.projection_of(self.span()))
    }

    /// Direction turned into the plane, length kept. None if the direction
    /// is along the normal.
    fn parallelized_with_plane(&self, plane: &Plane) -> Option<Self> {
        self.parallelized_with_plane_around(plane, Pivot::Start)
    }

    fn parallelized_with_plane_around(&self, plane: &Plane, pivot: Pivot) -> Option<Self> {
        self.transform_around(pivot, |span| plane.parallelization_of_vect(span))
    }

    /// Direction turned onto the normal, length kept. None if the direction
    /// already lies in the plane.
    fn orthogonalized_against_plane(&self, plane: &Plane) -> Option<Self> {
        self.orthogonalized_against_plane_around(plane, Pivot::Start)
    }

    fn orthogonalized_against_plane_around(&self, plane: &Plane, pivot: Pivot) -> Option<Self> {
        self.transform_around(pivot, |span| plane.orthogonalization_of_vect(span))
    }

    // ---------------------------------------------------------------
    // Spheres
    // ---------------------------------------------------------------

    fn intersection_with_sphere(&self, sphere: &Sphere) -> Option<SphereIntersection> {
        sphere.intersection_with_line(self)
    }

    fn is_intersected_by_sphere(&self, sphere: &Sphere) -> bool {
        sphere.is_intersected_by_line(self)
    }

    fn distance_from_sphere(&self, sphere: &Sphere) -> f32 {
        sphere.distance_from_line(self)
    }

    fn surface_distance_from_sphere(&self, sphere: &Sphere) -> f32 {
        sphere.surface_distance_from_line(self)
    }

    /// Point on `self` nearest the (solid) sphere.
    fn point_closest_to_sphere(&self, sphere: &Sphere) -> Location {
        sphere.closest_point_on_line(self)
    }

    /// Point in the (solid) sphere nearest `self`.
    fn closest_point_on_sphere(&self, sphere: &Sphere) -> Location {
        sphere.point_closest_to_line(self)
    }

    /// Point on `self` nearest the sphere surface.
    fn point_closest_to_sphere_surface(&self, sphere: &Sphere) -> Location {
        sphere.closest_point_to_surface_on_line(self)
    }

    /// Point on the sphere surface nearest `self`.
    fn closest_point_on_sphere_surface(&self, sphere: &Sphere) -> Location {
        sphere.surface_point_closest_to_line(self)
    }

    fn incident_angle_with_sphere(&self, sphere: &Sphere) -> Option<Angle> {
        sphere.incident_angle_with_line(self)
    }

    /// Remainder after the first surface contact, mirrored in the tangent plane.
    fn reflected_by_sphere(&self, sphere: &Sphere) -> Option<Self::Reflection> {
        let (t, tangent_plane) = sphere.first_contact(self)?;
        let direction = tangent_plane.reflection_of(self.direction())?;
        Some(self.reflection_at_distance(t, direction))
    }
}
