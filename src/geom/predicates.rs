//! Tolerance predicates between line-likes.
//!
//! Each predicate gives the same answer whichever argument comes first.

use super::line_like::Parameterization;
use crate::math::{Angle, Location};

/// Distance from `point` to the infinite line carrying `line`.
fn carrier_distance(line: &Parameterization, point: Location) -> f32 {
    let offset = point - line.origin;
    offset.orthogonalized_against(line.direction).length()
}

/// Perpendicular separation of two carrying lines, taking the larger of
/// the two one-sided measures.
pub(crate) fn carrier_separation(a: &Parameterization, b: &Parameterization) -> f32 {
    carrier_distance(a, b.origin).max(carrier_distance(b, a.origin))
}

pub(crate) fn are_colinear(
    a: &Parameterization,
    b: &Parameterization,
    thickness: f32,
    angular_tolerance: Angle,
) -> bool {
    a.direction.is_parallel_to(&b.direction, angular_tolerance) && carrier_separation(a, b) <= thickness
}
