//! Tolerance constants for geometric comparisons.
//!
//! Every comparison in the kernel that is not an exact degeneracy test
//! goes through one of these values. Callers that need different limits
//! pass their own, or deserialize a [`Tolerance`] from configuration.

use serde::{Deserialize, Serialize};

use crate::math::Angle;

/// Default radius within which two line-likes are treated as touching.
/// Value: 0.01
pub const DEFAULT_LINE_THICKNESS: f32 = 0.01;

/// Default half-thickness of a plane for facing tests.
/// Value: 0.01
pub const DEFAULT_PLANE_THICKNESS: f32 = 0.01;

/// Default angular tolerance for parallel/orthogonal predicates, in degrees.
pub const DEFAULT_ANGULAR_TOLERANCE_DEGREES: f32 = 1.0;

/// Closest-point solver treats two directions as parallel when
/// `1 - |cos|` falls below this value.
/// Value: 1.0e-4
pub const PARALLEL_EPSILON: f32 = 1.0e-4;

/// Squared length below which the in-plane (or along-normal) residual of a
/// direction is considered absent, making parallelize/orthogonalize undefined.
/// Value: 1.0e-5
pub const DECOMPOSITION_EPSILON_SQUARED: f32 = 1.0e-5;

/// A crossing just outside a bound still counts when the bound's end point
/// is this many epsilons (scaled by coordinate magnitude) from the plane.
/// Value: 16
pub const PLANE_CONTACT_ULPS: f32 = 16.0;

/// Fundamental resolution for zero-length checks in normalization.
/// Value: FLT_MIN (~1.2e-38)
pub const RESOLUTION: f32 = f32::MIN_POSITIVE;

/// Linear and angular limits used by the tolerance predicates.
///
/// Missing fields fall back to the crate defaults, so a partial config
/// such as `{"line_thickness": 0.5}` is valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Linear radius for contains/intersection/colinear tests.
    pub line_thickness: f32,
    /// Half-thickness of planes for facing tests.
    pub plane_thickness: f32,
    /// Angular tolerance in degrees.
    pub angular_degrees: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            line_thickness: DEFAULT_LINE_THICKNESS,
            plane_thickness: DEFAULT_PLANE_THICKNESS,
            angular_degrees: DEFAULT_ANGULAR_TOLERANCE_DEGREES,
        }
    }
}

impl Tolerance {
    /// Returns the angular tolerance as an [`Angle`].
    #[inline]
    pub fn angular(&self) -> Angle {
        Angle::from_degrees(self.angular_degrees)
    }

    /// Returns a copy with the given line thickness.
    #[inline]
    pub fn with_line_thickness(mut self, line_thickness: f32) -> Self {
        self.line_thickness = line_thickness;
        self
    }

    /// Returns a copy with the given angular tolerance.
    #[inline]
    pub fn with_angular(mut self, angular: Angle) -> Self {
        self.angular_degrees = angular.degrees();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance_matches_constants() {
        let tol = Tolerance::default();
        assert_eq!(tol.line_thickness, DEFAULT_LINE_THICKNESS);
        assert_eq!(tol.plane_thickness, DEFAULT_PLANE_THICKNESS);
        assert!((tol.angular().degrees() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let tol: Tolerance = serde_json::from_str(r#"{"line_thickness": 0.5}"#).unwrap();
        assert_eq!(tol.line_thickness, 0.5);
        assert_eq!(tol.plane_thickness, DEFAULT_PLANE_THICKNESS);
        assert_eq!(tol.angular_degrees, DEFAULT_ANGULAR_TOLERANCE_DEGREES);
    }

    #[test]
    fn test_builders() {
        let tol = Tolerance::default()
            .with_line_thickness(2.0)
            .with_angular(Angle::from_degrees(5.0));
        assert_eq!(tol.line_thickness, 2.0);
        assert!((tol.angular_degrees - 5.0).abs() < 1e-4);
    }
}
