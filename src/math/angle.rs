//! Scalar angle.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::Direction;

/// An angle, stored in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle::from_radians(0.0);
    pub const QUARTER_CIRCLE: Angle = Angle::from_radians(FRAC_PI_2);
    pub const HALF_CIRCLE: Angle = Angle::from_radians(PI);
    pub const FULL_CIRCLE: Angle = Angle::from_radians(TAU);

    #[inline]
    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self { radians: degrees.to_radians() }
    }

    /// Angle between two directions; zero when either is `None`.
    #[inline]
    pub fn between(a: &Direction, b: &Direction) -> Self {
        a.angle_to(b)
    }

    #[inline]
    pub const fn radians(&self) -> f32 {
        self.radians
    }

    #[inline]
    pub fn degrees(&self) -> f32 {
        self.radians.to_degrees()
    }

    #[inline]
    pub fn sin(&self) -> f32 {
        self.radians.sin()
    }

    #[inline]
    pub fn cos(&self) -> f32 {
        self.radians.cos()
    }

    #[inline]
    pub fn abs(&self) -> Angle {
        Angle::from_radians(self.radians.abs())
    }

    /// Wraps into [0, 2pi).
    #[inline]
    pub fn normalized(&self) -> Angle {
        Angle::from_radians(self.radians.rem_euclid(TAU))
    }

    /// True if the two angles differ by at most `tolerance`.
    #[inline]
    pub fn equals_within(&self, other: &Angle, tolerance: Angle) -> bool {
        (self.radians - other.radians).abs() <= tolerance.radians.abs()
    }

    /// True if the two angles differ by at most `epsilon` radians.
    #[inline]
    pub fn approx_eq(&self, other: &Angle, epsilon: f32) -> bool {
        (self.radians - other.radians).abs() <= epsilon
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, factor: f32) -> Angle {
        Angle::from_radians(self.radians * factor)
    }
}

impl Div<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, divisor: f32) -> Angle {
        Angle::from_radians(self.radians / divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversions() {
        let a = Angle::from_degrees(180.0);
        assert!((a.radians() - PI).abs() < 1e-6);
        assert!((Angle::QUARTER_CIRCLE.degrees() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_normalized() {
        let a = Angle::from_degrees(-90.0).normalized();
        assert!((a.degrees() - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_angle_ordering_and_arithmetic() {
        assert!(Angle::QUARTER_CIRCLE < Angle::HALF_CIRCLE);
        let sum = Angle::QUARTER_CIRCLE + Angle::QUARTER_CIRCLE;
        assert!(sum.equals_within(&Angle::HALF_CIRCLE, Angle::from_degrees(0.001)));
    }
}
