//! 3D coordinate triplet.
//!
//! Storage and raw algebra shared by Location, Vect and Direction. The
//! semantic types wrap this and only expose the operations that make
//! sense for them.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::precision;

/// Cartesian coordinate entity {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    x: f32,
    y: f32,
    z: f32,
}

impl Xyz {
    /// The zero triplet.
    pub const ZERO: Xyz = Xyz::new(0.0, 0.0, 0.0);

    /// Creates a triplet with given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// Returns all three coordinates as an array.
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Computes the modulus (length).
    #[inline]
    pub fn modulus(&self) -> f32 {
        self.square_modulus().sqrt()
    }

    /// Computes the square of the modulus.
    #[inline]
    pub fn square_modulus(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Xyz) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn crossed(&self, other: &Xyz) -> Xyz {
        Xyz::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the normalized triplet, or None when the modulus is not a
    /// finite value above [`precision::RESOLUTION`].
    #[inline]
    pub fn normalized(&self) -> Option<Xyz> {
        let m = self.modulus();
        if !m.is_finite() || m <= precision::RESOLUTION {
            return None;
        }
        Some(*self / m)
    }

    /// Returns true if all three coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise comparison: each coordinate differs by at most `tolerance`.
    #[inline]
    pub fn is_equal(&self, other: &Xyz, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Xyz {
        Xyz::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Add for Xyz {
    type Output = Xyz;
    #[inline]
    fn add(self, rhs: Xyz) -> Xyz {
        Xyz::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Xyz {
    type Output = Xyz;
    #[inline]
    fn sub(self, rhs: Xyz) -> Xyz {
        Xyz::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Xyz {
    type Output = Xyz;
    #[inline]
    fn mul(self, scalar: f32) -> Xyz {
        self.map(|c| c * scalar)
    }
}

impl Div<f32> for Xyz {
    type Output = Xyz;
    #[inline]
    fn div(self, scalar: f32) -> Xyz {
        self.map(|c| c / scalar)
    }
}

impl Neg for Xyz {
    type Output = Xyz;
    #[inline]
    fn neg(self) -> Xyz {
        self.map(|c| -c)
    }
}

impl Index<usize> for Xyz {
    type Output = f32;
    /// 0=X, 1=Y, 2=Z. Panics otherwise.
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Xyz::index: index {} out of range [0,2]", index),
        }
    }
}

impl From<[f32; 3]> for Xyz {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Xyz::new(a[0], a[1], a[2])
    }
}

impl From<nalgebra::Vector3<f32>> for Xyz {
    #[inline]
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Xyz::new(v.x, v.y, v.z)
    }
}

impl From<Xyz> for nalgebra::Vector3<f32> {
    #[inline]
    fn from(c: Xyz) -> Self {
        nalgebra::Vector3::new(c.x, c.y, c.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_modulus() {
        let xyz = Xyz::new(3.0, 4.0, 0.0);
        assert!((xyz.modulus() - 5.0).abs() < 1e-6);
        assert_eq!(xyz.square_modulus(), 25.0);
    }

    #[test]
    fn test_xyz_cross() {
        let x = Xyz::new(1.0, 0.0, 0.0);
        let y = Xyz::new(0.0, 1.0, 0.0);
        assert_eq!(x.crossed(&y), Xyz::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_xyz_normalized_zero() {
        assert!(Xyz::ZERO.normalized().is_none());
        assert!(Xyz::new(f32::NAN, 0.0, 0.0).normalized().is_none());
        assert!(Xyz::new(f32::INFINITY, 0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn test_xyz_normalized() {
        let n = Xyz::new(0.0, 0.0, 7.0).normalized().unwrap();
        assert_eq!(n, Xyz::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_xyz_nalgebra_conversion() {
        let v: nalgebra::Vector3<f32> = Xyz::new(1.0, 2.0, 3.0).into();
        assert_eq!(Xyz::from(v), Xyz::new(1.0, 2.0, 3.0));
    }
}
