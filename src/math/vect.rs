//! Displacement vector.

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::{Direction, Rotation, Xyz};

/// A displacement in 3D space. Unlike [`Direction`] it has a magnitude, and
/// the zero vect is a valid "no displacement" value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vect {
    coord: Xyz,
}

impl Vect {
    /// No displacement.
    pub const ZERO: Vect = Vect::new(0.0, 0.0, 0.0);

    /// Creates a vect from components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { coord: Xyz::new(x, y, z) }
    }

    /// Creates a vect from a coordinate triplet.
    #[inline]
    pub const fn from_xyz(coord: Xyz) -> Self {
        Self { coord }
    }

    /// A vect of the given length along `direction`. Zero for `Direction::None`.
    #[inline]
    pub fn from_direction_and_length(direction: Direction, length: f32) -> Self {
        Self::from_xyz(direction.xyz() * length)
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.coord.x()
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.coord.y()
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.coord.z()
    }

    /// Returns the coordinate triplet.
    #[inline]
    pub const fn xyz(&self) -> Xyz {
        self.coord
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.coord.modulus()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.coord.square_modulus()
    }

    /// True if this is exactly the zero vect.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coord == Xyz::ZERO
    }

    /// Direction of this vect, `Direction::None` for zero.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_xyz(self.coord)
    }

    /// Same direction, new length. The zero vect stays zero.
    #[inline]
    pub fn with_length(&self, length: f32) -> Vect {
        Vect::from_direction_and_length(self.direction(), length)
    }

    /// Shortens this vect to `max_length` if it is longer.
    #[inline]
    pub fn with_max_length(&self, max_length: f32) -> Vect {
        if self.length_squared() > max_length * max_length {
            self.with_length(max_length)
        } else {
            *self
        }
    }

    #[inline]
    pub fn scaled_by(&self, factor: f32) -> Vect {
        *self * factor
    }

    #[inline]
    pub fn reversed(&self) -> Vect {
        -*self
    }

    #[inline]
    pub fn dot(&self, other: &Vect) -> f32 {
        self.coord.dot(&other.coord)
    }

    /// Dot with a direction: the signed length of this vect along it.
    #[inline]
    pub fn dot_direction(&self, direction: Direction) -> f32 {
        self.coord.dot(&direction.xyz())
    }

    #[inline]
    pub fn cross(&self, other: &Vect) -> Vect {
        Vect::from_xyz(self.coord.crossed(&other.coord))
    }

    /// Component of this vect along `direction`.
    #[inline]
    pub fn projected_on_to(&self, direction: Direction) -> Vect {
        Vect::from_direction_and_length(direction, self.dot_direction(direction))
    }

    /// This vect with its component along `direction` removed.
    #[inline]
    pub fn orthogonalized_against(&self, direction: Direction) -> Vect {
        *self - self.projected_on_to(direction)
    }

    #[inline]
    pub fn rotated_by(&self, rotation: &Rotation) -> Vect {
        rotation.rotate_vect(*self)
    }

    /// True if every component differs from `other` by at most `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: &Vect, epsilon: f32) -> bool {
        self.coord.is_equal(&other.coord, epsilon)
    }
}

impl Add for Vect {
    type Output = Vect;
    #[inline]
    fn add(self, rhs: Vect) -> Vect {
        Vect::from_xyz(self.coord + rhs.coord)
    }
}

impl Sub for Vect {
    type Output = Vect;
    #[inline]
    fn sub(self, rhs: Vect) -> Vect {
        Vect::from_xyz(self.coord - rhs.coord)
    }
}

impl Mul<f32> for Vect {
    type Output = Vect;
    #[inline]
    fn mul(self, scalar: f32) -> Vect {
        Vect::from_xyz(self.coord * scalar)
    }
}

impl Div<f32> for Vect {
    type Output = Vect;
    #[inline]
    fn div(self, scalar: f32) -> Vect {
        Vect::from_xyz(self.coord / scalar)
    }
}

impl Neg for Vect {
    type Output = Vect;
    #[inline]
    fn neg(self) -> Vect {
        Vect::from_xyz(-self.coord)
    }
}

impl From<nalgebra::Vector3<f32>> for Vect {
    #[inline]
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vect::from_xyz(v.into())
    }
}

impl From<Vect> for nalgebra::Vector3<f32> {
    #[inline]
    fn from(v: Vect) -> Self {
        v.coord.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vect_length() {
        let v = Vect::new(0.0, 3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn test_vect_zero_direction_is_none() {
        assert!(Vect::ZERO.direction().is_none());
        assert_eq!(Vect::ZERO.with_length(10.0), Vect::ZERO);
    }

    #[test]
    fn test_vect_with_max_length() {
        let v = Vect::new(10.0, 0.0, 0.0);
        assert!(v.with_max_length(2.0).approx_eq(&Vect::new(2.0, 0.0, 0.0), 1e-6));
        assert_eq!(v.with_max_length(20.0), v);
    }

    #[test]
    fn test_vect_decomposition() {
        let v = Vect::new(1.0, 2.0, 3.0);
        let along = v.projected_on_to(Direction::up());
        let across = v.orthogonalized_against(Direction::up());
        assert!(along.approx_eq(&Vect::new(0.0, 2.0, 0.0), 1e-6));
        assert!(across.approx_eq(&Vect::new(1.0, 0.0, 3.0), 1e-6));
        assert!((along + across).approx_eq(&v, 1e-6));
    }

    #[test]
    fn test_vect_cross() {
        let x = Vect::new(1.0, 0.0, 0.0);
        let y = Vect::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vect::new(0.0, 0.0, 1.0));
    }
}
