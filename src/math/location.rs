//! Point in 3D space.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::{Vect, Xyz};

/// A point in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location {
    coord: Xyz,
}

impl Location {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Location = Location::new(0.0, 0.0, 0.0);

    /// Creates a location from coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { coord: Xyz::new(x, y, z) }
    }

    /// Creates a location from a coordinate triplet.
    #[inline]
    pub const fn from_xyz(coord: Xyz) -> Self {
        Self { coord }
    }

    /// Returns the origin.
    #[inline]
    pub const fn origin() -> Self {
        Self::ORIGIN
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

    /// Displacement from the origin to this point.
    #[inline]
    pub const fn as_vect(&self) -> Vect {
        Vect::from_xyz(self.coord)
    }

    /// Displacement from this point to `other`.
    #[inline]
    pub fn vect_to(&self, other: &Location) -> Vect {
        *other - *self
    }

    /// Distance to another point.
    #[inline]
    pub fn distance_from(&self, other: &Location) -> f32 {
        (self.coord - other.coord).modulus()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared_from(&self, other: &Location) -> f32 {
        (self.coord - other.coord).square_modulus()
    }

    /// Distance from the origin.
    #[inline]
    pub fn distance_from_origin(&self) -> f32 {
        self.coord.modulus()
    }

    /// Returns a copy moved by `v`.
    #[inline]
    pub fn moved_by(&self, v: Vect) -> Location {
        *self + v
    }

    /// Point halfway between this point and `other`.
    #[inline]
    pub fn midpoint(&self, other: &Location) -> Location {
        Location::from_xyz((self.coord + other.coord) * 0.5)
    }

    /// True if every coordinate differs from `other` by at most `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: &Location, epsilon: f32) -> bool {
        self.coord.is_equal(&other.coord, epsilon)
    }
}

impl Add<Vect> for Location {
    type Output = Location;
    #[inline]
    fn add(self, v: Vect) -> Location {
        Location::from_xyz(self.coord + v.xyz())
    }
}

impl Sub<Vect> for Location {
    type Output = Location;
    #[inline]
    fn sub(self, v: Vect) -> Location {
        Location::from_xyz(self.coord - v.xyz())
    }
}

impl Sub for Location {
    type Output = Vect;
    /// Displacement from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Location) -> Vect {
        Vect::from_xyz(self.coord - rhs.coord)
    }
}

impl From<Vect> for Location {
    #[inline]
    fn from(v: Vect) -> Self {
        Location::from_xyz(v.xyz())
    }
}
