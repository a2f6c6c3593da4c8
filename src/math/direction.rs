//! Unit direction vector with an explicit "no direction" member.

use std::ops::{Mul, Neg};

use serde::{Deserialize, Serialize};

use super::{Angle, Rotation, Vect, Xyz};
use crate::precision;
use crate::GeomError;

/// A triplet of modulus 1. Only obtainable through normalization, so the
/// invariant holds for every value of this type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Xyz", into = "Xyz")]
pub struct UnitXyz(Xyz);

impl UnitXyz {
    pub const X: UnitXyz = UnitXyz(Xyz::new(1.0, 0.0, 0.0));
    pub const Y: UnitXyz = UnitXyz(Xyz::new(0.0, 1.0, 0.0));
    pub const Z: UnitXyz = UnitXyz(Xyz::new(0.0, 0.0, 1.0));

    /// Normalizes `xyz`. Returns None for zero or non-finite input.
    /// Input that is already unit length within rounding is kept as is.
    #[inline]
    pub fn new(xyz: Xyz) -> Option<Self> {
        if (xyz.square_modulus() - 1.0).abs() <= 4.0 * f32::EPSILON {
            return Some(UnitXyz(xyz));
        }
        xyz.normalized().map(UnitXyz)
    }

    #[inline]
    pub const fn xyz(&self) -> Xyz {
        self.0
    }

    #[inline]
    pub fn dot(&self, other: &UnitXyz) -> f32 {
        self.0.dot(&other.0)
    }

    #[inline]
    pub fn dot_xyz(&self, other: &Xyz) -> f32 {
        self.0.dot(other)
    }

    #[inline]
    pub fn reversed(&self) -> UnitXyz {
        UnitXyz(-self.0)
    }
}

impl TryFrom<Xyz> for UnitXyz {
    type Error = GeomError;

    fn try_from(xyz: Xyz) -> Result<Self, Self::Error> {
        UnitXyz::new(xyz)
            .ok_or_else(|| GeomError::DegenerateGeometry(format!("cannot normalize {:?}", xyz)))
    }
}

impl From<UnitXyz> for Xyz {
    #[inline]
    fn from(u: UnitXyz) -> Self {
        u.0
    }
}

/// A direction in 3D space, or `None` where no direction is defined (for
/// example the direction of a zero-length segment).
///
/// Every predicate comparing `None` with anything returns false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Xyz", into = "Xyz")]
pub enum Direction {
    #[default]
    None,
    Unit(UnitXyz),
}

impl Direction {
    const fn axis(x: f32, y: f32, z: f32) -> Self {
        Direction::Unit(UnitXyz(Xyz::new(x, y, z)))
    }

    /// (0, 0, 1)
    pub const fn forward() -> Self {
        Self::axis(0.0, 0.0, 1.0)
    }

    /// (0, 0, -1)
    pub const fn backward() -> Self {
        Self::axis(0.0, 0.0, -1.0)
    }

    /// (0, 1, 0)
    pub const fn up() -> Self {
        Self::axis(0.0, 1.0, 0.0)
    }

    /// (0, -1, 0)
    pub const fn down() -> Self {
        Self::axis(0.0, -1.0, 0.0)
    }

    /// (1, 0, 0)
    pub const fn left() -> Self {
        Self::axis(1.0, 0.0, 0.0)
    }

    /// (-1, 0, 0)
    pub const fn right() -> Self {
        Self::axis(-1.0, 0.0, 0.0)
    }

    /// Creates a direction from components (normalizes).
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_xyz(Xyz::new(x, y, z))
    }

    /// Normalizes `xyz`; zero or non-finite input gives `Direction::None`.
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        match UnitXyz::new(xyz) {
            Some(u) => Direction::Unit(u),
            None => Direction::None,
        }
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Direction::None)
    }

    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// The unit triplet, if any.
    #[inline]
    pub const fn unit(&self) -> Option<UnitXyz> {
        match self {
            Direction::None => None,
            Direction::Unit(u) => Some(*u),
        }
    }

    /// Components; zero for `None`.
    #[inline]
    pub const fn xyz(&self) -> Xyz {
        match self {
            Direction::None => Xyz::ZERO,
            Direction::Unit(u) => u.xyz(),
        }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.xyz().x()
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.xyz().y()
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.xyz().z()
    }

    /// Dot product; 0 when either side is `None`.
    #[inline]
    pub fn dot(&self, other: &Direction) -> f32 {
        self.xyz().dot(&other.xyz())
    }

    /// Cross product direction. `None` for parallel inputs.
    #[inline]
    pub fn cross(&self, other: &Direction) -> Direction {
        Direction::from_xyz(self.xyz().crossed(&other.xyz()))
    }

    #[inline]
    pub fn reversed(&self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Unit(u) => Direction::Unit(u.reversed()),
        }
    }

    /// Unsigned angle in [0, pi]. Zero when either side is `None`.
    #[inline]
    pub fn angle_to(&self, other: &Direction) -> Angle {
        match (self, other) {
            (Direction::Unit(a), Direction::Unit(b)) => {
                Angle::from_radians(a.dot(b).clamp(-1.0, 1.0).acos())
            }
            _ => Angle::ZERO,
        }
    }

    /// True if the two directions are parallel or antiparallel within `tolerance`.
    pub fn is_parallel_to(&self, other: &Direction, tolerance: Angle) -> bool {
        match (self, other) {
            (Direction::Unit(a), Direction::Unit(b)) => {
                a.dot(b).abs() >= tolerance.radians().cos()
            }
            _ => false,
        }
    }

    /// True if the two directions are perpendicular within `tolerance`.
    pub fn is_orthogonal_to(&self, other: &Direction, tolerance: Angle) -> bool {
        match (self, other) {
            (Direction::Unit(a), Direction::Unit(b)) => {
                a.dot(b).abs() <= tolerance.radians().sin()
            }
            _ => false,
        }
    }

    /// Removes the component along `other`. None when nothing is left or
    /// either side is `None`.
    pub fn orthogonalized_against(&self, other: &Direction) -> Option<Direction> {
        let (a, b) = (self.unit()?, other.unit()?);
        let residual = a.xyz() - b.xyz() * a.dot(&b);
        if residual.square_modulus() < precision::DECOMPOSITION_EPSILON_SQUARED {
            log::trace!("orthogonalization left no residual");
            return None;
        }
        Some(Direction::from_xyz(residual))
    }

    /// `other` or its reverse, whichever is closer to this direction. None
    /// when the two are orthogonal or either side is `None`.
    pub fn parallelized_with(&self, other: &Direction) -> Option<Direction> {
        let (a, b) = (self.unit()?, other.unit()?);
        let dot = a.dot(&b);
        if dot * dot < precision::DECOMPOSITION_EPSILON_SQUARED {
            log::trace!("parallelization of orthogonal directions");
            return None;
        }
        Some(if dot > 0.0 { *other } else { other.reversed() })
    }

    /// Some direction perpendicular to this one; `None` stays `None`.
    pub fn any_perpendicular(&self) -> Direction {
        let Some(u) = self.unit() else {
            return Direction::None;
        };
        let c = u.xyz();
        let helper = if c.x().abs() <= c.y().abs() && c.x().abs() <= c.z().abs() {
            Xyz::new(1.0, 0.0, 0.0)
        } else if c.y().abs() <= c.z().abs() {
            Xyz::new(0.0, 1.0, 0.0)
        } else {
            Xyz::new(0.0, 0.0, 1.0)
        };
        Direction::from_xyz(c.crossed(&helper))
    }

    #[inline]
    pub fn rotated_by(&self, rotation: &Rotation) -> Direction {
        rotation.rotate_direction(*self)
    }

    /// A vect of `length` along this direction.
    #[inline]
    pub fn to_vect(&self, length: f32) -> Vect {
        Vect::from_direction_and_length(*self, length)
    }

    /// Component-wise comparison within `epsilon`. `None` only equals `None`.
    #[inline]
    pub fn approx_eq(&self, other: &Direction, epsilon: f32) -> bool {
        match (self, other) {
            (Direction::None, Direction::None) => true,
            (Direction::Unit(a), Direction::Unit(b)) => a.xyz().is_equal(&b.xyz(), epsilon),
            _ => false,
        }
    }
}

impl From<Xyz> for Direction {
    #[inline]
    fn from(xyz: Xyz) -> Self {
        Direction::from_xyz(xyz)
    }
}

impl From<Direction> for Xyz {
    #[inline]
    fn from(d: Direction) -> Self {
        d.xyz()
    }
}

impl From<UnitXyz> for Direction {
    #[inline]
    fn from(u: UnitXyz) -> Self {
        Direction::Unit(u)
    }
}

impl Neg for Direction {
    type Output = Direction;
    #[inline]
    fn neg(self) -> Direction {
        self.reversed()
    }
}

impl Mul<f32> for Direction {
    type Output = Vect;
    #[inline]
    fn mul(self, length: f32) -> Vect {
        self.to_vect(length)
    }
}
