//! Rotation in 3D space, backed by a nalgebra unit quaternion.

use std::ops::Mul;

use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::{Angle, Direction, Vect, Xyz};

/// A rotation by an angle around an axis (right-hand rule).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    quat: UnitQuaternion<f32>,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::none()
    }
}

impl Rotation {
    /// The identity rotation.
    #[inline]
    pub fn none() -> Self {
        Self { quat: UnitQuaternion::identity() }
    }

    /// Rotation of `angle` around `axis`. Identity when `axis` is `None`.
    pub fn from_angle_around_axis(angle: Angle, axis: Direction) -> Self {
        match axis.unit() {
            Some(u) => {
                let axis = Unit::new_unchecked(Vector3::from(u.xyz()));
                Self { quat: UnitQuaternion::from_axis_angle(&axis, angle.radians()) }
            }
            None => Self::none(),
        }
    }

    /// The shortest rotation turning `start` onto `end`. Antiparallel inputs
    /// rotate half a circle around an arbitrary perpendicular axis; `None` on
    /// either side gives the identity.
    pub fn from_start_and_end_direction(start: Direction, end: Direction) -> Self {
        let (Some(a), Some(b)) = (start.unit(), end.unit()) else {
            return Self::none();
        };
        let va: Vector3<f32> = a.xyz().into();
        let vb: Vector3<f32> = b.xyz().into();
        match UnitQuaternion::rotation_between(&va, &vb) {
            Some(quat) => Self { quat },
            None => {
                log::trace!("antiparallel rotation request, using half circle");
                Self::from_angle_around_axis(Angle::HALF_CIRCLE, start.any_perpendicular())
            }
        }
    }

    /// Builds from raw quaternion components (normalizes).
    pub fn from_quaternion_components(i: f32, j: f32, k: f32, w: f32) -> Self {
        Self { quat: UnitQuaternion::new_normalize(Quaternion::new(w, i, j, k)) }
    }

    /// Quaternion components in (i, j, k, w) order.
    #[inline]
    pub fn quaternion_components(&self) -> [f32; 4] {
        let q = self.quat.quaternion();
        [q.i, q.j, q.k, q.w]
    }

    /// Underlying nalgebra quaternion.
    #[inline]
    pub fn as_unit_quaternion(&self) -> &UnitQuaternion<f32> {
        &self.quat
    }

    /// Rotation angle in [0, pi].
    #[inline]
    pub fn angle(&self) -> Angle {
        Angle::from_radians(self.quat.angle())
    }

    /// Rotation axis; `None` for the identity.
    #[inline]
    pub fn axis(&self) -> Direction {
        match self.quat.axis() {
            Some(axis) => Direction::from_xyz(Xyz::from(axis.into_inner())),
            None => Direction::None,
        }
    }

    #[inline]
    pub fn inverted(&self) -> Rotation {
        Rotation { quat: self.quat.inverse() }
    }

    /// Same axis, angle multiplied by `factor`.
    #[inline]
    pub fn scaled_by(&self, factor: f32) -> Rotation {
        Rotation { quat: self.quat.powf(factor) }
    }

    /// `self` followed by `then`.
    #[inline]
    pub fn followed_by(&self, then: &Rotation) -> Rotation {
        Rotation { quat: then.quat * self.quat }
    }

    #[inline]
    pub fn rotate_vect(&self, v: Vect) -> Vect {
        let rotated = self.quat * Vector3::from(v.xyz());
        Vect::from(rotated)
    }

    /// Rotates and renormalizes. `None` stays `None`.
    #[inline]
    pub fn rotate_direction(&self, d: Direction) -> Direction {
        match d {
            Direction::None => Direction::None,
            Direction::Unit(u) => Direction::from_xyz(Xyz::from(self.quat * Vector3::from(u.xyz()))),
        }
    }

    /// True if the rotation taking `self` to `other` is at most `tolerance`.
    #[inline]
    pub fn equals_within(&self, other: &Rotation, tolerance: Angle) -> bool {
        self.quat.angle_to(&other.quat) <= tolerance.radians()
    }

    /// True if every quaternion component differs by at most `epsilon`,
    /// treating q and -q as the same rotation.
    pub fn approx_eq(&self, other: &Rotation, epsilon: f32) -> bool {
        let a = self.quaternion_components();
        let b = other.quaternion_components();
        let same = a.iter().zip(&b).all(|(x, y)| (x - y).abs() <= epsilon);
        let flipped = a.iter().zip(&b).all(|(x, y)| (x + y).abs() <= epsilon);
        same || flipped
    }
}

impl Mul for Rotation {
    type Output = Rotation;
    /// Composition: `a * b` applies `b` first, then `a`.
    #[inline]
    fn mul(self, rhs: Rotation) -> Rotation {
        Rotation { quat: self.quat * rhs.quat }
    }
}

impl From<UnitQuaternion<f32>> for Rotation {
    #[inline]
    fn from(quat: UnitQuaternion<f32>) -> Self {
        Rotation { quat }
    }
}
