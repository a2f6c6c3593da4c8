//! Uniform sampling between two values of the same type.
//!
//! Sampling is component-wise over the half-open box `[min, max)`.
//! Bounds given in reverse order are swapped per component, and equal
//! bounds return the bound itself.

use rand::Rng;

use crate::geom::{BoundedRay, Line, LineLike, OriginSphere, Plane, Ray, Sphere};
use crate::math::{Angle, Direction, Location, Vect, Xyz};

pub trait BoundedRandom: Sized {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self;
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn scalar_between(a: f32, b: f32, rng: &mut impl Rng) -> f32 {
    if a == b {
        return a;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let t: f32 = rng.random();
    // Rounding in lerp can land exactly on `hi`.
    let value = lerp(lo, hi, t);
    if value < hi { value } else { lo }
}

fn xyz_between(min: Xyz, max: Xyz, rng: &mut impl Rng) -> Xyz {
    Xyz::new(
        scalar_between(min.x(), max.x(), rng),
        scalar_between(min.y(), max.y(), rng),
        scalar_between(min.z(), max.z(), rng),
    )
}

impl BoundedRandom for f32 {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        scalar_between(*min, *max, rng)
    }
}

impl BoundedRandom for Location {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        Location::from_xyz(xyz_between(min.xyz(), max.xyz(), rng))
    }
}

impl BoundedRandom for Vect {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        Vect::from_xyz(xyz_between(min.xyz(), max.xyz(), rng))
    }
}

/// Samples raw components then normalizes. A sample that cannot be
/// normalized falls back to `min`.
impl BoundedRandom for Direction {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        match Direction::from_xyz(xyz_between(min.xyz(), max.xyz(), rng)) {
            Direction::None => *min,
            d => d,
        }
    }
}

impl BoundedRandom for Angle {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        Angle::from_radians(scalar_between(min.radians(), max.radians(), rng))
    }
}

impl BoundedRandom for Line {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        Line::new(
            Location::random_between(&min.point_on_line(), &max.point_on_line(), rng),
            Direction::random_between(&min.direction(), &max.direction(), rng),
        )
    }
}

impl BoundedRandom for Ray {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        Ray::new(
            Location::random_between(&min.start_point(), &max.start_point(), rng),
            Direction::random_between(&min.direction(), &max.direction(), rng),
        )
    }
}

impl BoundedRandom for BoundedRay {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        BoundedRay::new(
            Location::random_between(&min.start_point(), &max.start_point(), rng),
            Location::random_between(&min.end_point(), &max.end_point(), rng),
        )
    }
}

impl BoundedRandom for Plane {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        let normal = Direction::random_between(&min.normal(), &max.normal(), rng)
            .unit()
            .unwrap_or(min.unit_normal());
        let distance = scalar_between(min.distance_from_origin(), max.distance_from_origin(), rng);
        Plane::from_unit_normal(normal, distance)
    }
}

impl BoundedRandom for Sphere {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        Sphere::new(
            Location::random_between(&min.center(), &max.center(), rng),
            scalar_between(min.radius(), max.radius(), rng),
        )
    }
}

impl BoundedRandom for OriginSphere {
    fn random_between(min: &Self, max: &Self, rng: &mut impl Rng) -> Self {
        OriginSphere::new(scalar_between(min.radius(), max.radius(), rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_location_within_box() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = Location::new(-1.0, 0.0, 10.0);
        let max = Location::new(1.0, 5.0, 20.0);
        for _ in 0..200 {
            let p = Location::random_between(&min, &max, &mut rng);
            assert!(p.x() >= -1.0 && p.x() < 1.0);
            assert!(p.y() >= 0.0 && p.y() < 5.0);
            assert!(p.z() >= 10.0 && p.z() < 20.0);
        }
    }

    #[test]
    fn test_equal_and_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Angle::from_degrees(30.0);
        assert_eq!(Angle::random_between(&a, &a, &mut rng), a);
        for _ in 0..50 {
            let r = f32::random_between(&5.0, &-5.0, &mut rng);
            assert!((-5.0..5.0).contains(&r));
        }
    }

    #[test]
    fn test_direction_is_normalized() {
        let mut rng = StdRng::seed_from_u64(3);
        let min = Direction::new(-1.0, -1.0, -1.0);
        let max = Direction::new(1.0, 1.0, 1.0);
        for _ in 0..100 {
            let d = Direction::random_between(&min, &max, &mut rng);
            assert!((d.xyz().modulus() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_radius_never_negative() {
        let mut rng = StdRng::seed_from_u64(11);
        let min = Sphere::new(Location::ORIGIN, 0.0);
        let max = Sphere::new(Location::new(1.0, 1.0, 1.0), 2.0);
        for _ in 0..50 {
            let s = Sphere::random_between(&min, &max, &mut rng);
            assert!(s.radius() >= 0.0 && s.radius() < 2.0);
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let min = BoundedRay::new(Location::ORIGIN, Location::ORIGIN);
        let max = BoundedRay::new(Location::new(1.0, 1.0, 1.0), Location::new(2.0, 2.0, 2.0));
        let a = BoundedRay::random_between(&min, &max, &mut StdRng::seed_from_u64(42));
        let b = BoundedRay::random_between(&min, &max, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
