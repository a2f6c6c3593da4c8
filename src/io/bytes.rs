//! Fixed-size little-endian layout.
//!
//! A value is written as its `f32` components in declaration order, four
//! bytes each. Readers validate the buffer length and any invariant the
//! type carries (a plane normal must be normalizable).

use crate::geom::{BoundedRay, Line, LineLike, OriginSphere, Plane, Ray, Sphere};
use crate::math::{Angle, Direction, Location, Rotation, UnitXyz, Vect, Xyz};
use crate::{GeomError, Result};

const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

pub trait ByteLayout: Sized {
    /// Number of `f32` components in the layout.
    const FLOAT_COUNT: usize;

    /// Size of the layout in bytes.
    const SERIALIZED_LEN: usize = Self::FLOAT_COUNT * FLOAT_SIZE;

    fn write_floats(&self, out: &mut Vec<f32>);

    /// Rebuilds the value from exactly `FLOAT_COUNT` components.
    fn from_floats(floats: &[f32]) -> Result<Self>;

    /// Writes the layout into the front of `dest`.
    fn write_le_bytes(&self, dest: &mut [u8]) -> Result<()> {
        if dest.len() < Self::SERIALIZED_LEN {
            return Err(GeomError::BufferTooShort { needed: Self::SERIALIZED_LEN, actual: dest.len() });
        }
        let mut floats = Vec::with_capacity(Self::FLOAT_COUNT);
        self.write_floats(&mut floats);
        for (chunk, value) in dest.chunks_exact_mut(FLOAT_SIZE).zip(floats) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        Ok(())
    }

    /// Reads a value from the front of `src`.
    fn read_le_bytes(src: &[u8]) -> Result<Self> {
        if src.len() < Self::SERIALIZED_LEN {
            return Err(GeomError::BufferTooShort { needed: Self::SERIALIZED_LEN, actual: src.len() });
        }
        let floats: Vec<f32> = src[..Self::SERIALIZED_LEN]
            .chunks_exact(FLOAT_SIZE)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Self::from_floats(&floats)
    }

    fn to_le_bytes_vec(&self) -> Vec<u8> {
        let mut floats = Vec::with_capacity(Self::FLOAT_COUNT);
        self.write_floats(&mut floats);
        floats.iter().flat_map(|f| f.to_le_bytes()).collect()
    }
}

fn xyz_at(floats: &[f32], offset: usize) -> Xyz {
    Xyz::new(floats[offset], floats[offset + 1], floats[offset + 2])
}

fn push_xyz(out: &mut Vec<f32>, xyz: Xyz) {
    out.extend_from_slice(&xyz.to_array());
}

fn check_len(floats: &[f32], expected: usize) -> Result<()> {
    if floats.len() != expected {
        return Err(GeomError::Parse(format!("expected {} components, got {}", expected, floats.len())));
    }
    Ok(())
}

impl ByteLayout for Location {
    const FLOAT_COUNT: usize = 3;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.xyz());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Location::from_xyz(xyz_at(floats, 0)))
    }
}

impl ByteLayout for Vect {
    const FLOAT_COUNT: usize = 3;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.xyz());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Vect::from_xyz(xyz_at(floats, 0)))
    }
}

/// `Direction::None` is stored as three zeros.
impl ByteLayout for Direction {
    const FLOAT_COUNT: usize = 3;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.xyz());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Direction::from_xyz(xyz_at(floats, 0)))
    }
}

impl ByteLayout for Angle {
    const FLOAT_COUNT: usize = 1;

    fn write_floats(&self, out: &mut Vec<f32>) {
        out.push(self.radians());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Angle::from_radians(floats[0]))
    }
}

/// Quaternion components in `i, j, k, w` order.
impl ByteLayout for Rotation {
    const FLOAT_COUNT: usize = 4;

    fn write_floats(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.quaternion_components());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Rotation::from_quaternion_components(floats[0], floats[1], floats[2], floats[3]))
    }
}

impl ByteLayout for Line {
    const FLOAT_COUNT: usize = 6;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.point_on_line().xyz());
        push_xyz(out, self.direction().xyz());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Line::new(Location::from_xyz(xyz_at(floats, 0)), Direction::from_xyz(xyz_at(floats, 3))))
    }
}

impl ByteLayout for Ray {
    const FLOAT_COUNT: usize = 6;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.start_point().xyz());
        push_xyz(out, self.direction().xyz());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Ray::new(Location::from_xyz(xyz_at(floats, 0)), Direction::from_xyz(xyz_at(floats, 3))))
    }
}

impl ByteLayout for BoundedRay {
    const FLOAT_COUNT: usize = 6;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.start_point().xyz());
        push_xyz(out, self.end_point().xyz());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(BoundedRay::new(Location::from_xyz(xyz_at(floats, 0)), Location::from_xyz(xyz_at(floats, 3))))
    }
}

impl ByteLayout for Plane {
    const FLOAT_COUNT: usize = 4;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.unit_normal().xyz());
        out.push(self.distance_from_origin());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        let normal = UnitXyz::try_from(xyz_at(floats, 0))?;
        Ok(Plane::from_unit_normal(normal, floats[3]))
    }
}

impl ByteLayout for Sphere {
    const FLOAT_COUNT: usize = 4;

    fn write_floats(&self, out: &mut Vec<f32>) {
        push_xyz(out, self.center().xyz());
        out.push(self.radius());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(Sphere::new(Location::from_xyz(xyz_at(floats, 0)), floats[3]))
    }
}

impl ByteLayout for OriginSphere {
    const FLOAT_COUNT: usize = 1;

    fn write_floats(&self, out: &mut Vec<f32>) {
        out.push(self.radius());
    }

    fn from_floats(floats: &[f32]) -> Result<Self> {
        check_len(floats, Self::FLOAT_COUNT)?;
        Ok(OriginSphere::new(floats[0]))
    }
}
