//! Human-readable text form.
//!
//! Vectors render as `<x, y, z>`; composite values as
//! `TypeName[Field value | Field value]`. Numbers use Rust's shortest
//! round-trip float formatting, which is locale independent, so every
//! value parses back to an equal one.

use std::fmt;
use std::str::FromStr;

use crate::geom::{BoundedRay, Line, LineLike, OriginSphere, Plane, Ray, Sphere};
use crate::math::{Angle, Direction, Location, Rotation, UnitXyz, Vect, Xyz};
use crate::{GeomError, Result};

const FIELD_SEPARATOR: &str = " | ";
const DEGREE_SIGN: char = '°';

fn parse_error(what: &str, input: &str) -> GeomError {
    GeomError::Parse(format!("invalid {}: {:?}", what, input))
}

fn parse_scalar(input: &str) -> Result<f32> {
    input.trim().parse::<f32>().map_err(|_| parse_error("number", input))
}

fn parse_xyz(input: &str) -> Result<Xyz> {
    let inner = input
        .trim()
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| parse_error("vector", input))?;
    let mut parts = inner.split(',');
    let mut next = || parts.next().ok_or_else(|| parse_error("vector", input)).and_then(parse_scalar);
    let xyz = Xyz::new(next()?, next()?, next()?);
    if parts.next().is_some() {
        return Err(parse_error("vector", input));
    }
    Ok(xyz)
}

/// Splits `TypeName[K1 v1 | K2 v2]` into its values, checking the type
/// name and field names.
fn parse_fields<'a, const N: usize>(input: &'a str, type_name: &str, keys: [&str; N]) -> Result<[&'a str; N]> {
    let body = input
        .trim()
        .strip_prefix(type_name)
        .and_then(|s| s.strip_prefix('['))
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| parse_error(type_name, input))?;
    let mut values = [""; N];
    let mut parts = body.split(FIELD_SEPARATOR);
    for (slot, key) in values.iter_mut().zip(keys) {
        let part = parts.next().ok_or_else(|| parse_error(type_name, input))?;
        let (found, value) = part.split_once(' ').ok_or_else(|| parse_error(type_name, input))?;
        if found != key {
            return Err(GeomError::Parse(format!("{}: expected field {}, found {}", type_name, key, found)));
        }
        *slot = value;
    }
    if parts.next().is_some() {
        return Err(parse_error(type_name, input));
    }
    Ok(values)
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x(), self.y(), self.z())
    }
}

impl FromStr for Xyz {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        parse_xyz(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.xyz(), f)
    }
}

impl FromStr for Location {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        parse_xyz(s).map(Location::from_xyz)
    }
}

impl fmt::Display for Vect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.xyz(), f)
    }
}

impl FromStr for Vect {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        parse_xyz(s).map(Vect::from_xyz)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.xyz(), f)
    }
}

impl FromStr for Direction {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        parse_xyz(s).map(Direction::from_xyz)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degrees(), DEGREE_SIGN)
    }
}

impl FromStr for Angle {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let degrees = s.trim().strip_suffix(DEGREE_SIGN).ok_or_else(|| parse_error("angle", s))?;
        parse_scalar(degrees).map(Angle::from_degrees)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation[Angle {}{}Axis {}]", self.angle(), FIELD_SEPARATOR, self.axis())
    }
}

impl FromStr for Rotation {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let [angle, axis] = parse_fields(s, "Rotation", ["Angle", "Axis"])?;
        Ok(Rotation::from_angle_around_axis(angle.parse()?, axis.parse()?))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line[PointOnLine {}{}Direction {}]", self.point_on_line(), FIELD_SEPARATOR, self.direction())
    }
}

impl FromStr for Line {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let [point, direction] = parse_fields(s, "Line", ["PointOnLine", "Direction"])?;
        Ok(Line::new(point.parse()?, direction.parse()?))
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray[StartPoint {}{}Direction {}]", self.start_point(), FIELD_SEPARATOR, self.direction())
    }
}

impl FromStr for Ray {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let [start, direction] = parse_fields(s, "Ray", ["StartPoint", "Direction"])?;
        Ok(Ray::new(start.parse()?, direction.parse()?))
    }
}

impl fmt::Display for BoundedRay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedRay[StartPoint {}{}EndPoint {}]", self.start_point(), FIELD_SEPARATOR, self.end_point())
    }
}

impl FromStr for BoundedRay {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let [start, end] = parse_fields(s, "BoundedRay", ["StartPoint", "EndPoint"])?;
        Ok(BoundedRay::new(start.parse()?, end.parse()?))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane[Normal {}{}DistanceFromOrigin {}]", self.normal(), FIELD_SEPARATOR, self.distance_from_origin())
    }
}

impl FromStr for Plane {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let [normal, distance] = parse_fields(s, "Plane", ["Normal", "DistanceFromOrigin"])?;
        let normal = UnitXyz::try_from(parse_xyz(normal)?)?;
        Ok(Plane::from_unit_normal(normal, parse_scalar(distance)?))
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sphere[Center {}{}Radius {}]", self.center(), FIELD_SEPARATOR, self.radius())
    }
}

impl FromStr for Sphere {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let [center, radius] = parse_fields(s, "Sphere", ["Center", "Radius"])?;
        Ok(Sphere::new(center.parse()?, parse_scalar(radius)?))
    }
}

impl fmt::Display for OriginSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OriginSphere[Radius {}]", self.radius())
    }
}

impl FromStr for OriginSphere {
    type Err = GeomError;
    fn from_str(s: &str) -> Result<Self> {
        let [radius] = parse_fields(s, "OriginSphere", ["Radius"])?;
        Ok(OriginSphere::new(parse_scalar(radius)?))
    }
}
