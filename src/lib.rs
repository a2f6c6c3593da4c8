//! geokern: closest-point, intersection and reflection kernel
//!
//! Lines, rays, segments, planes and spheres built on a small set of
//! value-type primitives. Every operation is pure; nothing mutates.

pub mod precision;
pub mod math;
pub mod geom;
pub mod fast;
pub mod io;
pub mod random;

// Re-exports for convenience
pub use math::{Angle, Direction, Location, Rotation, UnitXyz, Vect, Xyz};
pub use geom::{
    Bound, BoundedRay, Line, LineLike, OriginSphere, Parameterization, Pivot, Plane,
    PlaneObjectRelationship, Ray, Sphere, SphereIntersection,
};
pub use io::ByteLayout;
pub use precision::Tolerance;
pub use random::BoundedRandom;

/// Result type for geokern operations
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Buffer too short: needed {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },
}
