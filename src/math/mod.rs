//! Scalar and vector primitives.
//!
//! Everything above this layer is expressed in these types.

mod xyz;
mod location;
mod vect;
mod direction;
mod angle;
mod rotation;

pub use xyz::Xyz;
pub use location::Location;
pub use vect::Vect;
pub use direction::{Direction, UnitXyz};
pub use angle::Angle;
pub use rotation::Rotation;
