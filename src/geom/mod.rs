//! Line-likes, planes and spheres, and the queries between them.
//!
//! Line, Ray and BoundedRay share one parameterization through the
//! [`LineLike`] trait; the pairwise algorithms live in the trait's provided
//! methods and in the crate-private `kernel` module.

mod line_like;
mod kernel;
mod predicates;
mod line;
mod ray;
mod bounded_ray;
mod plane;
mod sphere;

pub use line_like::{Bound, LineLike, Parameterization, Pivot};
pub use line::Line;
pub use ray::Ray;
pub use bounded_ray::BoundedRay;
pub use plane::{Plane, PlaneObjectRelationship};
pub use sphere::{OriginSphere, Sphere, SphereIntersection};

pub(crate) use kernel::{closest_parameters, fast_plane_crossing_distance};
