//! Text and binary encodings.
//!
//! Every value type has a `Display`/`FromStr` pair and a fixed-size
//! little-endian byte layout of its `f32` components.

mod bytes;
mod text;

pub use bytes::ByteLayout;
