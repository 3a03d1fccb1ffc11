//! Utility types shared by the whole crate.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`IntWidth`] - Fixed integer widths and range checks
//! - [`Vector3`] / [`Vector2I8`] - Vector types (glam-backed math)
//! - [`Color`] - 8-bit RGB
//! - Typed arrays ([`Int32Array`], [`Int64Array`], ...)
//! - [`Shared`] - Shared nested state for shallow copies

mod error;
mod width;
mod math;
mod color;
mod array;
mod shared;

pub use error::*;
pub use width::*;
pub use math::*;
pub use color::*;
pub use array::*;
pub use shared::*;
