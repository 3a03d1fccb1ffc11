//! # bopjson
//!
//! Build Bopimo levels in Rust and write them as `.bopjson` documents the
//! game can import.
//!
//! Levels are assembled from strongly typed blocks. Every bounded field
//! (8-bit colors and opacities, 32-bit codes, integer arrays) is checked
//! on assignment and rejected when out of range, so a level that could be
//! built can always be written.
//!
//! ## Modules
//!
//! - [`util`] - Value types (vectors, colors, bounded arrays) and errors
//! - [`core`] - Enumerated codes, game versions, kinematics
//! - [`block`] - Block kinds and name-addressed attributes
//! - [`level`] - The level container and UID minting
//! - [`writer`] - Document building and file export
//!
//! ## Example
//!
//! ```ignore
//! use bopjson::prelude::*;
//!
//! let mut level = Level::new("Bopimo Template", "A simple starting point");
//! level.settings.death_plane = -100.0;
//!
//! let plate = Primitive::shaped(Shape::Cylinder)
//!     .with_name("Baseplate")
//!     .with_position((0.0, -6.0, 0.0))
//!     .with_scale((250.0, 6.0, 250.0));
//! level.add_object(plate)?;
//! level.export("template")?; // writes template.bopjson
//! ```

pub mod util;
pub mod core;
pub mod block;
pub mod level;
pub mod writer;

// Re-export commonly used types
pub use util::{Error, Result};
pub use block::Block;
pub use level::Level;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{
        Color, ColorArray, Error, Float32Array, Int32Array, Int64Array, Result, Vector2I8,
        Vector3, Vector3Array,
    };
    pub use crate::core::{
        BlockId, BlockPattern, DecalType, GameVersion, GratesStyle, Music, PositionKinematics,
        PositionTiming, RotationKinematics, Shape, Sky, Sound, Weather,
    };
    pub use crate::block::*;
    pub use crate::level::{Level, LevelSettings, Uid};
    pub use crate::writer::ExportOptions;
}
