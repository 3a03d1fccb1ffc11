//! Core layer - enumerated constants, versions and kinematics.
//!
//! This module provides:
//! - Enumerated constants ([`BlockId`], [`Shape`], [`BlockPattern`], [`Sky`], ...)
//! - [`GameVersion`] - Target game version
//! - [`PositionKinematics`] / [`RotationKinematics`] - Programmed motion

mod enums;
mod version;
mod kinematics;

pub use enums::{BlockId, BlockPattern, DecalType, GratesStyle, Music, Shape, Sky, Sound, Weather};
pub use version::GameVersion;
pub use kinematics::{PositionKinematics, PositionTiming, RotationKinematics};
