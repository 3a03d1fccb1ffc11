//! Primitive blocks (cubes, ramps, cylinders, ...).

use super::attr::{block_attributes, non_zero};
use super::{block_data, BlockBase, Pattern};
use crate::core::{BlockId, BlockPattern, Shape};
use crate::util::{Color, Error, Result, Vector2I8, Vector3};

/// Opacity for each legacy transparency step (0 = invisible, 8 = opaque).
pub const TRANSPARENCY_LOOKUP: [u8; 9] = [0, 31, 63, 95, 127, 159, 191, 223, 255];

/// A primitive. Every shape shares one block id; `shape` tells them apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub base: BlockBase,
    pub pattern: Pattern,
    /// [`Shape`] code.
    pub shape: i32,
    /// Pattern tile size. Written inverted (`2 / pattern_scale`).
    pub pattern_scale: f64,
    pub pattern_scroll: Vector2I8,
    pub opacity: u8,
    pub collision_enabled: bool,
    pub unshaded: bool,
}

impl Default for Primitive {
    fn default() -> Self {
        Self {
            base: BlockBase::new("Generated Block", Color::rgb(34, 139, 34), Vector3::splat(2.0)),
            pattern: Pattern::new(BlockPattern::Checkerboard, Color::BLACK),
            shape: Shape::Cube.code(),
            pattern_scale: 2.0,
            pattern_scroll: Vector2I8::ZERO,
            opacity: 255,
            collision_enabled: true,
            unshaded: false,
        }
    }
}

impl Primitive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default primitive of the given shape.
    pub fn shaped(shape: impl Into<i32>) -> Self {
        Self {
            shape: shape.into(),
            ..Self::default()
        }
    }

    /// Legacy transparency step for the current opacity, if it is one.
    pub fn transparency(&self) -> Option<u8> {
        TRANSPARENCY_LOOKUP
            .iter()
            .position(|&o| o == self.opacity)
            .map(|i| i as u8)
    }

    /// Set opacity from a legacy transparency step (0-8).
    pub fn set_transparency(&mut self, step: u8) -> Result<()> {
        let opacity = TRANSPARENCY_LOOKUP
            .get(step as usize)
            .ok_or_else(|| Error::invalid("transparency", format!("step must be 0-8 (got {})", step)))?;
        self.opacity = *opacity;
        Ok(())
    }
}

block_data!(Primitive => BlockId::Primitive, tilable);

block_attributes!(Primitive: "Primitive" tilable {
    "shape" => shape: i32,
    "pattern_scale" => pattern_scale: f64 where non_zero,
    "pattern_scroll" => pattern_scroll: Vector2I8,
    "opacity" => opacity: u8,
    "collision_enabled" => collision_enabled: bool,
    "unshaded" => unshaded: bool,
});
