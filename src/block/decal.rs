//! Flat image decals.
//!
//! The game has no decal object. A decal is an item mesh showing a
//! transparent clothing item whose texture carries the image: the mesh is
//! stretched so the textured face matches the requested width and height,
//! and pants meshes are shifted and tilted so the face lands where the
//! texture was placed.

use glam::DVec3;

use super::action::{base, impl_new};
use super::attr::block_attributes;
use super::{block_data, BlockBase};
use crate::core::{BlockId, DecalType};
use crate::util::{euler_matrix, Color, Error, Result, Vector3};

/// Mesh scale per unit of shirt texture width.
pub const SHIRT_WIDTH_RATIO: f64 = 10.0 / 8.0;
/// Mesh scale per unit of shirt texture height (16:17 texture).
pub const SHIRT_HEIGHT_RATIO: f64 = 20.0 / 17.0;
/// Mesh scale per unit of pants texture width.
pub const PANTS_WIDTH_RATIO: f64 = 10.0 / 3.0;
/// Mesh scale per unit of pants texture height (12:21 texture).
pub const PANTS_HEIGHT_RATIO: f64 = 40.0 / 21.0;
/// Roll in degrees that undoes the slant of a pants leg.
pub const PANTS_TILT_FIX: f64 = 2.0;
/// Horizontal shift, per unit of mesh width, centering a pants texture.
pub const PANTS_X_ADJUST: f64 = 41.0 / 200.0;
/// Vertical shift, per unit of mesh height, centering a pants texture.
pub const PANTS_Y_ADJUST: f64 = 25.0 / 2000.0;
/// Depth above which a decal stops looking flat.
pub const FLAT_DEPTH: f64 = 0.1;

/// An image placed on a flat item mesh.
///
/// `base.scale` holds the image size (`x` width, `y` height); the exported
/// `block_scale` is the derived mesh size.
#[derive(Clone, Debug, PartialEq)]
pub struct Decal {
    pub base: BlockBase,
    /// Clothing item carrying the image.
    pub item_id: i32,
    pub shaded: bool,
    /// [`DecalType`] code.
    pub decal_type: i32,
    /// Manual recentering of the image. Only `x` and `y` are used.
    pub offset: Vector3,
}

impl Default for Decal {
    fn default() -> Self {
        Self {
            base: base("Generated Decal", Color::WHITE, (2.0, 2.0, 0.01)),
            item_id: 3372,
            shaded: true,
            decal_type: DecalType::Shirt.code(),
            offset: Vector3::ZERO,
        }
    }
}

impl Decal {
    /// Decal of the given clothing item and image size.
    pub fn sized(decal_type: DecalType, item_id: i32, width: f64, height: f64) -> Self {
        let mut decal = Self {
            item_id,
            decal_type: decal_type.code(),
            ..Self::default()
        };
        decal.base.scale = Vector3::new(width, height, decal.base.scale.z);
        decal
    }

    /// Decoded decal type. Unknown codes are placed like pants.
    pub fn kind(&self) -> Option<DecalType> {
        DecalType::from_code(self.decal_type)
    }

    fn is_shirt(&self) -> bool {
        self.kind() == Some(DecalType::Shirt)
    }

    /// Whether the image depth is small enough to read as flat.
    pub fn is_flat(&self) -> bool {
        self.base.scale.z <= FLAT_DEPTH
    }

    /// Mesh size that shows the image at `base.scale`.
    pub fn mesh_scale(&self) -> Vector3 {
        let ratio = if self.is_shirt() {
            Vector3::new(SHIRT_WIDTH_RATIO, SHIRT_HEIGHT_RATIO, 1.0)
        } else {
            Vector3::new(PANTS_WIDTH_RATIO, PANTS_HEIGHT_RATIO, 1.0)
        };
        self.base.scale.scaled(ratio)
    }

    /// World-space shift from image center to mesh origin for a mesh of
    /// size `mesh`. Zero for shirts.
    pub fn center_offset(&self, mesh: Vector3) -> Vector3 {
        if self.is_shirt() {
            return Vector3::ZERO;
        }
        let direction = if self.kind() == Some(DecalType::PantsFrontRight) {
            -1.0
        } else {
            1.0
        };
        let local = DVec3::new(
            PANTS_X_ADJUST * mesh.x * -direction + self.offset.x,
            PANTS_Y_ADJUST * mesh.y + self.offset.y,
            0.0,
        );
        let r = self.base.rotation.to_radians();
        (euler_matrix(r.x, r.y, r.z) * local).into()
    }

    /// Roll added to the exported rotation. Zero for shirts.
    pub fn tilt(&self) -> f64 {
        match self.kind() {
            Some(DecalType::Shirt) => 0.0,
            Some(DecalType::PantsFrontRight) => PANTS_TILT_FIX,
            _ => -PANTS_TILT_FIX,
        }
    }
}

fn known_decal_type(name: &str, code: &i32) -> Result<()> {
    DecalType::from_code(*code)
        .map(|_| ())
        .ok_or_else(|| Error::invalid(name, format!("unknown decal type {}", code)))
}

impl_new!(Decal);

block_data!(Decal => BlockId::Mesh);

block_attributes!(Decal: "Decal" {
    "item_id" | "image_id" => item_id: i32,
    "shaded" => shaded: bool,
    "decal_type" => decal_type: i32 where known_decal_type,
    "offset" => offset: Vector3,
});
