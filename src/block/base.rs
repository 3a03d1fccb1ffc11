//! Fields shared by every block kind.

use std::cell::{Ref, RefMut};

use super::attr::{AttrField, AttrValue};
use crate::core::{BlockPattern, PositionKinematics, RotationKinematics};
use crate::util::{Color, Error, Float32Array, Result, Shared, Vector3, Vector3Array};

/// Identity, transform and motion common to all blocks.
///
/// Position kinematics sit behind a [`Shared`] handle. `clone` gives the
/// copy its own track; only a [`CopyMode::Shallow`](super::CopyMode::Shallow)
/// copy shares it with the source.
#[derive(Debug, PartialEq)]
pub struct BlockBase {
    pub name: String,
    /// Show the name above the block in game.
    pub nametag: bool,
    pub color: Color,
    pub position: Vector3,
    /// Euler angles in degrees.
    pub rotation: Vector3,
    pub scale: Vector3,
    pub position_kinematics: Shared<PositionKinematics>,
    pub rotation_kinematics: RotationKinematics,
}

impl BlockBase {
    pub fn new(name: impl Into<String>, color: Color, scale: Vector3) -> Self {
        Self {
            name: name.into(),
            nametag: false,
            color,
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale,
            position_kinematics: Shared::default(),
            rotation_kinematics: RotationKinematics::default(),
        }
    }

    /// Borrow the position track.
    pub fn positions(&self) -> Ref<'_, PositionKinematics> {
        self.position_kinematics.borrow()
    }

    /// Mutably borrow the position track.
    pub fn positions_mut(&self) -> RefMut<'_, PositionKinematics> {
        self.position_kinematics.borrow_mut()
    }

    /// Use the position track of `source` instead of this base's own.
    pub(crate) fn share_track(&mut self, source: &BlockBase) {
        self.position_kinematics = source.position_kinematics.clone();
    }

    pub(crate) fn names(&self) -> &'static [&'static str] {
        &[
            "name",
            "nametag",
            "color",
            "position",
            "rotation",
            "scale",
            "position_enabled",
            "position_travel_speed",
            "position_points",
            "position_travel_times",
            "rotation_enabled",
            "rotation_direction",
            "rotation_speed",
            "rotation_pivot_offset",
        ]
    }

    /// Assign a base attribute, or hand the value back if the name is not one.
    pub(crate) fn try_set(&mut self, name: &str, value: AttrValue) -> Result<Option<AttrValue>> {
        match name {
            "name" | "block_name" => self.name = String::from_attr(name, value)?,
            "nametag" => self.nametag = bool::from_attr(name, value)?,
            "color" | "block_color" => self.color = Color::from_attr(name, value)?,
            "position" | "block_position" => self.position = Vector3::from_attr(name, value)?,
            "rotation" | "block_rotation" => self.rotation = Vector3::from_attr(name, value)?,
            "scale" | "block_scale" => self.scale = Vector3::from_attr(name, value)?,
            "position_enabled" => {
                self.positions_mut().enabled = bool::from_attr(name, value)?;
            }
            "position_travel_speed" => {
                let speed = f64::from_attr(name, value)?;
                self.positions_mut().set_travel_speed(speed)?;
            }
            "position_points" | "position_travel_times" => {
                return Err(Error::ReadOnlyAttribute {
                    attribute: name.to_string(),
                    hint: "use the position kinematics methods to change the track",
                });
            }
            "rotation_enabled" => {
                self.rotation_kinematics.enabled = bool::from_attr(name, value)?;
            }
            "rotation_direction" => {
                self.rotation_kinematics.direction = Vector3::from_attr(name, value)?;
            }
            "rotation_speed" => self.rotation_kinematics.speed = f64::from_attr(name, value)?,
            "rotation_pivot_offset" => {
                self.rotation_kinematics.pivot_offset = Vector3::from_attr(name, value)?;
            }
            _ => return Ok(Some(value)),
        }
        Ok(None)
    }

    pub(crate) fn get(&self, name: &str) -> Option<AttrValue> {
        let value = match name {
            "name" | "block_name" => AttrValue::Str(self.name.clone()),
            "nametag" => AttrValue::Bool(self.nametag),
            "color" | "block_color" => AttrValue::Color(self.color),
            "position" | "block_position" => AttrValue::Vector3(self.position),
            "rotation" | "block_rotation" => AttrValue::Vector3(self.rotation),
            "scale" | "block_scale" => AttrValue::Vector3(self.scale),
            "position_enabled" => AttrValue::Bool(self.positions().enabled),
            "position_travel_speed" => AttrValue::Float(self.positions().travel_speed()),
            "position_points" => {
                AttrValue::Vector3Array(Vector3Array(self.positions().points().to_vec()))
            }
            "position_travel_times" => AttrValue::Float32Array(Float32Array(
                self.positions().travel_times().iter().map(|t| *t as f32).collect(),
            )),
            "rotation_enabled" => AttrValue::Bool(self.rotation_kinematics.enabled),
            "rotation_direction" => AttrValue::Vector3(self.rotation_kinematics.direction),
            "rotation_speed" => AttrValue::Float(self.rotation_kinematics.speed),
            "rotation_pivot_offset" => AttrValue::Vector3(self.rotation_kinematics.pivot_offset),
            _ => return None,
        };
        Some(value)
    }
}

/// Surface pattern of tilable blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// [`BlockPattern`] code.
    pub id: i32,
    pub color: Color,
    pub opacity: u8,
}

impl Pattern {
    pub const DEFAULT_OPACITY: u8 = 60;

    pub fn new(id: impl Into<i32>, color: Color) -> Self {
        Self {
            id: id.into(),
            color,
            opacity: Self::DEFAULT_OPACITY,
        }
    }

    /// Known pattern for the stored code, if any.
    pub fn kind(&self) -> Option<BlockPattern> {
        BlockPattern::from_code(self.id)
    }

    pub(crate) fn names(&self) -> &'static [&'static str] {
        &["pattern", "pattern_color", "pattern_opacity"]
    }

    pub(crate) fn try_set(&mut self, name: &str, value: AttrValue) -> Result<Option<AttrValue>> {
        match name {
            "pattern" | "block_pattern" => self.id = i32::from_attr(name, value)?,
            "pattern_color" | "block_pattern_color" => self.color = Color::from_attr(name, value)?,
            "pattern_opacity" => self.opacity = u8::from_attr(name, value)?,
            _ => return Ok(Some(value)),
        }
        Ok(None)
    }

    pub(crate) fn get(&self, name: &str) -> Option<AttrValue> {
        match name {
            "pattern" | "block_pattern" => Some(self.id.to_attr()),
            "pattern_color" | "block_pattern_color" => Some(AttrValue::Color(self.color)),
            "pattern_opacity" => Some(self.opacity.to_attr()),
            _ => None,
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(BlockPattern::Checkerboard, Color::BLACK)
    }
}

impl Clone for BlockBase {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            nametag: self.nametag,
            color: self.color,
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            position_kinematics: self.position_kinematics.deep_copy(),
            rotation_kinematics: self.rotation_kinematics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_owns_its_track() {
        let base = BlockBase::new("Object", Color::BLACK, Vector3::ONE);
        base.positions_mut().add_point(Vector3::ZERO, 1.0).unwrap();

        let copy = base.clone();
        copy.positions_mut().add_point(Vector3::ONE, 1.0).unwrap();
        assert_eq!(base.positions().len(), 1);
        assert_eq!(copy.positions().len(), 2);

        let mut shared = base.clone();
        shared.share_track(&base);
        shared.positions_mut().clear();
        assert!(base.positions().is_empty());
    }

    #[test]
    fn test_base_defaults() {
        let base = BlockBase::new("Object", Color::BLACK, Vector3::splat(2.0));
        assert!(!base.nametag);
        assert_eq!(base.rotation_kinematics.speed, 1.0);
        assert!(!base.positions().enabled);
        assert!(base.positions().is_empty());
    }

    #[test]
    fn test_track_is_read_only_by_name() {
        let mut base = BlockBase::new("Object", Color::BLACK, Vector3::ONE);
        let err = base
            .try_set("position_points", AttrValue::Bool(true))
            .unwrap_err();
        assert!(matches!(err, Error::ReadOnlyAttribute { .. }));
        assert!(matches!(base.get("position_points"), Some(AttrValue::Vector3Array(_))));
    }

    #[test]
    fn test_unknown_name_is_handed_back() {
        let mut pattern = Pattern::default();
        let back = pattern.try_set("bounce_force", AttrValue::Int(3)).unwrap();
        assert_eq!(back, Some(AttrValue::Int(3)));
        assert_eq!(pattern.opacity, 60);
        assert!(pattern.try_set("pattern_opacity", AttrValue::Int(256)).is_err());
    }
}
