//! Level objects.
//!
//! The closed set of kinds lives in [`Block`]; each variant wraps a plain
//! struct with a [`BlockBase`] and, for tilable kinds, a [`Pattern`].
//! Shared behavior is reached through [`BlockData`] on the structs or the
//! dispatching methods on [`Block`].
//!
//! ```ignore
//! use bopjson::prelude::*;
//!
//! let spring = Spring::new().with_position((0.0, 4.0, 0.0));
//! let mut higher = spring.copy_with(CopyMode::Deep, [("bounce_force", 80.into())])?;
//! higher.base_mut().name = "High Spring".into();
//! ```

pub(crate) mod attr;
mod base;
mod copy;
mod primitive;
mod action;
mod decoration;
mod npc;
mod hidden;
mod decal;

pub use attr::{AttrValue, Attributes};
pub use base::{BlockBase, Pattern};
pub use copy::CopyMode;
pub use primitive::Primitive;
pub use action::{
    BoostPanel, BreakableBlock, Cannon, Checkpoint, CompletionStar, DisappearingBlock, Grates, Ice,
    Ladder, LevelPainting, Magma, MissileLauncher, NoteBlock, Portal, Sign, Spawn, SpeedPanel,
    Spring, Token, Water, Web,
};
pub use decoration::{
    Cloud, Cornstalk, Fence, Flower, ItemMesh, Logo, LogoIcon, PalmTree, PineTree, Rose, Statue,
    StreetLamp, StringLights, Torch, Tree,
};
pub use npc::BopiSpawner;
pub use hidden::{AnalogClock, BleedingEye, Hyacinth};
pub use decal::Decal;

use crate::core::{BlockId, GameVersion};
use crate::util::{Color, Result, Vector3};

/// Behavior shared by every block struct.
pub trait BlockData: Attributes {
    /// Identifier written as `block_id`.
    const ID: BlockId;
    /// Oldest game version that knows this kind.
    const MIN_VERSION: GameVersion;

    fn base(&self) -> &BlockBase;
    fn base_mut(&mut self) -> &mut BlockBase;

    /// Surface pattern, for tilable kinds.
    fn pattern(&self) -> Option<&Pattern> {
        None
    }

    fn with_name(mut self, name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().name = name.into();
        self
    }

    fn with_color(mut self, color: Color) -> Self
    where
        Self: Sized,
    {
        self.base_mut().color = color;
        self
    }

    fn with_position(mut self, position: impl Into<Vector3>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().position = position.into();
        self
    }

    /// Rotation in degrees.
    fn with_rotation(mut self, rotation: impl Into<Vector3>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().rotation = rotation.into();
        self
    }

    fn with_scale(mut self, scale: impl Into<Vector3>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().scale = scale.into();
        self
    }

    /// Duplicate, then apply `overrides` one at a time.
    fn copy_with<I, K>(&self, mode: CopyMode, overrides: I) -> Result<Self>
    where
        Self: Clone + Sized,
        I: IntoIterator<Item = (K, AttrValue)>,
        K: AsRef<str>,
    {
        copy::copy_block(self, mode, overrides)
    }
}

/// Implements [`BlockData`]. Tilable kinds expose their `pattern` field.
macro_rules! block_data {
    (@impl $ty:ident, $id:expr, $min:expr, $($pattern:ident)?) => {
        impl $crate::block::BlockData for $ty {
            const ID: $crate::core::BlockId = $id;
            const MIN_VERSION: $crate::core::GameVersion = $min;

            fn base(&self) -> &$crate::block::BlockBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::block::BlockBase {
                &mut self.base
            }

            $(
                fn pattern(&self) -> Option<&$crate::block::Pattern> {
                    Some(&self.$pattern)
                }
            )?
        }
    };
    ($ty:ident => $id:expr, tilable, since $min:expr) => {
        block_data!(@impl $ty, $id, $min, pattern);
    };
    ($ty:ident => $id:expr, tilable) => {
        block_data!(@impl $ty, $id, $crate::core::GameVersion::MINIMUM, pattern);
    };
    ($ty:ident => $id:expr, since $min:expr) => {
        block_data!(@impl $ty, $id, $min,);
    };
    ($ty:ident => $id:expr) => {
        block_data!(@impl $ty, $id, $crate::core::GameVersion::MINIMUM,);
    };
}

pub(crate) use block_data;

macro_rules! define_blocks {
    ($($variant:ident),* $(,)?) => {
        /// Any level object.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Block {
            $( $variant($variant), )*
        }

        $(
            impl From<$variant> for Block {
                fn from(b: $variant) -> Self {
                    Block::$variant(b)
                }
            }
        )*

        impl Block {
            pub fn block_id(&self) -> BlockId {
                match self {
                    $( Block::$variant(_) => <$variant as BlockData>::ID, )*
                }
            }

            pub fn min_version(&self) -> GameVersion {
                match self {
                    $( Block::$variant(_) => <$variant as BlockData>::MIN_VERSION, )*
                }
            }

            pub fn base(&self) -> &BlockBase {
                match self {
                    $( Block::$variant(b) => b.base(), )*
                }
            }

            pub fn base_mut(&mut self) -> &mut BlockBase {
                match self {
                    $( Block::$variant(b) => b.base_mut(), )*
                }
            }

            pub fn pattern(&self) -> Option<&Pattern> {
                match self {
                    $( Block::$variant(b) => b.pattern(), )*
                }
            }

            /// Duplicate this block, then apply `overrides`.
            pub fn copy<I, K>(&self, mode: CopyMode, overrides: I) -> Result<Block>
            where
                I: IntoIterator<Item = (K, AttrValue)>,
                K: AsRef<str>,
            {
                match self {
                    $( Block::$variant(b) => copy::copy_block(b, mode, overrides).map(Block::$variant), )*
                }
            }

            fn as_attributes(&self) -> &dyn Attributes {
                match self {
                    $( Block::$variant(b) => b, )*
                }
            }

            fn as_attributes_mut(&mut self) -> &mut dyn Attributes {
                match self {
                    $( Block::$variant(b) => b, )*
                }
            }
        }
    };
}

define_blocks! {
    Primitive,
    Spawn,
    Checkpoint,
    CompletionStar,
    Spring,
    Magma,
    Water,
    Ladder,
    Token,
    DisappearingBlock,
    Grates,
    SpeedPanel,
    BoostPanel,
    Ice,
    BreakableBlock,
    Cannon,
    Portal,
    Web,
    MissileLauncher,
    NoteBlock,
    Sign,
    LevelPainting,
    Flower,
    Cornstalk,
    Fence,
    Tree,
    PineTree,
    PalmTree,
    StreetLamp,
    Torch,
    Logo,
    LogoIcon,
    StringLights,
    Rose,
    ItemMesh,
    Cloud,
    Statue,
    BopiSpawner,
    AnalogClock,
    BleedingEye,
    Hyacinth,
    Decal,
}

impl Block {
    /// Name of the block.
    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn is_tilable(&self) -> bool {
        self.pattern().is_some()
    }

    pub fn as_portal(&self) -> Option<&Portal> {
        match self {
            Block::Portal(p) => Some(p),
            _ => None,
        }
    }
}

impl Attributes for Block {
    fn kind_name(&self) -> &'static str {
        self.as_attributes().kind_name()
    }

    fn set_attribute(&mut self, name: &str, value: AttrValue) -> Result<()> {
        self.as_attributes_mut().set_attribute(name, value)
    }

    fn attribute(&self, name: &str) -> Result<AttrValue> {
        self.as_attributes().attribute(name)
    }

    fn attribute_names(&self) -> Vec<&'static str> {
        self.as_attributes().attribute_names()
    }

    fn validate(&self) -> Result<()> {
        self.as_attributes().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BlockPattern, Shape};
    use crate::util::Error;

    #[test]
    fn test_dispatch() {
        let block: Block = Spring::new().with_position((1.0, 2.0, 3.0)).into();
        assert_eq!(block.block_id(), BlockId::Spring);
        assert_eq!(block.kind_name(), "Spring");
        assert_eq!(block.base().position, Vector3::new(1.0, 2.0, 3.0));
        assert!(!block.is_tilable());
        assert_eq!(block.min_version(), GameVersion::MINIMUM);

        let sign: Block = Sign::new().into();
        assert!(sign.is_tilable());
        assert_eq!(sign.min_version(), GameVersion::new(1, 1, 0));
        assert_eq!(sign.pattern().and_then(Pattern::kind), Some(BlockPattern::Planks));
    }

    #[test]
    fn test_configure_validates_each_option() {
        let mut block = Primitive::new();
        block
            .configure([
                ("shape", AttrValue::from(Shape::Cylinder)),
                ("position", Vector3::new(0.0, -6.0, 0.0).into()),
                ("pattern_opacity", 0.into()),
            ])
            .unwrap();
        assert_eq!(block.shape, Shape::Cylinder.code());
        assert_eq!(block.pattern.opacity, 0);

        let err = block.configure([("opacity", AttrValue::Int(256))]).unwrap_err();
        assert!(err.is_range());
        let err = block.configure([("bounce_force", AttrValue::Int(1))]).unwrap_err();
        assert!(matches!(err, Error::UnknownAttribute { kind: "Primitive", .. }));
    }

    #[test]
    fn test_enum_and_code_are_interchangeable() {
        let mut a = Primitive::new();
        let mut b = Primitive::new();
        a.set_attribute("shape", Shape::Sphere.into()).unwrap();
        b.set_attribute("shape", AttrValue::Int(5)).unwrap();
        assert_eq!(a.attribute("shape").unwrap(), b.attribute("shape").unwrap());
    }

    #[test]
    fn test_attribute_names_cover_base() {
        let names = Block::from(Ladder::new()).attribute_names();
        for expected in ["name", "position", "pattern", "climbing_speed"] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }
}
