//! Decorative props.

use super::action::{base, impl_new};
use super::attr::{block_attributes, non_negative};
use super::{block_data, BlockBase, Pattern};
use crate::core::{BlockId, BlockPattern, GameVersion};
use crate::util::{Color, ColorArray};

/// Flower. The block color is the bud, the pattern color the stem.
#[derive(Clone, Debug, PartialEq)]
pub struct Flower {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub capitulum_color: Color,
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            base: base("Generated Flower", Color::rgb(160, 30, 176), (2.0, 2.0, 2.0)),
            pattern: Pattern::new(BlockPattern::Checkerboard, Color::rgb(0, 167, 0)),
            capitulum_color: Color::rgb(255, 165, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cornstalk {
    pub base: BlockBase,
    pub corn_color: Color,
}

impl Default for Cornstalk {
    fn default() -> Self {
        Self {
            base: base("Generated Cornstalk", Color::rgb(0, 131, 35), (5.0, 10.0, 5.0)),
            corn_color: Color::rgb(255, 207, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fence {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for Fence {
    fn default() -> Self {
        Self {
            base: base("Generated Fence", Color::rgb(121, 85, 72), (2.0, 4.0, 1.0)),
            pattern: Pattern::new(BlockPattern::Planks, Color::BLACK),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub leaves: bool,
    pub leaves_color: Color,
}

impl Default for Tree {
    fn default() -> Self {
        Self {
            base: base("Generated Tree", Color::rgb(91, 40, 24), (11.0, 17.0, 11.0)),
            pattern: Pattern::default(),
            leaves: true,
            leaves_color: Color::rgb(0, 128, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PineTree {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub snow: bool,
}

impl Default for PineTree {
    fn default() -> Self {
        Self {
            base: base("Generated Pine Tree", Color::rgb(0, 88, 36), (5.0, 10.0, 5.0)),
            pattern: Pattern::default(),
            snow: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PalmTree {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for PalmTree {
    fn default() -> Self {
        Self {
            base: base("Generated Palm Tree", Color::rgb(94, 214, 0), (8.0, 8.0, 8.0)),
            pattern: Pattern::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StreetLamp {
    pub base: BlockBase,
    pub light_range: f64,
}

impl Default for StreetLamp {
    fn default() -> Self {
        Self {
            base: base("Generated Street Lamp", Color::rgb(255, 160, 30), (2.0, 10.0, 2.0)),
            light_range: 25.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Torch {
    pub base: BlockBase,
    pub flame_color: Color,
    pub light_range: f64,
}

impl Default for Torch {
    fn default() -> Self {
        Self {
            base: base("Generated Torch", Color::rgb(73, 48, 42), (1.0, 2.0, 1.0)),
            flame_color: Color::rgb(255, 68, 0),
            light_range: 25.0,
        }
    }
}

/// "Bopimo!" logo. The block color is the primary color.
#[derive(Clone, Debug, PartialEq)]
pub struct Logo {
    pub base: BlockBase,
    pub secondary_color: Color,
    pub tertiary_color: Color,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            base: base("Generated Logo", Color::rgb(130, 12, 155), (6.0, 2.5, 2.0)),
            secondary_color: Color::rgb(175, 85, 217),
            tertiary_color: Color::rgb(141, 62, 229),
        }
    }
}

/// Icon variant of [`Logo`].
#[derive(Clone, Debug, PartialEq)]
pub struct LogoIcon {
    pub base: BlockBase,
    pub secondary_color: Color,
    pub tertiary_color: Color,
}

impl Default for LogoIcon {
    fn default() -> Self {
        let logo = Logo::default();
        Self {
            base: base("Generated Logo Icon", logo.base.color, (6.0, 2.5, 2.0)),
            secondary_color: logo.secondary_color,
            tertiary_color: logo.tertiary_color,
        }
    }
}

/// String of bulbs. The block color is the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct StringLights {
    pub base: BlockBase,
    pub bulb_colors: ColorArray,
    pub blink_speed: f64,
}

impl Default for StringLights {
    fn default() -> Self {
        Self {
            base: base("Generated String Lights", Color::rgb(0, 67, 27), (6.0, 2.5, 2.0)),
            bulb_colors: ColorArray(vec![
                Color::rgb(255, 0, 0),
                Color::rgb(255, 215, 0),
                Color::rgb(50, 205, 50),
                Color::rgb(0, 0, 255),
                Color::rgb(255, 0, 255),
            ]),
            blink_speed: 0.0,
        }
    }
}

/// Thorny rose. The block color is the bud, the pattern color the stem.
#[derive(Clone, Debug, PartialEq)]
pub struct Rose {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub damage: f64,
}

impl Default for Rose {
    fn default() -> Self {
        Self {
            base: base("Generated Rose", Color::rgb(255, 0, 0), (1.0, 3.0, 1.0)),
            pattern: Pattern::new(BlockPattern::Checkerboard, Color::rgb(0, 153, 0)),
            damage: 1.0,
        }
    }
}

/// Mesh of a catalog item.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemMesh {
    pub base: BlockBase,
    pub item_id: i32,
    pub shaded: bool,
}

impl Default for ItemMesh {
    fn default() -> Self {
        Self {
            base: base("Generated Item Mesh", Color::WHITE, (2.0, 2.0, 2.0)),
            item_id: 1,
            shaded: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub base: BlockBase,
}

impl Default for Cloud {
    fn default() -> Self {
        Self {
            base: base("Generated Cloud", Color::WHITE, (8.0, 2.0, 8.0)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statue {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for Statue {
    fn default() -> Self {
        Self {
            base: base("Generated Statue", Color::rgb(246, 156, 0), (3.0, 5.0, 2.0)),
            pattern: Pattern::default(),
        }
    }
}

impl_new!(
    Flower, Cornstalk, Fence, Tree, PineTree, PalmTree, StreetLamp, Torch, Logo, LogoIcon,
    StringLights, Rose, ItemMesh, Cloud, Statue,
);

block_data!(Flower => BlockId::Flower, tilable);
block_data!(Cornstalk => BlockId::Cornstalk, since GameVersion::new(1, 1, 0));
block_data!(Fence => BlockId::Fence, tilable);
block_data!(Tree => BlockId::Tree, tilable, since GameVersion::new(1, 1, 0));
block_data!(PineTree => BlockId::PineTree, tilable);
block_data!(PalmTree => BlockId::PalmTree, tilable);
block_data!(StreetLamp => BlockId::StreetLamp);
block_data!(Torch => BlockId::Torch);
block_data!(Logo => BlockId::Logo);
block_data!(LogoIcon => BlockId::LogoIcon);
block_data!(StringLights => BlockId::StringLights);
block_data!(Rose => BlockId::Rose, tilable, since GameVersion::new(1, 0, 15));
block_data!(ItemMesh => BlockId::Mesh);
block_data!(Cloud => BlockId::Cloud);
block_data!(Statue => BlockId::Statue, tilable);

block_attributes!(Flower: "Flower" tilable {
    "bud_color" => base.color: Color,
    "stem_color" => pattern.color: Color,
    "capitulum_color" => capitulum_color: Color,
});

block_attributes!(Cornstalk: "Cornstalk" {
    "corn_color" | "pattern_color" => corn_color: Color,
});

block_attributes!(Fence: "Fence" tilable {});

block_attributes!(Tree: "Tree" tilable {
    "leaves" => leaves: bool,
    "leaves_color" => leaves_color: Color,
});

block_attributes!(PineTree: "PineTree" tilable {
    "snow" => snow: bool,
});

block_attributes!(PalmTree: "PalmTree" tilable {});

block_attributes!(StreetLamp: "StreetLamp" {
    "light_range" => light_range: f64,
});

block_attributes!(Torch: "Torch" {
    "flame_color" | "pattern_color" => flame_color: Color,
    "light_range" => light_range: f64,
});

block_attributes!(Logo: "Logo" {
    "primary_color" => base.color: Color,
    "secondary_color" | "color2" => secondary_color: Color,
    "tertiary_color" | "color3" => tertiary_color: Color,
});

block_attributes!(LogoIcon: "LogoIcon" {
    "primary_color" => base.color: Color,
    "secondary_color" | "color2" => secondary_color: Color,
    "tertiary_color" | "color3" => tertiary_color: Color,
});

block_attributes!(StringLights: "StringLights" {
    "wire_color" => base.color: Color,
    "bulb_colors" => bulb_colors: ColorArray,
    "blink_speed" => blink_speed: f64,
});

block_attributes!(Rose: "Rose" tilable {
    "bud_color" => base.color: Color,
    "stem_color" => pattern.color: Color,
    "damage" => damage: f64 where non_negative,
});

block_attributes!(ItemMesh: "ItemMesh" {
    "item_id" => item_id: i32,
    "shaded" => shaded: bool,
});

block_attributes!(Cloud: "Cloud" {});

block_attributes!(Statue: "Statue" tilable {});
