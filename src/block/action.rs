//! Gameplay blocks: spawns, hazards, movers and the rest of the action set.

use super::attr::{block_attributes, non_negative, non_zero, positive_id};
use super::{block_data, BlockBase, Pattern};
use crate::core::{BlockId, BlockPattern, GameVersion, GratesStyle, Shape, Sound};
use crate::util::{Color, Int64Array, Vector3};

const VIOLET: Color = Color::rgb(160, 30, 176);

pub(super) fn base(name: &str, color: Color, (x, y, z): (f64, f64, f64)) -> BlockBase {
    BlockBase::new(name, color, Vector3::new(x, y, z))
}

/// Where players start.
#[derive(Clone, Debug, PartialEq)]
pub struct Spawn {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for Spawn {
    fn default() -> Self {
        Self {
            base: base("Generated Spawn", VIOLET, (4.0, 1.0, 4.0)),
            pattern: Pattern::default(),
        }
    }
}

/// Respawn point. The flag carries the pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for Checkpoint {
    fn default() -> Self {
        Self {
            base: base("Generated Checkpoint", VIOLET, (2.0, 4.0, 2.0)),
            pattern: Pattern::default(),
        }
    }
}

/// Collectible star. Its star id is the order it was added to the level.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionStar {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub mute: bool,
    pub float_height: f64,
}

impl Default for CompletionStar {
    fn default() -> Self {
        Self {
            base: base("Generated Completion Star", Color::rgb(94, 0, 176), (4.0, 4.0, 4.0)),
            pattern: Pattern::default(),
            mute: false,
            float_height: 1.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    pub base: BlockBase,
    pub bounce_force: f64,
    pub can_ground_pound: bool,
    pub base_color: Color,
    pub coil_color: Color,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            base: base("Generated Spring", Color::rgb(226, 181, 4), (2.0, 2.0, 2.0)),
            bounce_force: 50.0,
            can_ground_pound: true,
            base_color: Color::rgb(84, 84, 84),
            coil_color: Color::rgb(92, 92, 92),
        }
    }
}

/// Damaging surface. Also known as lava.
#[derive(Clone, Debug, PartialEq)]
pub struct Magma {
    pub base: BlockBase,
    pub pattern_color: Color,
    pub damage_amount: f64,
    /// Written inverted (`2 / pattern_scale`).
    pub pattern_scale: f64,
    /// [`Shape`] code.
    pub shape: i32,
}

impl Default for Magma {
    fn default() -> Self {
        Self {
            base: base("Generated Magma", Color::rgb(96, 20, 0), (2.0, 2.0, 2.0)),
            pattern_color: Color::rgb(246, 84, 20),
            damage_amount: 25.0,
            pattern_scale: 4.0,
            shape: Shape::Cube.code(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Water {
    pub base: BlockBase,
    pub foam_color: Color,
}

impl Default for Water {
    fn default() -> Self {
        Self {
            base: base("Generated Water", Color::rgb(71, 130, 255), (4.0, 4.0, 4.0)),
            foam_color: Color::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ladder {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub climbing_speed: f64,
}

impl Default for Ladder {
    fn default() -> Self {
        Self {
            base: base("Generated Ladder", Color::rgb(78, 52, 46), (2.0, 2.0, 1.0)),
            pattern: Pattern::default(),
            climbing_speed: 1.0,
        }
    }
}

/// Pickup that heals and counts towards the token total.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub base: BlockBase,
    pub heal_amount: f64,
    pub regeneration_time: f64,
    pub worth: i32,
    pub model: i32,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            base: base("Generated Token", Color::rgb(236, 126, 0), (2.0, 2.0, 2.0)),
            heal_amount: 5.0,
            regeneration_time: 45.0,
            worth: 1,
            model: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisappearingBlock {
    pub base: BlockBase,
    pub pattern: Pattern,
    /// Seconds after first touch.
    pub disappears_after: f64,
    pub regeneration_time: f64,
    pub players_only: bool,
}

impl Default for DisappearingBlock {
    fn default() -> Self {
        Self {
            base: base("Generated Disappearing Block", Color::rgb(122, 9, 0), (2.0, 2.0, 2.0)),
            pattern: Pattern::new(BlockPattern::X, Color::BLACK),
            disappears_after: 2.0,
            regeneration_time: 5.0,
            players_only: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grates {
    pub base: BlockBase,
    /// [`GratesStyle`] code.
    pub style: i32,
}

impl Default for Grates {
    fn default() -> Self {
        Self {
            base: base("Generated Grates", Color::rgb(0, 10, 18), (4.0, 1.0, 4.0)),
            style: GratesStyle::Grid.code(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedPanel {
    pub base: BlockBase,
    pub new_speed: f64,
    pub duration: f64,
}

impl Default for SpeedPanel {
    fn default() -> Self {
        Self {
            base: base("Generated Speed Panel", Color::rgb(27, 0, 32), (3.0, 1.0, 3.0)),
            new_speed: 30.0,
            duration: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoostPanel {
    pub base: BlockBase,
    pub boost: f64,
    pub vertical_boost: f64,
}

impl Default for BoostPanel {
    fn default() -> Self {
        Self {
            base: base("Generated Boost Panel", Color::rgb(0, 2, 34), (3.0, 1.0, 3.0)),
            boost: 75.0,
            vertical_boost: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ice {
    pub base: BlockBase,
    pub opacity: u8,
    /// [`Shape`] code.
    pub shape: i32,
    pub slipperiness: f64,
}

impl Default for Ice {
    fn default() -> Self {
        Self {
            base: base("Generated Ice", Color::rgb(138, 220, 223), (2.0, 2.0, 2.0)),
            opacity: 255,
            shape: Shape::Cube.code(),
            slipperiness: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreakableBlock {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub max_health: f64,
    pub regeneration_time: f64,
}

impl Default for BreakableBlock {
    fn default() -> Self {
        Self {
            base: base("Generated Breakable Block", Color::rgb(129, 0, 40), (2.0, 2.0, 2.0)),
            pattern: Pattern::new(BlockPattern::Bricks, Color::BLACK),
            max_health: 40.0,
            regeneration_time: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cannon {
    pub base: BlockBase,
    pub power: f64,
}

impl Default for Cannon {
    fn default() -> Self {
        Self {
            base: base("Generated Cannon", Color::rgb(42, 2, 47), (2.0, 2.0, 2.0)),
            power: 50.0,
        }
    }
}

/// Teleporter. Destinations are UIDs of other portals in the same level.
#[derive(Clone, Debug, PartialEq)]
pub struct Portal {
    pub base: BlockBase,
    /// The pattern color is the portal's secondary color.
    pub pattern: Pattern,
    pub delay: f64,
    pub destinations: Int64Array,
    pub opacity: u8,
}

impl Default for Portal {
    fn default() -> Self {
        Self {
            base: base("Generated Portal", Color::rgb(31, 49, 255), (10.0, 10.0, 2.0)),
            pattern: Pattern::new(BlockPattern::Checkerboard, Color::rgb(158, 1, 255)),
            delay: 1.0,
            destinations: Int64Array::new(),
            opacity: 204,
        }
    }
}

impl Portal {
    /// Add a destination UID.
    pub fn add_destination(&mut self, uid: u32) {
        // u32 always fits the 64-bit width.
        let _ = self.destinations.push(uid);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Web {
    pub base: BlockBase,
    pub stickiness: f64,
}

impl Default for Web {
    fn default() -> Self {
        Self {
            base: base("Generated Web", Color::WHITE, (6.0, 1.0, 6.0)),
            stickiness: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissileLauncher {
    pub base: BlockBase,
    pub delay: f64,
    pub missile_size: f64,
    pub missile_speed: f64,
    pub explosion_damage: f64,
    pub explosion_force: f64,
    pub explosion_size: f64,
    pub model: i32,
}

impl Default for MissileLauncher {
    fn default() -> Self {
        Self {
            base: base("Generated Missile Launcher", VIOLET, (2.0, 2.0, 2.0)),
            delay: 5.0,
            missile_size: 1.0,
            missile_speed: 15.0,
            explosion_damage: 50.0,
            explosion_force: 10.0,
            explosion_size: 5.0,
            model: 0,
        }
    }
}

/// Bouncy block that plays a note.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteBlock {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub center_color: Color,
    /// [`BlockPattern`] code.
    pub center_pattern: i32,
    pub center_pattern_color: Color,
    pub bounce_force: f64,
    /// [`Sound`] code.
    pub instrument: i32,
    pub pitch: f64,
}

impl Default for NoteBlock {
    fn default() -> Self {
        Self {
            base: base("Generated Note Block", Color::rgb(77, 31, 144), (2.0, 2.0, 2.0)),
            pattern: Pattern::default(),
            center_color: Color::rgb(26, 23, 47),
            center_pattern: BlockPattern::Note.code(),
            center_pattern_color: Color::rgb(176, 131, 241),
            bounce_force: 50.0,
            instrument: Sound::Piano.code(),
            pitch: 1.0,
        }
    }
}

/// Dialogue sign on a pole.
#[derive(Clone, Debug, PartialEq)]
pub struct Sign {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub text: String,
    pub pole_color: Color,
    /// [`BlockPattern`] code.
    pub pole_pattern: i32,
    pub pole_pattern_color: Color,
    pub pole_pattern_opacity: u8,
}

impl Default for Sign {
    fn default() -> Self {
        Self {
            base: base("Generated Sign", Color::rgb(155, 60, 17), (3.0, 3.0, 1.0)),
            pattern: Pattern::new(BlockPattern::Planks, Color::BLACK),
            text: "Hello World!".to_string(),
            pole_color: Color::rgb(83, 41, 11),
            pole_pattern: BlockPattern::Planks.code(),
            pole_pattern_color: Color::BLACK,
            pole_pattern_opacity: Pattern::DEFAULT_OPACITY,
        }
    }
}

/// Framed link to another published level.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelPainting {
    pub base: BlockBase,
    pub pattern: Pattern,
    /// Online level id, at least 1.
    pub level_id: i32,
}

impl Default for LevelPainting {
    fn default() -> Self {
        Self {
            base: base("Generated Level Painting", Color::rgb(160, 29, 175), (16.0, 12.0, 2.0)),
            pattern: Pattern::default(),
            level_id: 4193,
        }
    }
}

macro_rules! impl_new {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn new() -> Self {
                    Self::default()
                }
            }
        )*
    };
}

impl_new!(
    Spawn, Checkpoint, CompletionStar, Spring, Magma, Water, Ladder, Token, DisappearingBlock,
    Grates, SpeedPanel, BoostPanel, Ice, BreakableBlock, Cannon, Portal, Web, MissileLauncher,
    NoteBlock, Sign, LevelPainting,
);

pub(crate) use impl_new;

const V1_1_0: GameVersion = GameVersion::new(1, 1, 0);

block_data!(Spawn => BlockId::Spawn, tilable);
block_data!(Checkpoint => BlockId::Checkpoint, tilable);
block_data!(CompletionStar => BlockId::CompletionStar, tilable);
block_data!(Spring => BlockId::Spring);
block_data!(Magma => BlockId::Magma);
block_data!(Water => BlockId::Water);
block_data!(Ladder => BlockId::Ladder, tilable);
block_data!(Token => BlockId::Token);
block_data!(DisappearingBlock => BlockId::DisappearingBlock, tilable);
block_data!(Grates => BlockId::Grates);
block_data!(SpeedPanel => BlockId::SpeedPanel);
block_data!(BoostPanel => BlockId::BoostPanel);
block_data!(Ice => BlockId::Ice);
block_data!(BreakableBlock => BlockId::BreakableBlock, tilable);
block_data!(Cannon => BlockId::Cannon);
block_data!(Portal => BlockId::Portal, tilable);
block_data!(Web => BlockId::Web);
block_data!(MissileLauncher => BlockId::MissileLauncher);
block_data!(NoteBlock => BlockId::NoteBlock, tilable, since V1_1_0);
block_data!(Sign => BlockId::DialogueSign, tilable, since V1_1_0);
block_data!(LevelPainting => BlockId::LevelPainting, tilable, since V1_1_0);

block_attributes!(Spawn: "Spawn" tilable {});

block_attributes!(Checkpoint: "Checkpoint" tilable {
    "flag_pattern" => pattern.id: i32,
    "flag_pattern_color" => pattern.color: Color,
});

block_attributes!(CompletionStar: "CompletionStar" tilable {
    "mute" => mute: bool,
    "float_height" => float_height: f64,
});

block_attributes!(Spring: "Spring" {
    "bounce_force" => bounce_force: f64,
    "can_ground_pound" => can_ground_pound: bool,
    "base_color" => base_color: Color,
    "coil_color" | "pattern_color" => coil_color: Color,
});

block_attributes!(Magma: "Magma" {
    "pattern_color" | "block_pattern_color" => pattern_color: Color,
    "damage_amount" | "damage" => damage_amount: f64 where non_negative,
    "pattern_scale" => pattern_scale: f64 where non_zero,
    "shape" => shape: i32,
});

block_attributes!(Water: "Water" {
    "foam_color" | "pattern_color" => foam_color: Color,
});

block_attributes!(Ladder: "Ladder" tilable {
    "climbing_speed" => climbing_speed: f64,
});

block_attributes!(Token: "Token" {
    "heal_amount" => heal_amount: f64,
    "regeneration_time" => regeneration_time: f64,
    "worth" => worth: i32,
    "model" => model: i32,
});

block_attributes!(DisappearingBlock: "DisappearingBlock" tilable {
    "disappears_after" => disappears_after: f64,
    "regeneration_time" | "regen_time" => regeneration_time: f64,
    "players_only" => players_only: bool,
});

block_attributes!(Grates: "Grates" {
    "style" | "block_pattern" => style: i32,
});

block_attributes!(SpeedPanel: "SpeedPanel" {
    "new_speed" => new_speed: f64,
    "duration" => duration: f64,
});

block_attributes!(BoostPanel: "BoostPanel" {
    "boost" => boost: f64,
    "vertical_boost" => vertical_boost: f64,
});

block_attributes!(Ice: "Ice" {
    "opacity" => opacity: u8,
    "shape" => shape: i32,
    "slipperiness" => slipperiness: f64,
});

block_attributes!(BreakableBlock: "BreakableBlock" tilable {
    "max_health" => max_health: f64,
    "regeneration_time" => regeneration_time: f64,
});

block_attributes!(Cannon: "Cannon" {
    "power" => power: f64,
});

block_attributes!(Portal: "Portal" tilable {
    "secondary_color" => pattern.color: Color,
    "delay" => delay: f64,
    "destinations" => destinations: Int64Array,
    "opacity" => opacity: u8,
});

block_attributes!(Web: "Web" {
    "stickiness" => stickiness: f64,
});

block_attributes!(MissileLauncher: "MissileLauncher" {
    "delay" => delay: f64,
    "missile_size" => missile_size: f64,
    "missile_speed" => missile_speed: f64,
    "explosion_damage" => explosion_damage: f64,
    "explosion_force" => explosion_force: f64,
    "explosion_size" => explosion_size: f64,
    "model" => model: i32,
});

block_attributes!(NoteBlock: "NoteBlock" tilable {
    "center_color" => center_color: Color,
    "center_pattern" => center_pattern: i32,
    "center_pattern_color" => center_pattern_color: Color,
    "bounce_force" => bounce_force: f64,
    "instrument" => instrument: i32,
    "pitch" | "pitch_scale" => pitch: f64,
});

block_attributes!(Sign: "Sign" tilable {
    "text" => text: String,
    "pole_color" => pole_color: Color,
    "pole_pattern" => pole_pattern: i32,
    "pole_pattern_color" => pole_pattern_color: Color,
    "pole_pattern_opacity" => pole_pattern_opacity: u8,
});

block_attributes!(LevelPainting: "LevelPainting" tilable {
    "level_id" => level_id: i32 where positive_id,
});
