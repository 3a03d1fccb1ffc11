//! Kinds the editor hides but the game still loads.

use super::action::{base, impl_new};
use super::attr::block_attributes;
use super::{block_data, BlockBase, Pattern};
use crate::core::BlockId;
use crate::util::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct AnalogClock {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for AnalogClock {
    fn default() -> Self {
        Self {
            base: base("Generated Analog Clock", Color::rgb(160, 29, 175), (2.0, 2.0, 2.0)),
            pattern: Pattern::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BleedingEye {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for BleedingEye {
    fn default() -> Self {
        Self {
            base: base("Generated Bleeding Eye", Color::rgb(237, 0, 8), (2.0, 2.0, 2.0)),
            pattern: Pattern::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hyacinth {
    pub base: BlockBase,
    pub pattern: Pattern,
}

impl Default for Hyacinth {
    fn default() -> Self {
        Self {
            base: base("Generated Hyacinth Flower", Color::rgb(20, 126, 172), (2.0, 2.0, 2.0)),
            pattern: Pattern::default(),
        }
    }
}

impl_new!(AnalogClock, BleedingEye, Hyacinth);

block_data!(AnalogClock => BlockId::AnalogClock, tilable);
block_data!(BleedingEye => BlockId::BleedingEye, tilable);
block_data!(Hyacinth => BlockId::Hyacinth, tilable);

block_attributes!(AnalogClock: "AnalogClock" tilable {});
block_attributes!(BleedingEye: "BleedingEye" tilable {});
block_attributes!(Hyacinth: "Hyacinth" tilable {});
