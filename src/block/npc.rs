//! Non-player characters.

use super::action::{base, impl_new};
use super::attr::block_attributes;
use super::{block_data, BlockBase, Pattern};
use crate::core::BlockId;
use crate::util::{Color, Int32Array};

const SKIN: Color = Color::rgb(246, 156, 0);
const LEG: Color = Color::rgb(49, 51, 53);
const FOOT: Color = Color::rgb(17, 17, 17);

/// Spawner pad for a hostile bopi. Outfit slots hold catalog item ids;
/// `-1` leaves a slot empty.
#[derive(Clone, Debug, PartialEq)]
pub struct BopiSpawner {
    pub base: BlockBase,
    pub pattern: Pattern,
    pub max_health: f64,
    pub attack_damage: f64,
    pub move_speed: f64,
    pub targeting_radius: f64,
    pub stun_time: f64,
    pub return_to_spawner: bool,
    pub sleep_time: f64,
    pub head_color: Color,
    pub torso_color: Color,
    pub left_arm_color: Color,
    pub left_hand_color: Color,
    pub right_arm_color: Color,
    pub right_hand_color: Color,
    pub left_leg_color: Color,
    pub left_foot_color: Color,
    pub right_leg_color: Color,
    pub right_foot_color: Color,
    pub hats: Int32Array,
    pub face: i32,
    pub shirt: i32,
    pub pants: i32,
    pub shoes: i32,
    pub toy: i32,
}

impl Default for BopiSpawner {
    fn default() -> Self {
        Self {
            base: base("Generated Bopi Spawner", Color::rgb(160, 30, 176), (2.0, 0.5, 2.0)),
            pattern: Pattern::default(),
            max_health: 75.0,
            attack_damage: 10.0,
            move_speed: 15.0,
            targeting_radius: 75.0,
            stun_time: 3.5,
            return_to_spawner: false,
            sleep_time: 60.0,
            head_color: SKIN,
            torso_color: Color::rgb(156, 156, 156),
            left_arm_color: SKIN,
            left_hand_color: SKIN,
            right_arm_color: SKIN,
            right_hand_color: SKIN,
            left_leg_color: LEG,
            left_foot_color: FOOT,
            right_leg_color: LEG,
            right_foot_color: FOOT,
            hats: Int32Array::new(),
            face: -1,
            shirt: -1,
            pants: -1,
            shoes: -1,
            toy: -1,
        }
    }
}

impl_new!(BopiSpawner);

block_data!(BopiSpawner => BlockId::BopiSpawner, tilable);

block_attributes!(BopiSpawner: "BopiSpawner" tilable {
    "max_health" => max_health: f64,
    "attack_damage" => attack_damage: f64,
    "move_speed" => move_speed: f64,
    "targeting_radius" => targeting_radius: f64,
    "stun_time" => stun_time: f64,
    "return_to_spawner" => return_to_spawner: bool,
    "sleep_time" => sleep_time: f64,
    "head_color" => head_color: Color,
    "torso_color" => torso_color: Color,
    "left_arm_color" => left_arm_color: Color,
    "left_hand_color" => left_hand_color: Color,
    "right_arm_color" => right_arm_color: Color,
    "right_hand_color" => right_hand_color: Color,
    "left_leg_color" => left_leg_color: Color,
    "left_foot_color" => left_foot_color: Color,
    "right_leg_color" => right_leg_color: Color,
    "right_foot_color" => right_foot_color: Color,
    "hats" => hats: Int32Array,
    "face" => face: i32,
    "shirt" => shirt: i32,
    "pants" => pants: i32,
    "shoes" => shoes: i32,
    "toy" => toy: i32,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{AttrValue, Attributes};

    #[test]
    fn test_outfit_slots() {
        let mut npc = BopiSpawner::new();
        assert_eq!(npc.face, -1);
        npc.set_attribute("hats", Int32Array::from_values([101, 202]).unwrap().into())
            .unwrap();
        assert_eq!(npc.hats.len(), 2);
        assert!(npc.set_attribute("toy", AttrValue::Int(i64::MAX)).unwrap_err().is_range());
    }
}
