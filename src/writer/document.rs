//! Level to document.
//!
//! This is the only place the `.bopjson` layout is known. Every block
//! record starts with `uid` and the shared base keys, then the pattern keys
//! for tilable kinds, then the kind's own keys in a fixed order.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};
use time::macros::format_description;
use time::UtcOffset;
use tracing::{debug, info_span, trace, warn};

use super::encode::Encode;
use crate::block::{Attributes, Block, Decal};
use crate::core::GameVersion;
use crate::level::{Level, Uid};
use crate::util::{Error, Float32Array, Result, Vector3, Vector3Array};

/// Ordered key/value builder for one JSON object.
#[derive(Default)]
struct Record(Map<String, Value>);

impl Record {
    fn put(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }
}

/// Build the full document for `level`.
///
/// Problems the level could not catch when blocks were added (a portal
/// whose destination was removed later, a game version lowered after a
/// newer kind was added) are logged and written anyway. Field values that
/// fail their checks, or floats with no finite JSON form, are errors.
pub fn level_document(level: &Level) -> Result<Value> {
    let _span = info_span!("level_document", level = %level.name, blocks = level.len()).entered();

    if !level.game_version.is_supported() {
        warn!(
            version = %level.game_version,
            minimum = %GameVersion::MINIMUM,
            "game version predates every version the document format describes"
        );
    }

    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let saved = level.time_of_save.to_offset(UtcOffset::UTC).format(&time_format)?;
    let mut kinds: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut blocks = Vec::with_capacity(level.len());
    for (uid, block) in level.iter() {
        block.validate()?;
        report_problems(level, uid, block);
        *kinds.entry(block.kind_name()).or_default() += 1;
        let record = block_record(level, uid, block).0;
        reject_non_finite(&format!("{} {}", block.kind_name(), uid), &record)?;
        blocks.push(Value::Object(record));
        trace!(uid, kind = block.kind_name(), "encoded block");
    }
    debug!(?kinds, "block kinds");

    let s = &level.settings;
    let doc = json!({
        "GAME_VERSION": level.game_version.to_string(),
        "TIME_OF_SAVE": saved,
        "level_name": level.name,
        "level_description": level.description,
        "level_music": s.music.encode(),
        "level_lives": s.lives,
        "level_players_damage_players": s.players_damage_players,
        "level_sky": s.sky,
        "level_sky_energy": s.sky_energy,
        "level_ambient_color": s.ambient_color.encode(),
        "level_weather": s.weather,
        "level_fog_enabled": s.fog_enabled,
        "level_fog_distance": s.fog_distance,
        "level_fog_color": s.fog_color.encode(),
        "level_gravity": s.gravity,
        "level_death_plane": s.death_plane,
        "level_blocks": { "type": "Container_Array", "value": blocks },
    });
    if let Value::Object(top) = &doc {
        reject_non_finite("level", top)?;
    }
    Ok(doc)
}

/// Encoders turn NaN, infinities and floats past the `f32` range into
/// `null`; nothing else in a document is null.
fn reject_non_finite(owner: &str, fields: &Map<String, Value>) -> Result<()> {
    fn has_null(value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Array(items) => items.iter().any(has_null),
            Value::Object(map) => map.values().any(has_null),
            _ => false,
        }
    }

    match fields.iter().find(|(_, value)| has_null(value)) {
        Some((key, _)) => Err(Error::invalid(
            format!("{}: {}", owner, key),
            "not a finite 32-bit float",
        )),
        None => Ok(()),
    }
}

fn report_problems(level: &Level, uid: Uid, block: &Block) {
    let required = block.min_version();
    if required > level.game_version {
        warn!(
            uid,
            kind = block.kind_name(),
            %required,
            level_version = %level.game_version,
            "block needs a newer game version than the level targets"
        );
    }
    if let Some(portal) = block.as_portal() {
        for dest in portal.destinations.iter() {
            if let Some(reason) = level.destination_problem(dest) {
                warn!(uid, portal = %portal.base.name, destination = dest, reason, "bad portal destination");
            }
        }
    }
    if let Block::Decal(decal) = block {
        if !decal.is_flat() {
            warn!(
                uid,
                depth = decal.base.scale.z,
                "decal is not flat; an ItemMesh may suit better"
            );
        }
    }
}

fn block_record(level: &Level, uid: Uid, block: &Block) -> Record {
    let mut r = Record::default();
    r.put("uid", uid);
    base_fields(&mut r, block);
    kind_fields(&mut r, level, uid, block);
    r
}

fn base_fields(r: &mut Record, block: &Block) {
    let b = block.base();
    r.put("block_id", block.block_id().code())
        .put("block_name", b.name.as_str())
        .put("nametag", b.nametag)
        .put("block_color", b.color.encode())
        .put("block_position", b.position.encode())
        .put("block_rotation", b.rotation.encode())
        .put("block_scale", b.scale.encode());

    let track = b.positions();
    r.put("position_enabled", track.enabled);
    if track.enabled {
        let times = track.travel_times().iter().map(|&t| t as f32).collect();
        r.put("position_points", Vector3Array(track.points().to_vec()).encode())
            .put("position_travel_times", Float32Array(times).encode());
    }

    let spin = &b.rotation_kinematics;
    r.put("rotation_enabled", spin.enabled);
    if spin.enabled {
        r.put("rotation_pivot_offset", spin.pivot_offset.encode())
            .put("rotation_direction", spin.direction.encode())
            .put("rotation_speed", spin.speed);
    }

    if let Some(p) = block.pattern() {
        r.put("block_pattern", p.id)
            .put("block_pattern_color", p.color.encode())
            .put("pattern_opacity", p.opacity);
    }
}

fn kind_fields(r: &mut Record, level: &Level, uid: Uid, block: &Block) {
    match block {
        Block::Primitive(b) => {
            r.put("collision_enabled", b.collision_enabled)
                .put("opacity", b.opacity)
                .put("pattern_scale", 2.0 / b.pattern_scale)
                .put("pattern_scroll", b.pattern_scroll.encode())
                .put("shape", b.shape)
                .put("unshaded", b.unshaded);
        }
        Block::Spawn(_) | Block::Checkpoint(_) => {}
        Block::CompletionStar(b) => {
            r.put("mute", b.mute)
                .put("star_id", level.star_id(uid).unwrap_or_default())
                .put("float_height", b.float_height);
        }
        Block::Spring(b) => {
            r.put("bounce_force", b.bounce_force)
                .put("can_ground_pound", b.can_ground_pound)
                .put("base_color", b.base_color.encode())
                .put("pattern_color", b.coil_color.encode());
        }
        Block::Magma(b) => {
            r.put("block_pattern_color", b.pattern_color.encode())
                .put("damage_amount", b.damage_amount)
                .put("pattern_scale", 2.0 / b.pattern_scale)
                .put("shape", b.shape);
        }
        Block::Water(b) => {
            r.put("block_pattern_color", b.foam_color.encode());
        }
        Block::Ladder(b) => {
            r.put("climbing_speed", b.climbing_speed);
        }
        Block::Token(b) => {
            r.put("heal_amount", b.heal_amount)
                .put("regeneration_time", b.regeneration_time)
                .put("worth", b.worth)
                .put("model", b.model);
        }
        Block::DisappearingBlock(b) => {
            r.put("disappears_after", b.disappears_after)
                .put("regen_time", b.regeneration_time)
                .put("players_only", b.players_only);
        }
        Block::Grates(b) => {
            r.put("block_pattern", b.style);
        }
        Block::SpeedPanel(b) => {
            r.put("new_speed", b.new_speed).put("duration", b.duration);
        }
        Block::BoostPanel(b) => {
            r.put("boost", b.boost).put("vertical_boost", b.vertical_boost);
        }
        Block::Ice(b) => {
            r.put("opacity", b.opacity)
                .put("shape", b.shape)
                .put("slipperiness", b.slipperiness);
        }
        Block::BreakableBlock(b) => {
            r.put("max_health", b.max_health)
                .put("regeneration_time", b.regeneration_time);
        }
        Block::Cannon(b) => {
            r.put("power", b.power);
        }
        Block::Portal(b) => {
            r.put("delay", b.delay)
                .put("destinations", b.destinations.encode())
                .put("opacity", b.opacity);
        }
        Block::Web(b) => {
            r.put("stickiness", b.stickiness);
        }
        Block::MissileLauncher(b) => {
            r.put("delay", b.delay)
                .put("missile_size", b.missile_size)
                .put("missile_speed", b.missile_speed)
                .put("explosion_damage", b.explosion_damage)
                .put("explosion_force", b.explosion_force)
                .put("explosion_size", b.explosion_size)
                .put("model", b.model);
        }
        Block::NoteBlock(b) => {
            r.put("center_color", b.center_color.encode())
                .put("center_pattern", b.center_pattern)
                .put("center_pattern_color", b.center_pattern_color.encode())
                .put("bounce_force", b.bounce_force)
                .put("instrument", b.instrument)
                .put("pitch_scale", b.pitch);
        }
        Block::Sign(b) => {
            r.put("text", b.text.as_str())
                .put("pole_color", b.pole_color.encode())
                .put("pole_pattern", b.pole_pattern)
                .put("pole_pattern_color", b.pole_pattern_color.encode())
                .put("pole_pattern_opacity", b.pole_pattern_opacity);
        }
        Block::LevelPainting(b) => {
            r.put("level_id", b.level_id);
        }
        Block::Flower(b) => {
            r.put("capitulum_color", b.capitulum_color.encode());
        }
        Block::Cornstalk(b) => {
            r.put("pattern_color", b.corn_color.encode());
        }
        Block::Tree(b) => {
            r.put("leaves", b.leaves).put("leaves_color", b.leaves_color.encode());
        }
        Block::PineTree(b) => {
            r.put("snow", b.snow);
        }
        Block::StreetLamp(b) => {
            r.put("light_range", b.light_range);
        }
        Block::Torch(b) => {
            r.put("light_range", b.light_range)
                .put("block_pattern_color", b.flame_color.encode());
        }
        Block::Logo(b) => {
            r.put("color2", b.secondary_color.encode())
                .put("color3", b.tertiary_color.encode());
        }
        Block::LogoIcon(b) => {
            r.put("color2", b.secondary_color.encode())
                .put("color3", b.tertiary_color.encode());
        }
        Block::StringLights(b) => {
            r.put("bulb_colors", b.bulb_colors.encode())
                .put("blink_speed", b.blink_speed);
        }
        Block::Rose(b) => {
            r.put("damage", b.damage);
        }
        Block::ItemMesh(b) => {
            r.put("item_id", b.item_id).put("shaded", b.shaded);
        }
        Block::BopiSpawner(b) => {
            r.put("max_health", b.max_health)
                .put("attack_damage", b.attack_damage)
                .put("move_speed", b.move_speed)
                .put("targeting_radius", b.targeting_radius)
                .put("stun_time", b.stun_time)
                .put("return_to_spawner", b.return_to_spawner)
                .put("sleep_time", b.sleep_time)
                .put("head_color", b.head_color.encode())
                .put("torso_color", b.torso_color.encode())
                .put("left_arm_color", b.left_arm_color.encode())
                .put("left_hand_color", b.left_hand_color.encode())
                .put("right_arm_color", b.right_arm_color.encode())
                .put("right_hand_color", b.right_hand_color.encode())
                .put("left_leg_color", b.left_leg_color.encode())
                .put("left_foot_color", b.left_foot_color.encode())
                .put("right_leg_color", b.right_leg_color.encode())
                .put("right_foot_color", b.right_foot_color.encode())
                .put("hats", b.hats.encode())
                .put("face", b.face)
                .put("shirt", b.shirt)
                .put("pants", b.pants)
                .put("shoes", b.shoes)
                .put("toy", b.toy);
        }
        Block::Cloud(_)
        | Block::Fence(_)
        | Block::PalmTree(_)
        | Block::Statue(_)
        | Block::AnalogClock(_)
        | Block::BleedingEye(_)
        | Block::Hyacinth(_) => {}
        Block::Decal(b) => decal_fields(r, b),
    }
}

/// Item mesh keys, then the image transform rewritten as a mesh transform.
/// Existing keys keep their position.
fn decal_fields(r: &mut Record, decal: &Decal) {
    r.put("item_id", decal.item_id).put("shaded", decal.shaded);

    let base = &decal.base;
    let mesh = decal.mesh_scale();
    let shift = decal.center_offset(mesh);
    r.put("block_scale", mesh.encode());
    if base.rotation_kinematics.enabled {
        let pivot = base.rotation_kinematics.pivot_offset + shift;
        r.put("rotation_pivot_offset", pivot.encode());
    } else {
        r.put("block_position", (base.position + shift).encode());
    }
    let tilt = decal.tilt();
    if tilt != 0.0 {
        r.put("block_rotation", (base.rotation + Vector3::new(0.0, 0.0, tilt)).encode());
    }
}
