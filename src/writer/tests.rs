use super::*;
use serde_json::json;
use tempfile::tempdir;
use time::macros::datetime;

use crate::block::{
    Block, BlockData, CompletionStar, Decal, Flower, Ladder, Magma, Portal, Primitive, Spring,
    Torch, Water,
};
use crate::core::{DecalType, GameVersion, Shape};
use crate::level::Uid;
use crate::util::{Color, Vector3};

fn level() -> Level {
    let mut level = Level::with_seed("Writer Test", "unit", 11);
    level.time_of_save = datetime!(2025-03-04 05:06:07 UTC);
    level
}

fn record(doc: &Value, uid: Uid) -> &serde_json::Map<String, Value> {
    doc["level_blocks"]["value"]
        .as_array()
        .and_then(|blocks| blocks.iter().find(|b| b["uid"] == uid))
        .and_then(Value::as_object)
        .expect("record for uid")
}

fn keys(obj: &serde_json::Map<String, Value>) -> Vec<&str> {
    obj.keys().map(String::as_str).collect()
}

#[test]
fn test_top_level_keys_in_order() -> crate::util::Result<()> {
    let doc = level().to_document()?;
    let obj = doc.as_object().expect("object");
    assert_eq!(
        keys(obj),
        [
            "GAME_VERSION",
            "TIME_OF_SAVE",
            "level_name",
            "level_description",
            "level_music",
            "level_lives",
            "level_players_damage_players",
            "level_sky",
            "level_sky_energy",
            "level_ambient_color",
            "level_weather",
            "level_fog_enabled",
            "level_fog_distance",
            "level_fog_color",
            "level_gravity",
            "level_death_plane",
            "level_blocks",
        ]
    );
    assert_eq!(doc["GAME_VERSION"], "1.1.0");
    assert_eq!(doc["TIME_OF_SAVE"], "2025-03-04 05:06:07");
    assert_eq!(doc["level_music"], json!({"type": "Int32_Array", "value": [0, 1, 2]}));
    assert_eq!(doc["level_fog_color"]["value"]["r"], 128);
    assert_eq!(doc["level_blocks"]["type"], "Container_Array");
    Ok(())
}

#[test]
fn test_time_of_save_written_in_utc() -> crate::util::Result<()> {
    let mut level = level();
    level.time_of_save = datetime!(2025-03-04 23:30:00 -02:00);
    assert_eq!(level.to_document()?["TIME_OF_SAVE"], "2025-03-05 01:30:00");
    Ok(())
}

#[test]
fn test_base_keys_without_kinematics() -> crate::util::Result<()> {
    let mut level = level();
    let uid = level.add_object(Spring::new())?;
    let doc = level.to_document()?;
    let rec = record(&doc, uid);
    assert_eq!(
        keys(rec),
        [
            "uid",
            "block_id",
            "block_name",
            "nametag",
            "block_color",
            "block_position",
            "block_rotation",
            "block_scale",
            "position_enabled",
            "rotation_enabled",
            "bounce_force",
            "can_ground_pound",
            "base_color",
            "pattern_color",
        ]
    );
    assert_eq!(rec["block_id"], Spring::ID.code());
    assert!(!rec.contains_key("block_pattern"));
    Ok(())
}

#[test]
fn test_kinematics_payload_when_enabled() -> crate::util::Result<()> {
    let mut level = level();
    let ladder = Ladder::new();
    {
        let mut track = ladder.base.positions_mut();
        *track = crate::core::PositionKinematics::timed();
        track.extend_timed([
            (Vector3::ZERO, 2.0),
            (Vector3::new(0.0, 10.0, 0.0), 0.0),
        ])?;
    }
    let mut ladder = ladder;
    ladder.base.rotation_kinematics =
        crate::core::RotationKinematics::spinning(Vector3::new(0.0, 1.0, 0.0), 30.0);
    let uid = level.add_object(ladder)?;

    let doc = level.to_document()?;
    let rec = record(&doc, uid);
    let names = keys(rec);
    let at = |k: &str| names.iter().position(|n| *n == k).expect(k);
    assert!(at("position_enabled") < at("position_points"));
    assert!(at("position_travel_times") < at("rotation_enabled"));
    assert!(at("rotation_speed") < at("block_pattern"));
    assert!(at("pattern_opacity") < at("climbing_speed"));

    assert_eq!(rec["position_travel_times"], json!({"type": "Float32_Array", "value": [2.0, 0.0]}));
    assert_eq!(rec["position_points"]["type"], "Vector3F32_Array");
    assert_eq!(rec["position_points"]["value"][1]["y"], json!(10.0));
    assert_eq!(rec["rotation_speed"], json!(30.0));
    Ok(())
}

#[test]
fn test_primitive_fields() -> crate::util::Result<()> {
    let mut level = level();
    let mut block = Primitive::shaped(Shape::Cylinder);
    block.pattern_scale = 4.0;
    let uid = level.add_object(block)?;
    let doc = level.to_document()?;
    let rec = record(&doc, uid);
    assert_eq!(rec["shape"], 2);
    assert_eq!(rec["pattern_scale"], json!(0.5));
    assert_eq!(rec["pattern_scroll"], json!({"type": "Vector2I8", "value": {"x": 0, "y": 0}}));
    assert_eq!(rec["pattern_opacity"], 60);
    assert_eq!(rec["opacity"], 255);
    Ok(())
}

#[test]
fn test_star_ids_follow_level_order() -> crate::util::Result<()> {
    let mut level = level();
    let first = level.add_object(CompletionStar::new())?;
    let second = level.add_object(CompletionStar::new())?;
    level.remove_object(first)?;
    let third = level.add_object(CompletionStar::new())?;
    let doc = level.to_document()?;
    assert_eq!(record(&doc, second)["star_id"], 0);
    assert_eq!(record(&doc, third)["star_id"], 1);
    Ok(())
}

#[test]
fn test_colors_are_typed() -> crate::util::Result<()> {
    let mut level = level();
    let flower = level.add_object(Flower::new())?;
    let torch = level.add_object(Torch::new())?;
    let water = level.add_object(Water::new())?;
    let magma = level.add_object(Magma::new())?;
    let doc = level.to_document()?;

    assert_eq!(record(&doc, flower)["capitulum_color"]["type"], "Color8");
    assert_eq!(
        record(&doc, torch)["block_pattern_color"],
        Color::rgb(255, 68, 0).encode()
    );
    assert_eq!(record(&doc, water)["block_pattern_color"]["type"], "Color8");
    assert!(record(&doc, magma).contains_key("damage_amount"));
    Ok(())
}

#[test]
fn test_shirt_decal() -> crate::util::Result<()> {
    let mut level = level();
    let decal = Decal::sized(DecalType::Shirt, 3915, 4.0, 4.25).with_position((1.0, 2.0, 3.0));
    let uid = level.add_object(decal)?;
    let doc = level.to_document()?;
    let rec = record(&doc, uid);
    assert_eq!(rec["block_id"], 1100);
    assert_eq!(rec["item_id"], 3915);
    assert_eq!(rec["block_scale"], Vector3::new(5.0, 5.0, 0.01).encode());
    assert_eq!(rec["block_position"], Vector3::new(1.0, 2.0, 3.0).encode());
    assert_eq!(rec["block_rotation"], Vector3::ZERO.encode());
    // Overridden keys stay where the base put them.
    let names = keys(rec);
    assert_eq!(names.iter().position(|k| *k == "block_scale"), Some(7));
    Ok(())
}

#[test]
fn test_pants_decal_shift_and_tilt() -> crate::util::Result<()> {
    let mut level = level();
    let pants = Decal::sized(DecalType::PantsFrontRight, 3566, 3.0, 2.1);
    let fixed = level.add_object(pants.clone())?;

    let mut spinning = pants;
    spinning.base.rotation_kinematics =
        crate::core::RotationKinematics::spinning(Vector3::new(0.0, 1.0, 0.0), 20.0);
    let spun = level.add_object(spinning)?;

    let doc = level.to_document()?;
    let rec = record(&doc, fixed);
    assert_eq!(rec["block_position"], Vector3::new(2.05, 0.05, 0.0).encode());
    assert_eq!(rec["block_rotation"], Vector3::new(0.0, 0.0, 2.0).encode());

    let rec = record(&doc, spun);
    assert_eq!(rec["block_position"], Vector3::ZERO.encode());
    assert_eq!(rec["rotation_pivot_offset"], Vector3::new(2.05, 0.05, 0.0).encode());
    Ok(())
}

#[test]
fn test_dangling_destination_still_exports() -> crate::util::Result<()> {
    let mut level = level();
    let target = level.add_object(Portal::new())?;
    let mut portal = Portal::new();
    portal.add_destination(target);
    let uid = level.add_object(portal)?;
    level.remove_object(target)?;
    let doc = level.to_document()?;
    assert_eq!(record(&doc, uid)["destinations"]["value"], json!([target]));
    Ok(())
}

#[test]
fn test_lowered_version_still_exports() -> crate::util::Result<()> {
    let mut level = level();
    let uid = level.add_object(crate::block::Tree::new())?;
    level.game_version = GameVersion::new(1, 0, 14);
    let doc = level.to_document()?;
    assert_eq!(doc["GAME_VERSION"], "1.0.14");
    assert_eq!(record(&doc, uid)["leaves"], true);
    Ok(())
}

#[test]
fn test_non_finite_float_is_rejected() -> crate::util::Result<()> {
    let mut level = level();
    let uid = level.add_object(Primitive::new().with_position((f64::NAN, 0.0, 0.0)))?;
    let err = level.to_document().unwrap_err();
    assert!(matches!(
        err,
        crate::util::Error::InvalidValue { ref field, .. } if field == &format!("Primitive {}: block_position", uid)
    ));

    level.remove_object(uid)?;
    level.settings.gravity = f64::INFINITY;
    let err = level.to_document().unwrap_err();
    assert!(matches!(
        err,
        crate::util::Error::InvalidValue { ref field, .. } if field == "level: level_gravity"
    ));
    Ok(())
}

#[test]
fn test_field_checks_run_at_export() -> crate::util::Result<()> {
    let mut level = level();
    let uid = level.add_object(Primitive::new())?;
    if let Some(Block::Primitive(block)) = level.get_object_mut(uid) {
        block.pattern_scale = 0.0;
    }
    let dir = tempdir()?;
    let err = level.export(dir.path().join("bad")).unwrap_err();
    assert!(matches!(err, crate::util::Error::InvalidValue { ref field, .. } if field == "pattern_scale"));
    assert!(!dir.path().join("bad.bopjson").exists());
    Ok(())
}

#[test]
fn test_export_appends_extension() -> crate::util::Result<()> {
    let dir = tempdir()?;
    let mut level = level();
    level.add_object(Primitive::new())?;
    let path = level.export(dir.path().join("my.level"))?;
    assert_eq!(path, dir.path().join("my.level.bopjson"));

    let text = std::fs::read_to_string(&path)?;
    let parsed: Value = serde_json::from_str(&text)?;
    assert_eq!(parsed, level.to_document()?);
    assert!(!text.contains('\n'));
    Ok(())
}

#[test]
fn test_export_is_idempotent() -> crate::util::Result<()> {
    let dir = tempdir()?;
    let mut level = level();
    level.add_objects([Block::from(Spring::new()), Block::from(Ladder::new())])?;
    let first = std::fs::read(level.export(dir.path().join("a"))?)?;
    let second = std::fs::read(level.export(dir.path().join("a"))?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_export_with_options() -> crate::util::Result<()> {
    let dir = tempdir()?;
    let level = level();
    let opts = ExportOptions {
        extension: "json".into(),
        pretty: true,
        ..ExportOptions::default()
    };
    let path = level.export_with(dir.path().join("pretty"), &opts)?;
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    assert!(std::fs::read_to_string(&path)?.contains("\n  \"GAME_VERSION\""));
    Ok(())
}

#[test]
fn test_unwritable_target_is_io_error() {
    let dir = tempdir().unwrap();
    let err = level().export(dir.path().join("no/such/dir/level")).unwrap_err();
    assert!(matches!(err, crate::util::Error::Io(_)));
}
