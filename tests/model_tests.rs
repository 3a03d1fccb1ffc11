//! Integration tests for the level object model: range checks, UIDs,
//! copies and position kinematics.

use std::collections::HashSet;

use bopjson::prelude::*;

#[test]
fn test_out_of_range_values_are_rejected() {
    let mut block = Primitive::new();

    let err = block.set_attribute("opacity", AttrValue::Int(256)).unwrap_err();
    assert!(matches!(err, Error::Overflow { .. }));
    let err = block.set_attribute("opacity", AttrValue::Int(-1)).unwrap_err();
    assert!(matches!(err, Error::Underflow { .. }));
    assert_eq!(block.opacity, 255, "rejected value must not be stored");

    assert!(Color::new(0, 300, 0).is_err());
    assert!(Color::new(0, 255, 0).is_ok());

    let mut music = Int32Array::new();
    assert!(music.push(i64::from(i32::MAX) + 1).is_err());
    assert!(music.is_empty());

    let err = block.set_attribute("opacity", AttrValue::Bool(true)).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    let err = block.set_attribute("no_such_field", AttrValue::Int(1)).unwrap_err();
    assert!(matches!(err, Error::UnknownAttribute { .. }));
}

#[test]
fn test_uids_are_unique_and_non_zero() {
    let mut level = Level::new("Uids", "");
    let mut seen = HashSet::new();
    for i in 0..1000 {
        let uid = level
            .add_object(Primitive::new().with_position((i as f64, 0.0, 0.0)))
            .unwrap();
        assert_ne!(uid, 0);
        assert!(seen.insert(uid), "duplicate uid {}", uid);
    }
    assert_eq!(level.len(), 1000);
}

#[test]
fn test_deep_copy_is_independent() {
    let source = Primitive::new();
    source.base.positions_mut().enabled = true;
    source
        .base
        .positions_mut()
        .add_point(Vector3::ZERO, 1.0)
        .unwrap();

    let copy = source
        .copy_with(CopyMode::Deep, [("name", AttrValue::from("Copy"))])
        .unwrap();
    copy.base
        .positions_mut()
        .add_point(Vector3::new(0.0, 3.0, 0.0), 2.0)
        .unwrap();

    assert_eq!(copy.base.name, "Copy");
    assert_eq!(source.base.name, "Generated Block");
    assert_eq!(source.base.positions().len(), 1);
    assert_eq!(copy.base.positions().len(), 2);
}

#[test]
fn test_clone_for_template_reuse() {
    let mut level = Level::with_seed("Templates", "", 12);
    let template = Primitive::new();
    template
        .base
        .positions_mut()
        .add_point(Vector3::ZERO, 1.0)
        .unwrap();

    let a = level.add_object(template.clone()).unwrap();
    let b = level.add_object(template.clone()).unwrap();
    level
        .get_object_mut(a)
        .unwrap()
        .base()
        .positions_mut()
        .add_point(Vector3::new(0.0, 2.0, 0.0), 1.0)
        .unwrap();

    let len = |uid| level.get_object(uid).unwrap().base().positions().len();
    assert_eq!(len(a), 2);
    assert_eq!(len(b), 1, "clones must not share a track");
    assert_eq!(template.base.positions().len(), 1);
}

#[test]
fn test_shallow_copy_shares_track() {
    let source = Spring::new();
    let copy = source.copy_with(CopyMode::Shallow, Vec::<(&str, AttrValue)>::new()).unwrap();
    copy.base
        .positions_mut()
        .add_point(Vector3::new(1.0, 0.0, 0.0), 1.0)
        .unwrap();
    assert_eq!(source.base.positions().len(), 1);
}

#[test]
fn test_failed_override_aborts_copy() {
    let source = Primitive::new();
    let result = source.copy_with(
        CopyMode::Deep,
        [("name", AttrValue::from("ok")), ("opacity", AttrValue::Int(999))],
    );
    assert!(result.is_err());
    assert_eq!(source.base.name, "Generated Block");
}

#[test]
fn test_speed_derived_durations() {
    let mut track = PositionKinematics::with_speed(5.0).unwrap();
    track
        .extend_points([
            Vector3::ZERO,
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::new(10.0, 0.0, 5.0),
        ])
        .unwrap();
    // Segments: 0 -> 1 is 10 units, 1 -> 2 is 5, 2 -> 0 closes the loop.
    let closing = Vector3::new(10.0, 0.0, 5.0).magnitude() / 5.0;
    assert_eq!(track.travel_times(), &[2.0, 1.0, closing]);

    // Appending one more point rewrites the segment that used to close the loop.
    track.add_point(Vector3::new(0.0, 0.0, 5.0), 99.0).unwrap();
    assert_eq!(track.travel_time(2).unwrap(), 2.0);
    assert_eq!(track.travel_time(3).unwrap(), 1.0);

    assert!(track.extend_timed([(Vector3::ZERO, 1.0)]).is_err());
}

#[test]
fn test_zero_speed_keeps_durations() {
    let mut track = PositionKinematics::with_speed(2.0).unwrap();
    track
        .extend_points([Vector3::ZERO, Vector3::new(4.0, 0.0, 0.0)])
        .unwrap();
    assert_eq!(track.travel_times(), &[2.0, 2.0]);

    track.set_travel_speed(0.0).unwrap();
    assert_eq!(track.timing(), PositionTiming::TimeExplicit);
    assert_eq!(track.travel_times(), &[2.0, 2.0]);

    track.add_point(Vector3::new(0.0, 1.0, 0.0), 7.5).unwrap();
    assert_eq!(track.travel_times(), &[2.0, 2.0, 7.5]);
    assert!(track.set_travel_speed(-1.0).is_err());
}

#[test]
fn test_star_ids_and_removal() {
    let mut level = Level::with_seed("Stars", "", 5);
    let a = level.add_object(CompletionStar::new()).unwrap();
    let b = level.add_object(CompletionStar::new()).unwrap();
    assert_eq!(level.star_id(b), Some(1));

    let removed = level.remove_object(a).unwrap();
    assert!(matches!(removed, Block::CompletionStar(_)));
    assert_eq!(level.star_id(b), Some(0));
    assert_eq!(level.star_count(), 1);
    assert!(matches!(level.remove_object(a), Err(Error::ObjectNotFound(_))));
}

#[test]
fn test_portal_destinations_checked_on_add() {
    let mut level = Level::with_seed("Portals", "", 8);
    let spring = level.add_object(Spring::new()).unwrap();
    let target = level.add_object(Portal::new()).unwrap();

    let mut good = Portal::new();
    good.add_destination(target);
    assert!(level.add_object(good).is_ok());

    let mut bad = Portal::new();
    bad.add_destination(spring);
    let err = level.add_object(bad).unwrap_err();
    assert!(matches!(err, Error::InvalidDestination { .. }));
    assert_eq!(level.len(), 3);
}

#[test]
fn test_newer_kinds_need_newer_version() {
    let mut level = Level::with_seed("Old", "", 2);
    level.game_version = GameVersion::new(1, 0, 14);
    assert!(matches!(
        level.add_object(Tree::new()),
        Err(Error::UnsupportedVersion { .. })
    ));
    assert!(level.add_object(Fence::new()).is_ok());
}
