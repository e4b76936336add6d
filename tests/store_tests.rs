//! Keyframe Store Tests
//!
//! Tests for:
//! - Node registration and reset on re-initialisation
//! - Recording: one keyframe per channel, no dedup, no range check
//! - Unknown nodes: silent no-op on write, empty on read
//! - Exact-frame lookups

use glam::Vec3;

use kinema::animation::{Channel, KeyframeStore, Transform};

fn sample_transform(seed: f32) -> Transform {
    Transform::new(
        Vec3::new(seed, seed + 1.0, seed + 2.0),
        Vec3::new(0.1 * seed, 0.2 * seed, 0.3 * seed),
        Vec3::splat(1.0 + seed),
    )
}

#[test]
fn init_node_creates_empty_tracks() {
    let mut store = KeyframeStore::new();
    store.init_node("Body");

    assert!(store.contains_node("Body"));
    assert_eq!(store.node_count(), 1);
    for channel in Channel::ALL {
        assert!(store.track("Body", channel).is_empty());
    }
}

#[test]
fn record_appends_one_keyframe_per_channel() {
    let mut store = KeyframeStore::new();
    store.init_node("Head");

    let t = sample_transform(2.0);
    assert!(store.record_keyframe("Head", 12, &t));

    for channel in Channel::ALL {
        let track = store.track("Head", channel);
        assert_eq!(track.len(), 1);
        assert_eq!(track[0].frame, 12);
        assert_eq!(track[0].value, t.channel(channel));
    }
}

#[test]
fn record_keeps_duplicates_in_insertion_order() {
    let mut store = KeyframeStore::new();
    store.init_node("Leg");

    store.record_keyframe("Leg", 5, &sample_transform(1.0));
    store.record_keyframe("Leg", 5, &sample_transform(2.0));
    store.record_keyframe("Leg", 1, &sample_transform(3.0));

    let frames: Vec<u32> = store
        .track("Leg", Channel::Position)
        .iter()
        .map(|kf| kf.frame)
        .collect();
    assert_eq!(frames, vec![5, 5, 1]);
}

#[test]
fn record_accepts_out_of_range_frames() {
    let mut store = KeyframeStore::new();
    store.init_node("Tail");

    assert!(store.record_keyframe("Tail", 10_000, &Transform::IDENTITY));
    assert_eq!(store.track("Tail", Channel::Scale)[0].frame, 10_000);
}

#[test]
fn record_unknown_node_is_noop() {
    let mut store = KeyframeStore::new();
    store.init_node("Known");

    assert!(!store.record_keyframe("Ghost", 0, &Transform::IDENTITY));
    assert!(!store.contains_node("Ghost"));
    assert_eq!(store.node_count(), 1);
    for channel in Channel::ALL {
        assert!(store.track("Ghost", channel).is_empty());
    }
}

#[test]
fn reinit_resets_tracks() {
    let mut store = KeyframeStore::new();
    store.init_node("Body");
    store.record_keyframe("Body", 0, &sample_transform(0.0));
    store.record_keyframe("Body", 10, &sample_transform(1.0));

    store.init_node("Body");
    assert_eq!(store.node_count(), 1);
    assert!(store.track("Body", Channel::Position).is_empty());
}

#[test]
fn track_reads_are_idempotent() {
    let mut store = KeyframeStore::new();
    store.init_node("Body");
    store.record_keyframe("Body", 3, &sample_transform(4.0));
    store.record_keyframe("Body", 7, &sample_transform(5.0));

    let first = store.track("Body", Channel::Rotation).to_vec();
    let second = store.track("Body", Channel::Rotation).to_vec();
    assert_eq!(first, second);
}

#[test]
fn keyframe_at_exact_frame() {
    let mut store = KeyframeStore::new();
    store.init_node("Body");
    store.record_keyframe("Body", 4, &Transform::from_position(Vec3::X));
    store.record_keyframe("Body", 4, &Transform::from_position(Vec3::Y));

    assert_eq!(store.keyframe_at("Body", Channel::Position, 4), Some(Vec3::X));
    assert_eq!(store.keyframe_at("Body", Channel::Position, 5), None);
    assert_eq!(store.keyframe_at("Ghost", Channel::Position, 4), None);
}

#[test]
fn clear_drops_all_nodes() {
    let mut store = KeyframeStore::new();
    store.init_node("A");
    store.init_node("B");

    let mut ids: Vec<&str> = store.node_ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["A", "B"]);

    store.clear();
    assert_eq!(store.node_count(), 0);
    assert!(store.node_tracks("A").is_none());
}

#[test]
fn record_non_finite_transform_is_noop() {
    let mut store = KeyframeStore::new();
    store.init_node("Body");

    let bad_scale = Transform::new(Vec3::ZERO, Vec3::ZERO, Vec3::splat(f32::INFINITY));
    let bad_position = Transform::from_position(Vec3::new(f32::NAN, 0.0, 0.0));
    assert!(!store.record_keyframe("Body", 0, &bad_scale));
    assert!(!store.record_keyframe("Body", 1, &bad_position));

    for channel in Channel::ALL {
        assert!(store.track("Body", channel).is_empty());
    }
}

#[test]
fn node_tracks_serialize_as_keyframe_arrays() {
    let mut store = KeyframeStore::new();
    store.init_node("Body");
    store.record_keyframe(
        "Body",
        4,
        &Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::ONE),
    );

    let tracks = store.node_tracks("Body").expect("registered");
    let json = serde_json::to_value(tracks).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "position": [{ "frame": 4, "value": [1.0, 2.0, 3.0] }],
            "rotation": [{ "frame": 4, "value": [0.0, 0.0, 0.0] }],
            "scale": [{ "frame": 4, "value": [1.0, 1.0, 1.0] }],
        })
    );
}
