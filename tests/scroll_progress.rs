use std::time::Duration;

use marquee::scroll::{Follower, ProgressSpan, SceneError, SceneSet, SpanError};

#[test]
fn progress_clamps_outside_the_span() {
    let span = ProgressSpan::new(100.0, 300.0).unwrap();
    assert_eq!(span.progress(0.0), 0.0);
    assert_eq!(span.progress(100.0), 0.0);
    assert_eq!(span.progress(200.0), 0.5);
    assert_eq!(span.progress(300.0), 1.0);
    assert_eq!(span.progress(1e6), 1.0);
}

#[test]
fn empty_span_is_rejected() {
    assert!(matches!(
        ProgressSpan::new(5.0, 5.0),
        Err(SpanError::Empty { .. })
    ));
    assert!(matches!(
        ProgressSpan::new(9.0, 2.0),
        Err(SpanError::Empty { .. })
    ));
}

#[test]
fn three_scene_resolution_is_lower_inclusive() {
    let scenes = SceneSet::from_cuts(&[0.33, 0.66]).unwrap();
    assert_eq!(scenes.active(0.0), 0);
    assert_eq!(scenes.active(0.2), 0);
    // A boundary value belongs to the scene that starts there.
    assert_eq!(scenes.active(0.33), 1);
    assert_eq!(scenes.active(0.5), 1);
    assert_eq!(scenes.active(0.66), 2);
    assert_eq!(scenes.active(1.0), 2);
}

#[test]
fn out_of_range_progress_resolves_to_the_edge_scenes() {
    let scenes = SceneSet::equal(4).unwrap();
    assert_eq!(scenes.active(-3.0), 0);
    assert_eq!(scenes.active(42.0), 3);
}

#[test]
fn equal_split_covers_the_unit_interval() {
    let scenes = SceneSet::equal(3).unwrap();
    assert_eq!(scenes.len(), 3);
    assert_eq!(scenes.ranges()[0].start, 0.0);
    assert_eq!(scenes.ranges()[2].end, 1.0);
    for pair in scenes.ranges().windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn weighted_scenes_share_progress_proportionally() {
    let scenes = SceneSet::from_weights(&[1.0, 3.0]).unwrap();
    assert_eq!(scenes.active(0.1), 0);
    assert_eq!(scenes.active(0.25), 1);
    assert_eq!(scenes.ranges()[1].end, 1.0);
}

#[test]
fn local_progress_maps_within_the_active_scene() {
    let scenes = SceneSet::equal(2).unwrap();
    assert_eq!(scenes.local_progress(0.25), 0.5);
    assert_eq!(scenes.local_progress(0.75), 0.5);
}

#[test]
fn invalid_scene_sets_are_rejected() {
    assert_eq!(SceneSet::equal(0).unwrap_err(), SceneError::NoScenes);
    assert!(matches!(
        SceneSet::from_cuts(&[0.0]).unwrap_err(),
        SceneError::CutOutOfRange(_)
    ));
    assert_eq!(
        SceneSet::from_cuts(&[0.6, 0.4]).unwrap_err(),
        SceneError::UnorderedCuts
    );
    assert_eq!(
        SceneSet::from_weights(&[1.0, -2.0]).unwrap_err(),
        SceneError::BadWeight
    );
}

#[test]
fn follower_lags_behind_the_raw_value() {
    let mut follower = Follower::new(Duration::from_millis(250));
    let value = follower.advance(1.0, Duration::from_millis(50));
    assert!(value > 0.0 && value < 1.0, "partial step, got {value}");
}

#[test]
fn follower_converges_with_repeated_steps() {
    let mut follower = Follower::new(Duration::from_millis(250));
    for _ in 0..200 {
        follower.advance(1.0, Duration::from_millis(50));
    }
    assert!((follower.value() - 1.0).abs() < 1e-3);
}

#[test]
fn snap_jumps_without_easing() {
    let mut follower = Follower::new(Duration::from_millis(250));
    assert_eq!(follower.snap(0.8), 0.8);
    assert_eq!(follower.value(), 0.8);
}

#[test]
fn zero_time_constant_always_snaps() {
    let mut follower = Follower::new(Duration::ZERO);
    assert_eq!(follower.advance(0.6, Duration::from_millis(1)), 0.6);
}
