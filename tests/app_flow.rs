use std::time::{Duration, Instant};

use marquee::config::MarqueeConfig;
use marquee::ui::app::App;

const VIEW_ROWS: u16 = 10;

fn app(config: MarqueeConfig) -> (App, Instant) {
    let t0 = Instant::now();
    let mut app = App::new(config, false, t0).expect("valid config");
    app.on_resize(VIEW_ROWS);
    (app, t0)
}

#[test]
fn starts_at_zero_progress_on_the_first_scene() {
    let (app, _) = app(MarqueeConfig::default());
    assert_eq!(app.raw_progress(), 0.0);
    assert_eq!(app.active_scene(), 0);
    assert_eq!(app.scene_count(), app.panel_count());
}

#[test]
fn first_panel_reveals_immediately_others_stay_gated() {
    let (app, _) = app(MarqueeConfig::default());
    assert!(app.panel_triggered(0));
    // The last panel is far below the fold.
    assert!(!app.panel_triggered(app.panel_count() - 1));
}

#[test]
fn unscrolled_panels_never_reveal() {
    let (mut app, t0) = app(MarqueeConfig::default());
    // Plenty of time passes, but nothing scrolls.
    for i in 1..50 {
        app.on_tick(t0 + Duration::from_millis(33 * i));
    }
    assert!(!app.panel_triggered(app.panel_count() - 1));
}

#[test]
fn scrolling_to_the_bottom_reaches_full_progress() {
    let (mut app, _) = app(MarqueeConfig::default());
    app.scroll_to(app.max_scroll());
    assert_eq!(app.raw_progress(), 1.0);
    assert_eq!(app.active_scene(), app.scene_count() - 1);
    assert!(app.panel_triggered(app.panel_count() - 1));
}

#[test]
fn fire_once_reveals_survive_scrolling_away() {
    let (mut app, _) = app(MarqueeConfig::default());
    app.scroll_to(app.max_scroll());
    app.scroll_to(0);
    // Every gate that ever opened stays open.
    for i in 0..app.panel_count() {
        assert!(app.panel_triggered(i), "panel {i} lost its reveal");
    }
}

#[test]
fn continuous_mode_replays_the_typewriter_on_reentry() {
    let mut config = MarqueeConfig::default();
    config.scenes.fire_once = false;
    let (mut app, t0) = app(config);

    // Let the lead typewriter make progress.
    app.on_tick(t0 + Duration::from_millis(500));
    assert!(app.typing_machine().shown() > 0);

    // Scroll it out of view, then back in: the entrance replays.
    app.scroll_to(app.max_scroll());
    assert!(!app.panel_active(0));
    app.scroll_to(0);
    assert!(app.panel_active(0));
    assert_eq!(app.typing_machine().shown(), 0);
}

#[test]
fn follower_trails_raw_progress_under_full_motion() {
    let (mut app, t0) = app(MarqueeConfig::default());
    app.scroll_to(app.max_scroll());
    app.on_tick(t0 + Duration::from_millis(33));
    let smoothed = app.smoothed_progress();
    assert!(smoothed > 0.0 && smoothed < 1.0, "got {smoothed}");
}

#[test]
fn reduced_motion_snaps_the_follower() {
    let t0 = Instant::now();
    let mut app = App::new(MarqueeConfig::default(), true, t0).expect("valid config");
    app.on_resize(VIEW_ROWS);
    assert!(app.reduced_motion());

    app.scroll_to(app.max_scroll());
    app.on_tick(t0 + Duration::from_millis(33));
    assert_eq!(app.smoothed_progress(), app.raw_progress());
}

#[test]
fn forced_preference_ignores_live_updates() {
    let t0 = Instant::now();
    let mut app = App::new(MarqueeConfig::default(), true, t0).expect("valid config");
    app.set_reduced_motion(false);
    assert!(app.reduced_motion());
}

#[test]
fn live_updates_apply_when_not_forced() {
    let (mut app, _) = app(MarqueeConfig::default());
    assert!(!app.reduced_motion());
    app.set_reduced_motion(true);
    assert!(app.reduced_motion());
}

#[test]
fn resize_clamps_the_scroll_offset() {
    let (mut app, _) = app(MarqueeConfig::default());
    app.scroll_to(app.max_scroll());
    let before = app.scroll();
    app.on_resize(VIEW_ROWS + 8);
    assert!(app.scroll() <= before);
    assert_eq!(app.scroll(), app.max_scroll());
}

#[test]
fn quit_is_requested_once() {
    let (mut app, _) = app(MarqueeConfig::default());
    assert!(!app.should_quit());
    app.request_quit();
    assert!(app.should_quit());
}
