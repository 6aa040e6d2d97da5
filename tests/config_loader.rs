use std::fs;

use marquee::config::{ConfigError, MarqueeConfig};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("marquee.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = MarqueeConfig::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.tick_ms, MarqueeConfig::default().tick_ms);
    assert!(!config.scenes.panels.is_empty());
}

#[test]
fn defaults_are_valid() {
    MarqueeConfig::default().validate().unwrap();
}

#[test]
fn garbage_reports_a_parse_error() {
    let (_dir, path) = write_config("this is not { toml");
    assert!(matches!(
        MarqueeConfig::load_from(&path).unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}

#[test]
fn partial_files_fall_back_to_field_defaults() {
    let (_dir, path) = write_config(
        r#"
[typing]
text = "custom intro"
"#,
    );
    let config = MarqueeConfig::load_from(&path).unwrap();
    assert_eq!(config.typing.text, "custom intro");
    assert_eq!(config.typing.char_ms, 50);
    assert_eq!(config.rotation.erase_divisor, 2);
}

#[test]
fn zero_char_interval_is_rejected_at_load() {
    let (_dir, path) = write_config(
        r#"
[typing]
char_ms = 0
"#,
    );
    assert!(matches!(
        MarqueeConfig::load_from(&path).unwrap_err(),
        ConfigError::ValidationError { .. }
    ));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let (_dir, path) = write_config("tick_ms = 0\n");
    assert!(matches!(
        MarqueeConfig::load_from(&path).unwrap_err(),
        ConfigError::ValidationError { .. }
    ));
}

#[test]
fn threshold_outside_unit_range_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[scenes]
threshold = 1.5
"#,
    );
    assert!(matches!(
        MarqueeConfig::load_from(&path).unwrap_err(),
        ConfigError::ValidationError { .. }
    ));
}

#[test]
fn empty_panel_list_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[scenes]
panels = []
"#,
    );
    assert!(matches!(
        MarqueeConfig::load_from(&path).unwrap_err(),
        ConfigError::ValidationError { .. }
    ));
}

#[test]
fn negative_panel_weight_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[[scenes.panels]]
title = "Only"
body = "text"
weight = -1.0
"#,
    );
    assert!(matches!(
        MarqueeConfig::load_from(&path).unwrap_err(),
        ConfigError::ValidationError { .. }
    ));
}

#[test]
fn custom_panels_build_a_matching_scene_set() {
    let (_dir, path) = write_config(
        r#"
[[scenes.panels]]
title = "One"
body = "first"

[[scenes.panels]]
title = "Two"
body = "second"
weight = 3.0
"#,
    );
    let config = MarqueeConfig::load_from(&path).unwrap();
    let scenes = config.scenes.scene_set().unwrap();
    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes.active(0.1), 0);
    assert_eq!(scenes.active(0.5), 1);
}
