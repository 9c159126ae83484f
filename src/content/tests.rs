//! Content domain: tests for RON parsing of settings and levels.

use super::loader::{parse_ron, parse_settings};
use super::{LevelDef, ToolType};
use crate::movement::{ControllerSettings, ProbeStyle, SkinTest};

#[test]
fn test_parse_full_controller_settings() {
    let settings = parse_settings(
        r#"(
            max_speed: 320.0,
            max_speed_air: 160.0,
            jump_scale: 720.0,
            jump_wait_time: 0.25,
            skin_width: 2.0,
            ground_mask: 2,
            epsilon: 0.1,
            probe_style: OverlapCircle(radius: 6.0),
            skin_test: SquaredDistance,
        )"#,
        "controller.ron",
    )
    .unwrap();

    assert_eq!(settings.max_speed, 320.0);
    assert_eq!(settings.max_speed_air, 160.0);
    assert_eq!(settings.probe_style, ProbeStyle::OverlapCircle { radius: 6.0 });
    assert_eq!(settings.skin_test, SkinTest::SquaredDistance);
}

#[test]
fn test_missing_settings_fields_fall_back_to_defaults() {
    let settings = parse_settings("(max_speed: 20.0)", "controller.ron").unwrap();

    assert_eq!(settings.max_speed, 20.0);
    assert_eq!(
        settings.jump_wait_time,
        ControllerSettings::default().jump_wait_time
    );
    assert_eq!(settings.probe_style, ProbeStyle::BoxCast);
}

#[test]
fn test_invalid_settings_are_rejected_at_load() {
    let error = parse_settings("(skin_width: -1.0)", "controller.ron").unwrap_err();

    assert_eq!(error.file, "controller.ron");
    assert!(error.message.contains("skin_width"), "{}", error.message);
}

#[test]
fn test_malformed_ron_reports_the_file() {
    let error = parse_settings("(max_speed: fast)", "bad.ron").unwrap_err();

    assert_eq!(error.file, "bad.ron");
    assert!(error.message.starts_with("Parse error"));
    assert!(error.to_string().starts_with("Failed to load bad.ron"));
}

#[test]
fn test_parse_level_with_optional_pieces() {
    let level: LevelDef = parse_ron(
        r#"(
            schema_version: 1,
            name: "Tiny",
            world_min: (0.0, 0.0),
            world_max: (100.0, 50.0),
            backdrop_color: (0.0, 0.0, 0.0),
            player: (
                position: (10.0, 10.0),
                size: (2.0, 4.0),
                color: (1.0, 1.0, 1.0),
                starting_tool: Key,
            ),
            platforms: [
                (position: (50.0, 0.0), size: (100.0, 2.0), color: (0.5, 0.5, 0.5)),
            ],
            forges: [],
            exit: None,
            finish_line: (position: (90.0, 5.0), size: (1.0, 10.0), color: (1.0, 1.0, 0.0)),
        )"#,
        "level.ron",
    )
    .unwrap();

    assert_eq!(level.player.starting_tool, ToolType::Key);
    assert_eq!(level.platforms.len(), 1);
    assert!(level.exit.is_none());
    assert!(level.finish_line.is_some());

    let bounds = level.world_bounds();
    assert_eq!(bounds.width(), 100.0);
    assert_eq!(bounds.height(), 50.0);
}

#[test]
fn test_shipped_data_files_load() {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let content = super::load_all_content(&manifest.join(super::DATA_DIR)).unwrap();

    assert!(content.settings.validate().is_ok());
    assert!(!content.level.platforms.is_empty());
}

#[test]
fn test_missing_directory_reports_both_files() {
    let errors = super::load_all_content(std::path::Path::new("does/not/exist")).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors[0].message.starts_with("IO error"));
}
