//! Config loader unit tests.

use super::*;
use crate::model::Timings;
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("letterbox_config_tests");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn defaults_are_sane() {
    let config = ResolvedConfig::default();
    assert_eq!(config.theme, "classic");
    assert!(!config.auto_open);
    assert_eq!(config.timings, Timings::default());
}

#[test]
fn missing_file_is_not_an_error() {
    let result = load_config_file("/nonexistent/letterbox/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn merge_with_no_file_yields_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn file_values_override_defaults() {
    let file = ConfigFile {
        theme: Some("midnight".to_string()),
        auto_open: Some(true),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.theme, "midnight");
    assert!(resolved.auto_open);
    // Untouched fields keep their defaults.
    assert_eq!(resolved.timings, Timings::default());
}

#[test]
fn timings_section_overrides_individual_durations() {
    let file = ConfigFile {
        timings: Some(TimingsSection {
            flap_open_ms: Some(600),
            letter_slide_ms: None,
            zoom_ms: Some(150),
            envelope_move_ms: None,
        }),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.timings.flap_open, Duration::from_millis(600));
    assert_eq!(resolved.timings.zoom, Duration::from_millis(150));
    // Unset durations keep defaults.
    assert_eq!(resolved.timings.letter_slide, Duration::from_millis(1100));
    assert_eq!(resolved.timings.envelope_move, Duration::from_millis(500));
}

#[test]
fn full_config_file_parses() {
    let path = write_temp_config(
        "full.toml",
        r#"
            theme = "midnight"
            auto_open = true
            log_file_path = "/tmp/letterbox-test.log"

            [timings]
            flap_open_ms = 800
            letter_slide_ms = 900
        "#,
    );
    let config = load_config_file(&path).expect("load").expect("present");
    assert_eq!(config.theme.as_deref(), Some("midnight"));
    assert_eq!(config.auto_open, Some(true));
    let timings = config.timings.expect("timings section");
    assert_eq!(timings.flap_open_ms, Some(800));
    assert_eq!(timings.letter_slide_ms, Some(900));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = write_temp_config("broken.toml", "theme = [not toml");
    let err = load_config_file(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let path = write_temp_config("unknown.toml", "letter_speed = 9000");
    let err = load_config_file(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_duration_is_rejected() {
    let path = write_temp_config(
        "zero.toml",
        r#"
            [timings]
            flap_open_ms = 0
        "#,
    );
    let err = load_config_file(&path).expect_err("should fail");
    assert!(matches!(
        err,
        ConfigError::ZeroDuration {
            field: "flap_open_ms",
            ..
        }
    ));
}

#[test]
#[serial(letterbox_env)]
fn env_overrides_file_values() {
    std::env::set_var("LETTERBOX_THEME", "mono");
    std::env::set_var("LETTERBOX_AUTO_OPEN", "true");

    let merged = merge_config(Some(ConfigFile {
        theme: Some("midnight".to_string()),
        auto_open: Some(false),
        ..ConfigFile::default()
    }));
    let with_env = apply_env_overrides(merged);

    std::env::remove_var("LETTERBOX_THEME");
    std::env::remove_var("LETTERBOX_AUTO_OPEN");

    assert_eq!(with_env.theme, "mono");
    assert!(with_env.auto_open);
}

#[test]
#[serial(letterbox_env)]
fn absent_env_vars_change_nothing() {
    std::env::remove_var("LETTERBOX_THEME");
    std::env::remove_var("LETTERBOX_AUTO_OPEN");

    let config = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config, ResolvedConfig::default());
}

#[test]
fn cli_overrides_beat_everything() {
    let merged = merge_config(Some(ConfigFile {
        theme: Some("midnight".to_string()),
        ..ConfigFile::default()
    }));
    let with_cli = apply_cli_overrides(merged, Some("mono".to_string()), Some(true));
    assert_eq!(with_cli.theme, "mono");
    assert!(with_cli.auto_open);
}

#[test]
fn cli_none_preserves_lower_precedence_values() {
    let merged = merge_config(Some(ConfigFile {
        theme: Some("midnight".to_string()),
        ..ConfigFile::default()
    }));
    let with_cli = apply_cli_overrides(merged, None, None);
    assert_eq!(with_cli.theme, "midnight");
    assert!(!with_cli.auto_open);
}
