//! Integration tests for configuration management

use plan_board::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.export_dir.is_empty(),
        "Default export_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
export_dir = "./exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.export_dir, "./exports");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.export_dir, ""); // Default empty
}

#[test]
fn test_config_from_toml_invalid() {
    assert!(Config::from_toml("this is not toml [").is_err());
}

#[test]
fn test_variable_expansion() {
    let toml_str = r#"
[logging]
level = "warn"
file = "$PLANBOARD/logs/planboard.log"

[paths]
export_dir = "$PLANBOARD/exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert!(!config.logging.file.contains("$PLANBOARD"));
    assert!(!config.paths.export_dir.contains("$PLANBOARD"));
    assert!(config.paths.export_dir.ends_with("exports"));
}

#[test]
fn test_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"

[paths]
"#,
    )
    .expect("Failed to parse TOML");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed);
    assert_eq!(config.logging.level, "error"); // Preserved
    assert_eq!(config.paths.export_dir, defaults.paths.export_dir); // Filled
}

#[test]
fn test_merge_defaults_no_change_when_complete() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        export_dir: Some("/custom/exports".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.export_dir, "/custom/exports");
}

#[test]
fn test_apply_empty_overrides_is_noop() {
    let mut config = Config::from_defaults();
    let before_level = config.logging.level.clone();

    config.apply_overrides(&ConfigOverrides::default());

    assert_eq!(config.logging.level, before_level);
}

#[test]
fn test_get_and_set_round_trip() {
    let mut config = Config::from_defaults();

    config.set("level", "info").expect("set should succeed");
    assert_eq!(config.get("level"), Some("info".to_string()));

    config.set("verbose", "true").expect("set should succeed");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config
        .set("export-dir", "/tmp/exports")
        .expect("set should succeed");
    assert_eq!(config.get("export_dir"), Some("/tmp/exports".to_string()));
}

#[test]
fn test_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("nonsense_key", "value").is_err());
    assert!(config.get("nonsense_key").is_none());
}

#[test]
fn test_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("set should succeed");
    config.unset("level", &defaults).expect("unset should succeed");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert!(config.unset("nonsense_key", &defaults).is_err());
}
