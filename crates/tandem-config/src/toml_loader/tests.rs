//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tandem_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, tandem_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 9001

[game]
swap_time_to_speak_secs = 15
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.server.port, 9001);
    assert_eq!(config.game.swap_time_to_speak_secs, 15);
    // Defaults preserved
    assert_eq!(config.server.path, "/ws");
    assert_eq!(config.game.time_to_speak_secs, 600);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tandem_common::ConfigError::ParseError(_)));
}

#[test]
fn out_of_range_values_return_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 7000
outbound_queue_capacity = 0
"#,
    )
    .unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tandem_common::ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("server.outbound_queue_capacity"));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tandem").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.server.port, 8082);
    assert_eq!(config.game.start_countdown_secs, 30);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::TandemConfig;

    let config: TandemConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tandem"));
        assert!(path_str.ends_with("config.toml"));
    }
}
