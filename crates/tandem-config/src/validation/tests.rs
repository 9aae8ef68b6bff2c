//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = TandemConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_port() {
    let mut config = TandemConfig::default();
    config.server.port = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
}

#[test]
fn catches_empty_host() {
    let mut config = TandemConfig::default();
    config.server.host = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.host"));
}

#[test]
fn catches_relative_path() {
    let mut config = TandemConfig::default();
    config.server.path = "ws".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.path"));
}

#[test]
fn catches_zero_queue_capacity() {
    let mut config = TandemConfig::default();
    config.server.outbound_queue_capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.outbound_queue_capacity"));
}

#[test]
fn catches_negative_countdown() {
    let mut config = TandemConfig::default();
    config.game.start_countdown_secs = -1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("game.start_countdown_secs"));
}

#[test]
fn catches_speaking_time_too_long() {
    let mut config = TandemConfig::default();
    config.game.time_to_speak_secs = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("game.time_to_speak_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = TandemConfig::default();
    config.server.port = 0;
    config.game.swap_time_to_speak_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
    assert!(err.contains("game.swap_time_to_speak_secs"));
    assert!(err.contains("; "));
}
