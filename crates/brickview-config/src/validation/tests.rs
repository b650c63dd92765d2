//! Tests for the full validation pipeline.

use super::*;
use crate::schema::BrickviewConfig;

#[test]
fn default_config_validates() {
    assert!(validate(&BrickviewConfig::default()).is_ok());
}

#[test]
fn catches_hide_delay_too_large() {
    let mut config = BrickviewConfig::default();
    config.overlay.hide_delay_ms = 6000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.hide_delay_ms"));
}

#[test]
fn zero_hide_delay_is_allowed() {
    let mut config = BrickviewConfig::default();
    config.overlay.hide_delay_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_negative_padding() {
    let mut config = BrickviewConfig::default();
    config.overlay.empty_padding = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.empty_padding"));
}

#[test]
fn catches_nan_affordance_size() {
    let mut config = BrickviewConfig::default();
    config.overlay.affordance_size = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.affordance_size"));
}

#[test]
fn catches_tiny_affordance() {
    let mut config = BrickviewConfig::default();
    config.overlay.affordance_size = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.affordance_size"));
}

#[test]
fn catches_throttle_too_slow() {
    let mut config = BrickviewConfig::default();
    config.bridge.selection_position_interval_ms = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bridge.selection_position_interval_ms"));
}

#[test]
fn accepts_explicit_origin() {
    let mut config = BrickviewConfig::default();
    config.bridge.target_origin = "https://editor.example.com".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_origin() {
    let mut config = BrickviewConfig::default();
    config.bridge.target_origin = "editor.example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bridge.target_origin"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = BrickviewConfig::default();
    config.overlay.edit_inset = 100.0;
    config.overlay.empty_min_height = 1000.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("overlay.edit_inset"));
    assert!(err.contains("overlay.empty_min_height"));
    assert!(err.contains("; "));
}
