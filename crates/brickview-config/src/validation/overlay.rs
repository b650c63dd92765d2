//! Overlay geometry and timing validation.

use crate::schema::BrickviewConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_overlay(errors: &mut Vec<String>, config: &BrickviewConfig) {
    let overlay = &config.overlay;
    validate_range(errors, "overlay.hide_delay_ms", overlay.hide_delay_ms, 0, 5000);
    validate_range_f64(errors, "overlay.empty_padding", overlay.empty_padding, 0.0, 64.0);
    validate_range_f64(
        errors,
        "overlay.empty_min_height",
        overlay.empty_min_height,
        0.0,
        400.0,
    );
    validate_range_f64(
        errors,
        "overlay.affordance_size",
        overlay.affordance_size,
        8.0,
        96.0,
    );
    validate_range_f64(errors, "overlay.edit_inset", overlay.edit_inset, 0.0, 64.0);
}
