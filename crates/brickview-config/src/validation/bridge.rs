//! Bridge validation (target origin, position throttle).

use crate::schema::BrickviewConfig;

use super::helpers::validate_range;

pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &BrickviewConfig) {
    let bridge = &config.bridge;
    validate_range(
        errors,
        "bridge.selection_position_interval_ms",
        bridge.selection_position_interval_ms,
        0,
        1000,
    );

    let origin = bridge.target_origin.trim();
    let looks_like_origin = origin == "*"
        || ((origin.starts_with("https://") || origin.starts_with("http://"))
            && !origin.trim_end_matches('/').contains(['?', '#']));
    if !looks_like_origin {
        errors.push(format!(
            "bridge.target_origin = {:?} must be \"*\" or an http(s) origin",
            bridge.target_origin
        ));
    }
}
