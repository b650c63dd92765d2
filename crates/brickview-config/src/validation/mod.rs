//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod bridge;
mod helpers;
mod overlay;

#[cfg(test)]
mod tests;

use crate::schema::BrickviewConfig;
use brickview_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BrickviewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    overlay::validate_overlay(&mut errors, config);
    bridge::validate_bridge(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
