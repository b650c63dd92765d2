//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Brickview Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[overlay]
# hide_delay_ms = 200        # 0-5000, grace period before a lost hover clears
# empty_padding = 4.0        # 0-64, highlight padding around empty slots
# empty_min_height = 40.0    # 0-400, minimum highlight height for empty slots
# affordance_size = 24.0     # 8-96, add/edit control size
# edit_inset = 4.0           # 0-64, edit control inset from the top-right corner

[bridge]
# target_origin = "*"
# selection_position_interval_ms = 0   # 0-1000, 0 posts on every move
# initial_slide_index = 0

[logging]
# level = "info"             # trace | debug | info | warn | error
"##
    .to_string()
}
