//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# hearth configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[presence]
subject_id = "1115674875919597639"
# rest_url = "https://api.lanyard.rest/v1/users"
# socket_url = "wss://api.lanyard.rest/socket"
# avatar_cdn = "https://cdn.discordapp.com"
# reconnect_delay_ms = 5000    # 100-600000
# request_timeout_secs = 10    # 1-120

[clock]
timezone = "Europe/Tallinn"

[theme]
# default = "mocha"            # mocha | latte

[logging]
# level = "info"               # trace | debug | info | warn | error
"##
    .to_string()
}
