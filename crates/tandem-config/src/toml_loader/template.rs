//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tandem relay configuration
# Only override what you want to change -- missing fields use defaults.

[server]
# host = "0.0.0.0"
# port = 8082
# path = "/ws"                   # must start with '/'
# outbound_queue_capacity = 256  # 1-65536; full queues evict the recipient

[game]
# start_countdown_secs = 30      # 1-600
# time_to_speak_secs = 600       # 1-7200
# swap_time_to_speak_secs = 10   # 1-600

[logging]
# level = "info"                 # trace, debug, info, warn, error
# ansi = true
"##
    .to_string()
}
