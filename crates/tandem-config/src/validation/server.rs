use super::helpers::validate_range;
use crate::schema::TandemConfig;

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &TandemConfig) {
    let server = &config.server;

    if server.host.trim().is_empty() {
        errors.push("server.host must not be empty".into());
    }
    if server.port == 0 {
        errors.push("server.port must be non-zero".into());
    }
    if !server.path.starts_with('/') {
        errors.push(format!("server.path = {:?} must start with '/'", server.path));
    }
    validate_range(
        errors,
        "server.outbound_queue_capacity",
        server.outbound_queue_capacity,
        1,
        65_536,
    );
}
