use serde::{Deserialize, Serialize};

/// Listener and per-connection transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    pub port: u16,
    /// Request path that accepts WebSocket upgrades.
    pub path: String,
    /// Bound of each session's outbound queue. A recipient whose queue is
    /// full during a broadcast is evicted.
    pub outbound_queue_capacity: usize,
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8082,
            path: "/ws".into(),
            outbound_queue_capacity: 256,
        }
    }
}
