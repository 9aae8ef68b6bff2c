//! Configuration schema types for Tandem.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod game;
mod logging;
mod server;

pub use game::*;
pub use logging::*;
pub use server::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TandemConfig {
    pub server: ServerConfig,
    pub game: GameConfig,
    pub logging: LoggingConfig,
}
