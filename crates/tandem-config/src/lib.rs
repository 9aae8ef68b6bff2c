//! Tandem configuration system.
//!
//! TOML-based configuration for the relay: listen address, WebSocket path,
//! per-session queue sizing, game timing constants and logging. All
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tandem_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GameConfig, LogLevel, LoggingConfig, ServerConfig, TandemConfig};
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};

use std::path::Path;

use tandem_common::ConfigError;
use tracing::warn;

/// Load config from `path` if given, otherwise from the platform default path.
///
/// A missing default file yields the built-in defaults; a missing explicit
/// path is an error. A file that parses but fails validation is replaced by
/// the defaults with a warning.
pub fn load_config(path: Option<&Path>) -> Result<TandemConfig, ConfigError> {
    let loaded = match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    };

    match loaded {
        Err(ConfigError::ValidationError(e)) => {
            warn!("config validation warning: {e}");
            warn!("falling back to default config");
            Ok(TandemConfig::default())
        }
        other => other,
    }
}
