//! Reading the config file, resolving its default location, and writing
//! the commented template.

use crate::schema::TandemConfig;
use crate::validation;
use std::path::{Path, PathBuf};
use tandem_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Parse and validate the TOML file at `path`.
///
/// Missing fields take their serde defaults. A config that parses but is
/// out of range comes back as `ConfigError::ValidationError`; choosing a
/// fallback is the caller's job.
pub fn load_from_path(path: &Path) -> Result<TandemConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TandemConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `tandem/config.toml` from the platform config directory
/// (`~/.config` on Linux, `~/Library/Application Support` on macOS).
///
/// A missing file means built-in defaults; nothing is written.
pub fn load_default() -> Result<TandemConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(TandemConfig::default())
        }
        other => other,
    }
}

/// Where [`load_default`] looks for the config file.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("tandem").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_err)?;

    info!("wrote default config to {}", path.display());
    Ok(())
}
