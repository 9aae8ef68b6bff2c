//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod game;
mod helpers;
mod server;

#[cfg(test)]
mod tests;

use crate::schema::TandemConfig;
use tandem_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TandemConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    server::validate_server(&mut errors, config);
    game::validate_game(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
