//! Process-wide public configuration.
//!
//! The cell is written at most once. Hosts that can pass [`PublicConfig`]
//! around explicitly should do so; this exists for code that needs a
//! `SERVER_URL` without a handle to the startup state.

use crate::domain::model::PublicConfig;
use crate::domain::ports::EnvSource;
use crate::utils::error::{EnvError, Result};
use std::sync::OnceLock;

static PUBLIC_CONFIG: OnceLock<PublicConfig> = OnceLock::new();

/// Installs `config`. Installing an equal value again is a no-op.
pub fn install(config: PublicConfig) -> Result<&'static PublicConfig> {
    let candidate = config.clone();
    let installed = PUBLIC_CONFIG.get_or_init(|| candidate);

    if *installed != config {
        tracing::error!("Refusing to replace the installed public configuration");
        return Err(EnvError::AlreadyInitialized {
            existing: installed.server_url().to_string(),
        });
    }
    Ok(installed)
}

/// Loads from `source` unless a configuration is already installed.
///
/// On failure nothing is installed.
pub fn init<E: EnvSource + ?Sized>(source: &E) -> Result<&'static PublicConfig> {
    if let Some(config) = PUBLIC_CONFIG.get() {
        return Ok(config);
    }
    install(PublicConfig::from_env(source)?)
}

pub fn config() -> Option<&'static PublicConfig> {
    PUBLIC_CONFIG.get()
}

/// The exported `SERVER_URL`, once installed.
pub fn server_url() -> Option<&'static str> {
    PUBLIC_CONFIG.get().map(PublicConfig::server_url)
}
