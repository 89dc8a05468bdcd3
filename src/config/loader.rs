//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (personaweave.toml in the working directory)
//! 3. Environment variables (PERSONAWEAVE_* prefix, `__` nesting)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{PersonaError, Result};

/// Project config file name
pub const CONFIG_FILE: &str = "personaweave.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → project file → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // e.g. PERSONAWEAVE_GROQ__MAX_TOKENS -> groq.max_tokens
        figment = figment.merge(Env::prefixed("PERSONAWEAVE_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| PersonaError::Config(format!("Configuration error: {e}")))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| PersonaError::Config(format!("Configuration error: {e}")))?;

        config.validate()?;

        Ok(config)
    }

    /// Path to the project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }
}
