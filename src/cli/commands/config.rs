//! Config Command
//!
//! Inspect the merged configuration.
//!
//! Usage:
//!   personaweave config show [-f json]
//!   personaweave config path

use crate::config::ConfigLoader;
use crate::types::{PersonaError, Result};

/// Show the merged configuration
pub fn show(format: &str) -> Result<()> {
    let config = ConfigLoader::load()?;

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&config)?,
        _ => toml::to_string_pretty(&config)
            .map_err(|e| PersonaError::Config(format!("Failed to render config: {e}")))?,
    };

    println!("{rendered}");
    Ok(())
}

/// Show configuration file paths
pub fn path() -> Result<()> {
    let project = ConfigLoader::project_config_path();
    let marker = if project.exists() { "" } else { " (not found)" };
    println!("Project config: {}{}", project.display(), marker);
    println!("Environment overrides: PERSONAWEAVE_* (e.g. PERSONAWEAVE_GROQ__MODEL)");
    Ok(())
}
