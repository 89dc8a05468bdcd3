//! Configuration Types
//!
//! Ambient settings for the two outbound clients. Sampling bounds are
//! deliberately not configurable: they cap generation input size and
//! cost regardless of operator preference.

use serde::{Deserialize, Serialize};

use crate::constants::{network, reddit, synthesis};
use crate::types::{PersonaError, Result};

/// Merged application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reddit: RedditConfig,
    pub groq: GroqConfig,
}

impl Config {
    /// Reject values that would make a run nonsensical.
    pub fn validate(&self) -> Result<()> {
        if self.reddit.default_max_items == 0 {
            return Err(PersonaError::Config(
                "reddit.default_max_items must be at least 1".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.groq.temperature) {
            return Err(PersonaError::Config(format!(
                "groq.temperature must be in [0.0, 2.0], got {}",
                self.groq.temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.groq.top_p) {
            return Err(PersonaError::Config(format!(
                "groq.top_p must be in [0.0, 1.0], got {}",
                self.groq.top_p
            )));
        }
        if self.groq.max_tokens == 0 {
            return Err(PersonaError::Config(
                "groq.max_tokens must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reddit listing API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditConfig {
    pub api_base: String,
    /// Static client identifier sent with every request
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Courtesy delay between successive page requests
    pub page_delay_ms: u64,
    /// Per-stream item cap when the operator does not pass --max-items
    pub default_max_items: usize,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            api_base: reddit::DEFAULT_API_BASE.to_string(),
            user_agent: reddit::USER_AGENT.to_string(),
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            page_delay_ms: reddit::PAGE_DELAY_MS,
            default_max_items: reddit::DEFAULT_MAX_ITEMS,
        }
    }
}

/// Groq generation service settings
///
/// Note: the API key is never serialized to output; the provider wraps
/// it in SecretString at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroqConfig {
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: usize,
    pub timeout_secs: u64,
    /// API key; falls back to the GROQ_API_KEY env var when absent
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_base: synthesis::DEFAULT_API_BASE.to_string(),
            model: synthesis::DEFAULT_MODEL.to_string(),
            temperature: synthesis::DEFAULT_TEMPERATURE,
            top_p: synthesis::DEFAULT_TOP_P,
            max_tokens: synthesis::DEFAULT_MAX_TOKENS,
            timeout_secs: network::SYNTHESIS_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let mut config = Config::default();
        config.reddit.default_max_items = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::default();
        config.groq.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let config = GroqConfig {
            api_key: Some("secret".to_string()),
            ..GroqConfig::default()
        };
        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("secret"));
    }
}
