//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Propagation Policy
//!
//! - Identifier validation errors are fatal: the run never starts.
//! - Transport errors during collection are contained by the collector,
//!   which keeps whatever it has already fetched. They only surface here
//!   when a caller needs the underlying cause (e.g. logging).
//! - Synthesis failures degrade to a placeholder report string and are
//!   never propagated as errors.
//! - Report persistence failures are the only errors that decide the
//!   run's overall outcome after data has been fetched.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PersonaError>;

#[derive(Debug, Error)]
pub enum PersonaError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    // -------------------------------------------------------------------------
    // Input Validation
    // -------------------------------------------------------------------------
    #[error("invalid Reddit profile: input is empty")]
    InvalidIdentifier,

    #[error("invalid Reddit profile URL: {0}")]
    MalformedProfileUrl(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Both streams came back empty; the synthesizer is never invoked.
    #[error("no public activity found for user '{0}' (profile may be private, deleted, or non-existent)")]
    EmptyProfile(String),

    #[error("AI synthesis error: {0}")]
    Synthesis(String),

    #[error("failed to write report to {path}: {source}")]
    Report {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_message_names_user() {
        let err = PersonaError::EmptyProfile("spez".to_string());
        assert!(err.to_string().contains("spez"));
    }

    #[test]
    fn test_report_error_carries_path() {
        let err = PersonaError::Report {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::other("disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out.txt"));
        assert!(msg.contains("disk full"));
    }
}
