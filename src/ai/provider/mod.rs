//! Generation Provider Abstraction
//!
//! Defines the CompletionProvider trait for the single synthesis request.
//! The production implementation talks to Groq; tests substitute scripted
//! providers.

mod groq;

pub use groq::GroqProvider;

use async_trait::async_trait;

use crate::types::Result;

/// Chat-completion provider for persona synthesis.
///
/// One blocking round trip per run: no retries, no streaming, no
/// mid-flight cancellation.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue one completion request and return the generated text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is available
    async fn health_check(&self) -> Result<bool>;
}
