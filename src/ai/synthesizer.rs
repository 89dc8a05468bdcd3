//! Report Synthesizer
//!
//! Issues the single generation request and returns the persona text.
//! Failures never propagate: the run must still produce a persisted
//! artifact, so any error is folded into a diagnostic report body.

use tracing::{info, warn};

use super::provider::CompletionProvider;
use crate::analysis::AnalysisPrompt;
use crate::constants::synthesis;

/// Wraps a completion provider with the degrade-to-placeholder policy
pub struct Synthesizer<P> {
    provider: P,
}

impl<P: CompletionProvider> Synthesizer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generate the persona report for an assembled prompt.
    ///
    /// On any provider failure the returned string describes the error
    /// instead; callers can persist it as-is.
    pub async fn synthesize(&self, prompt: &AnalysisPrompt) -> String {
        info!(
            "Analyzing content with {} ({})...",
            self.provider.name(),
            self.provider.model()
        );

        match self
            .provider
            .complete(synthesis::SYSTEM_ROLE, prompt.as_str())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Synthesis failed, substituting diagnostic report: {}", e);
                format!("Error during AI analysis: {e}")
            }
        }
    }

    /// Model identifier, for the report footer.
    pub fn model(&self) -> &str {
        self.provider.model()
    }
}
