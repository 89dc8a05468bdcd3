//! Analyze Command
//!
//! Full persona run: normalize the profile reference, collect both
//! activity streams, assemble the prompt, synthesize the report, and
//! persist the cleaned artifact.
//!
//! The pipeline is generic over the listing source and completion
//! provider seams; `run` wires in the HTTP-backed implementations.
//!
//! Usage:
//!   personaweave analyze <profile> [--output FILE] [--max-items N]

use std::path::Path;
use std::time::Duration;

use chrono::Local;
use console::style;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::ai::{CompletionProvider, GroqProvider, Synthesizer};
use crate::analysis::build_analysis_prompt;
use crate::config::ConfigLoader;
use crate::constants::reddit;
use crate::profile::{extract_username, normalize_profile_input};
use crate::reddit::{Collector, ListingSource, RedditClient};
use crate::report::{ReportContext, default_filename, ensure_txt_extension, write_report};
use crate::types::{PersonaError, Result};

/// Analyze command options
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Profile reference: URL, `u/name`, or bare username
    pub profile: String,
    /// Output filename; auto-generated when absent
    pub output: Option<String>,
    /// Per-stream item cap; config default when absent
    pub max_items: Option<usize>,
}

/// Run a full analysis
pub fn run(options: AnalyzeOptions) -> Result<()> {
    let rt = Runtime::new()?;
    rt.block_on(run_async(options))
}

async fn run_async(options: AnalyzeOptions) -> Result<()> {
    let config = ConfigLoader::load()?;

    let profile_url = normalize_profile_input(&options.profile)?;
    let username = extract_username(&profile_url)?;
    info!("Profile URL: {}", profile_url);

    let max_items = options.max_items.unwrap_or(config.reddit.default_max_items);
    if max_items > reddit::LARGE_CAP_WARNING {
        warn!(
            "Large cap ({} items): each page costs ~1s, expect a slow run",
            max_items
        );
    }

    // Construct the provider before fetching anything: a missing API key
    // should fail the run before we spend time on pagination.
    let provider = GroqProvider::new(&config.groq)?;
    let client = RedditClient::new(&config.reddit)?;

    let filename = match options.output {
        Some(name) => ensure_txt_extension(name),
        None => default_filename(&username, Local::now()),
    };

    run_pipeline(
        client,
        provider,
        &username,
        max_items,
        Duration::from_millis(config.reddit.page_delay_ms),
        Path::new(&filename),
    )
    .await?;

    println!(
        "{} Results saved to: {}",
        style("Analysis completed.").green().bold(),
        style(&filename).cyan()
    );

    Ok(())
}

/// Collect, synthesize, and persist for one user.
///
/// Empty activity surfaces as `EmptyProfile` before the provider is
/// ever invoked; a synthesis failure still persists an artifact with
/// the diagnostic body.
async fn run_pipeline<S, P>(
    source: S,
    provider: P,
    username: &str,
    max_items: usize,
    page_delay: Duration,
    output: &Path,
) -> Result<()>
where
    S: ListingSource,
    P: CompletionProvider,
{
    // Non-blocking preflight: an inconclusive check is worth a warning,
    // not an aborted run — the synthesizer degrades on failure anyway.
    match provider.health_check().await {
        Ok(true) => info!("Provider '{}' is healthy", provider.name()),
        Ok(false) | Err(_) => {
            warn!("Provider '{}' health check inconclusive", provider.name());
        }
    }

    let collector = Collector::new(source, page_delay);
    let activity = collector.collect(username, max_items).await;

    if activity.is_empty() {
        return Err(PersonaError::EmptyProfile(username.to_string()));
    }
    println!(
        "Found {} posts and {} comments",
        activity.posts.len(),
        activity.comments.len()
    );

    let prompt = build_analysis_prompt(username, &activity);
    let synthesizer = Synthesizer::new(provider);
    let report = synthesizer.synthesize(&prompt).await;

    write_report(
        output,
        &report,
        &ReportContext {
            username,
            total_posts: activity.posts.len(),
            total_comments: activity.comments.len(),
            model: synthesizer.model(),
            generated_at: Local::now(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reddit::{ItemData, ListedItem, ListingData, ListingStream};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Listing source whose streams are always exhausted
    struct EmptySource;

    #[async_trait]
    impl ListingSource for EmptySource {
        async fn fetch_page(
            &self,
            _username: &str,
            _stream: ListingStream,
            _after: Option<&str>,
        ) -> Result<ListingData> {
            Ok(ListingData::default())
        }
    }

    /// One cursor-less page per stream
    struct OnePageSource;

    #[async_trait]
    impl ListingSource for OnePageSource {
        async fn fetch_page(
            &self,
            _username: &str,
            stream: ListingStream,
            _after: Option<&str>,
        ) -> Result<ListingData> {
            let subreddit = match stream {
                ListingStream::Submitted => "cooking",
                ListingStream::Comments => "running",
            };
            Ok(ListingData {
                children: vec![ListedItem {
                    data: ItemData {
                        subreddit: subreddit.to_string(),
                        title: "a title".to_string(),
                        selftext: String::new(),
                        body: "a body".to_string(),
                    },
                }],
                after: None,
            })
        }
    }

    /// Provider double that records which methods were reached
    struct RecordingProvider {
        healthy: bool,
        response: std::result::Result<String, String>,
        health_checked: Arc<AtomicBool>,
        completed: Arc<AtomicBool>,
    }

    impl RecordingProvider {
        fn new(healthy: bool, response: std::result::Result<&str, &str>) -> Self {
            Self {
                healthy,
                response: response.map(str::to_string).map_err(str::to_string),
                health_checked: Arc::new(AtomicBool::new(false)),
                completed: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for RecordingProvider {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
            self.completed.store(true, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(cause) => Err(PersonaError::Synthesis(cause.clone())),
            }
        }

        fn name(&self) -> &str {
            "recording"
        }

        fn model(&self) -> &str {
            "test-model"
        }

        async fn health_check(&self) -> Result<bool> {
            self.health_checked.store(true, Ordering::SeqCst);
            Ok(self.healthy)
        }
    }

    #[tokio::test]
    async fn test_empty_profile_skips_synthesis_and_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ghost.txt");
        let provider = RecordingProvider::new(true, Ok("unused"));
        let completed = provider.completed.clone();

        let result = run_pipeline(
            EmptySource,
            provider,
            "ghost",
            1000,
            Duration::from_millis(0),
            &output,
        )
        .await;

        assert!(matches!(result, Err(PersonaError::EmptyProfile(name)) if name == "ghost"));
        assert!(!completed.load(Ordering::SeqCst));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_synthesis_failure_still_persists_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("alice.txt");
        let provider = RecordingProvider::new(true, Err("request timed out"));

        run_pipeline(
            OnePageSource,
            provider,
            "alice",
            1000,
            Duration::from_millis(0),
            &output,
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("Username: alice"));
        assert!(written.contains("Error during AI analysis"));
        assert!(written.contains("request timed out"));
    }

    #[tokio::test]
    async fn test_inconclusive_health_check_does_not_abort_run() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("alice.txt");
        let provider = RecordingProvider::new(false, Ok("A thorough persona."));
        let health_checked = provider.health_checked.clone();

        run_pipeline(
            OnePageSource,
            provider,
            "alice",
            1000,
            Duration::from_millis(0),
            &output,
        )
        .await
        .unwrap();

        assert!(health_checked.load(Ordering::SeqCst));
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("A thorough persona."));
    }
}
