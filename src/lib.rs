//! personaweave - AI-Driven Reddit Persona Analyzer
//!
//! Collects a bounded snapshot of a Reddit user's public posts and
//! comments through the cursor-paginated listing API, samples that
//! activity into a deterministic prompt, and synthesizes a structured
//! persona report via Groq's chat-completion API.
//!
//! ## Core Pipeline
//!
//! 1. **Normalize**: heterogeneous profile references become one
//!    canonical profile URL
//! 2. **Collect**: both streams (posts, comments) paginated sequentially
//!    with a hard item cap, courtesy rate limiting, and
//!    partial-failure tolerance
//! 3. **Sample & Assemble**: bounded excerpts plus a subreddit frequency
//!    breakdown render into a fixed-template prompt
//! 4. **Synthesize**: one generation request; failures degrade to a
//!    diagnostic report body instead of aborting
//! 5. **Persist**: markdown-cleaned plain-text artifact with a fixed
//!    header and footer
//!
//! ## Modules
//!
//! - [`profile`]: identifier normalization
//! - [`reddit`]: listing wire types, HTTP client, paginated collector
//! - [`analysis`]: pure sampling, aggregation, and prompt assembly
//! - [`ai`]: generation provider abstraction and synthesizer
//! - [`report`]: markdown stripping and artifact persistence
//! - [`config`]: figment-based layered configuration

pub mod ai;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod profile;
pub mod reddit;
pub mod report;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, GroqConfig, RedditConfig};

// Error Types
pub use types::{PersonaError, Result};

// Domain
pub use types::{ItemKind, RawItem, UserActivity};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use ai::{CompletionProvider, GroqProvider, Synthesizer};
pub use analysis::{ActivitySample, AnalysisPrompt, SubredditFrequency, build_analysis_prompt};
pub use profile::{extract_username, normalize_profile_input};
pub use reddit::{Collector, ListingSource, ListingStream, RedditClient};
pub use report::{clean_markdown, default_filename, write_report};
