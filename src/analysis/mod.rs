//! Content Sampling and Prompt Assembly
//!
//! Pure transformation layer between raw collections and the synthesis
//! request: bounded sampling, subreddit frequency aggregation, and
//! fixed-template prompt rendering.

pub mod frequency;
pub mod prompt;
pub mod sampler;

pub use frequency::SubredditFrequency;
pub use prompt::{AnalysisPrompt, build_analysis_prompt};
pub use sampler::ActivitySample;
