//! AI Integration Layer
//!
//! Provider abstraction for the generation service plus the synthesizer
//! that turns an assembled prompt into a persona report.

pub mod provider;
pub mod synthesizer;

pub use provider::{CompletionProvider, GroqProvider};
pub use synthesizer::Synthesizer;
