//! Analysis Prompt Assembly
//!
//! Renders the fixed-structure persona prompt from a bounded activity
//! sample. Built once per run, immutable afterward.

use std::fmt;

use super::sampler::ActivitySample;
use crate::constants::sampling;
use crate::types::UserActivity;

/// The ten analysis dimensions the generation service must address,
/// plus the plain-text-only output instruction.
const ANALYSIS_DIRECTIVE: &str = "\
Please provide a detailed persona analysis with:
1. Basic Information (age, location, occupation estimates)
2. Personality Traits (with confidence levels)
3. Interests and Hobbies
4. Communication Style
5. Demographic Indicators
6. Behavioral Patterns
7. Values and Beliefs
8. Motivations and Goals
9. Frustrations and Pain Points
10. Business/Marketing Insights

Format as a structured report with clear sections and evidence-based conclusions.
IMPORTANT: Please provide the response in plain text format without any markdown formatting (no asterisks, no bold text, no italic text).";

/// Immutable prompt string for one synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt(String);

impl AnalysisPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assemble the persona prompt for one user.
///
/// Deterministic for identical input order: sampling, truncation, and
/// top-subreddit tie-breaking are all stable.
pub fn build_analysis_prompt(username: &str, activity: &UserActivity) -> AnalysisPrompt {
    let sample = ActivitySample::from_activity(activity);

    let prompt = format!(
        "Analyze this Reddit user and create a comprehensive persona for: {username}\n\
         \n\
         ACTIVITY SUMMARY:\n\
         - Total Posts: {total_posts}\n\
         - Total Comments: {total_comments}\n\
         - Top Subreddits: {top_subreddits}\n\
         \n\
         RECENT POSTS:\n\
         {posts}\n\
         \n\
         RECENT COMMENTS:\n\
         {comments}\n\
         \n\
         {directive}",
        total_posts = sample.total_posts,
        total_comments = sample.total_comments,
        top_subreddits = sample.frequency.render_top(sampling::TOP_SUBREDDITS),
        posts = sample.post_excerpts.join("\n"),
        comments = sample.comment_excerpts.join("\n"),
        directive = ANALYSIS_DIRECTIVE,
    );

    AnalysisPrompt(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemKind, RawItem};

    fn item(subreddit: &str, text: &str, kind: ItemKind) -> RawItem {
        RawItem {
            subreddit: subreddit.to_string(),
            primary_text: text.to_string(),
            secondary_text: String::new(),
            kind,
        }
    }

    fn alice_activity() -> UserActivity {
        UserActivity {
            posts: vec![
                item("cooking", "bread", ItemKind::Post),
                item("cooking", "soup", ItemKind::Post),
            ],
            comments: vec![item("running", "shoes", ItemKind::Comment)],
        }
    }

    #[test]
    fn test_prompt_contains_username_and_totals() {
        let prompt = build_analysis_prompt("alice", &alice_activity());
        let text = prompt.as_str();

        assert!(text.contains("persona for: alice"));
        assert!(text.contains("- Total Posts: 2"));
        assert!(text.contains("- Total Comments: 1"));
    }

    #[test]
    fn test_prompt_top_subreddit_list() {
        let prompt = build_analysis_prompt("alice", &alice_activity());
        assert!(
            prompt
                .as_str()
                .contains("Top Subreddits: r/cooking (2), r/running (1)")
        );
    }

    #[test]
    fn test_prompt_carries_analysis_dimensions() {
        let prompt = build_analysis_prompt("alice", &alice_activity());
        let text = prompt.as_str();

        assert!(text.contains("1. Basic Information"));
        assert!(text.contains("10. Business/Marketing Insights"));
        assert!(text.contains("plain text format without any markdown"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_analysis_prompt("alice", &alice_activity());
        let b = build_analysis_prompt("alice", &alice_activity());
        assert_eq!(a, b);
    }
}
