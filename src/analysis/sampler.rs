//! Content Sampler
//!
//! Reduces the raw collections to a bounded, representative sample for
//! prompt assembly: at most 10 posts and 20 comments, each excerpt
//! truncated to 200 characters, plus a combined subreddit frequency
//! table over everything scanned.
//!
//! Pure transformation: no I/O, no mutation of inputs, deterministic for
//! identical input order.

use super::frequency::SubredditFrequency;
use crate::constants::sampling;
use crate::types::UserActivity;

/// Bounded sample of one user's activity, ready for prompt rendering
#[derive(Debug)]
pub struct ActivitySample {
    /// Rendered post excerpt lines, one per scanned post
    pub post_excerpts: Vec<String>,
    /// Rendered comment excerpt lines, one per scanned comment
    pub comment_excerpts: Vec<String>,
    /// Combined counts across both scanned streams
    pub frequency: SubredditFrequency,
    /// Unsampled collection totals
    pub total_posts: usize,
    pub total_comments: usize,
}

impl ActivitySample {
    /// Scan the bounded prefix of both streams.
    pub fn from_activity(activity: &UserActivity) -> Self {
        let mut frequency = SubredditFrequency::new();

        let post_excerpts = activity
            .posts
            .iter()
            .take(sampling::MAX_PROMPT_POSTS)
            .map(|post| {
                frequency.record(&post.subreddit);
                format!(
                    "Post in r/{}: {} - {}...",
                    post.subreddit,
                    post.primary_text,
                    truncate_chars(&post.secondary_text, sampling::EXCERPT_CHARS)
                )
            })
            .collect();

        let comment_excerpts = activity
            .comments
            .iter()
            .take(sampling::MAX_PROMPT_COMMENTS)
            .map(|comment| {
                frequency.record(&comment.subreddit);
                format!(
                    "Comment in r/{}: {}...",
                    comment.subreddit,
                    truncate_chars(&comment.primary_text, sampling::EXCERPT_CHARS)
                )
            })
            .collect();

        Self {
            post_excerpts,
            comment_excerpts,
            frequency,
            total_posts: activity.posts.len(),
            total_comments: activity.comments.len(),
        }
    }
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemKind, RawItem};

    fn post(subreddit: &str, title: &str, selftext: &str) -> RawItem {
        RawItem {
            subreddit: subreddit.to_string(),
            primary_text: title.to_string(),
            secondary_text: selftext.to_string(),
            kind: ItemKind::Post,
        }
    }

    fn comment(subreddit: &str, body: &str) -> RawItem {
        RawItem {
            subreddit: subreddit.to_string(),
            primary_text: body.to_string(),
            secondary_text: String::new(),
            kind: ItemKind::Comment,
        }
    }

    #[test]
    fn test_sampling_bounds_hold() {
        let activity = UserActivity {
            posts: (0..50).map(|i| post("rust", &format!("p{i}"), "")).collect(),
            comments: (0..50).map(|i| comment("rust", &format!("c{i}"))).collect(),
        };
        let sample = ActivitySample::from_activity(&activity);

        assert_eq!(sample.post_excerpts.len(), 10);
        assert_eq!(sample.comment_excerpts.len(), 20);
        assert_eq!(sample.total_posts, 50);
        assert_eq!(sample.total_comments, 50);
        // Frequency covers exactly the scanned prefix of both streams
        assert_eq!(sample.frequency.total(), 30);
    }

    #[test]
    fn test_excerpt_length_is_bounded_for_long_inputs() {
        let long_body = "x".repeat(10_000);
        let activity = UserActivity {
            posts: vec![post("rust", "title", &long_body)],
            comments: vec![comment("rust", &long_body)],
        };
        let sample = ActivitySample::from_activity(&activity);

        // "Post in r/rust: title - " + 200 chars + "..."
        assert!(sample.post_excerpts[0].chars().count() < 250);
        assert!(sample.comment_excerpts[0].chars().count() < 250);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let multibyte = "é".repeat(300);
        assert_eq!(truncate_chars(&multibyte, 200).chars().count(), 200);
    }

    #[test]
    fn test_excerpt_rendering() {
        let activity = UserActivity {
            posts: vec![post("cooking", "Sourdough", "long ferment")],
            comments: vec![comment("running", "zone 2 is key")],
        };
        let sample = ActivitySample::from_activity(&activity);

        assert_eq!(
            sample.post_excerpts[0],
            "Post in r/cooking: Sourdough - long ferment..."
        );
        assert_eq!(
            sample.comment_excerpts[0],
            "Comment in r/running: zone 2 is key..."
        );
    }

    #[test]
    fn test_empty_activity_produces_empty_sample() {
        let sample = ActivitySample::from_activity(&UserActivity::default());
        assert!(sample.post_excerpts.is_empty());
        assert!(sample.comment_excerpts.is_empty());
        assert_eq!(sample.frequency.total(), 0);
    }
}
