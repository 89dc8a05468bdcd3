//! Domain types for collected Reddit activity.
//!
//! A `RawItem` is one fetched record (post or comment), already flattened
//! from the listing API's wrapper envelope. Items are owned by the
//! `UserActivity` returned from the collector and read-only afterward.

/// Which stream an item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Post,
    Comment,
}

/// A single fetched record from either stream.
///
/// `primary_text` is the post title or comment body; `secondary_text` is
/// the post selftext (empty for comments and link posts). Both may be
/// empty — the API omits fields for removed content and the collector
/// degrades them to empty strings rather than dropping the item.
#[derive(Debug, Clone)]
pub struct RawItem {
    /// Subreddit name without the `r/` prefix
    pub subreddit: String,
    pub primary_text: String,
    pub secondary_text: String,
    pub kind: ItemKind,
}

/// Ordered post and comment collections for one user.
///
/// Invariants: each stream holds at most the caller-specified cap, in the
/// API's own return order (most recent first as served by Reddit).
#[derive(Debug, Default)]
pub struct UserActivity {
    pub posts: Vec<RawItem>,
    pub comments: Vec<RawItem>,
}

impl UserActivity {
    /// True when both streams came back empty (private, deleted, or
    /// non-existent profile).
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_activity_empty() {
        assert!(UserActivity::default().is_empty());
    }

    #[test]
    fn test_user_activity_one_comment_is_not_empty() {
        let activity = UserActivity {
            posts: Vec::new(),
            comments: vec![RawItem {
                subreddit: "rust".to_string(),
                primary_text: "nice".to_string(),
                secondary_text: String::new(),
                kind: ItemKind::Comment,
            }],
        };
        assert!(!activity.is_empty());
    }
}
