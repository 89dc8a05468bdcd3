//! Reddit Listing API Wire Types
//!
//! The public `.json` listing endpoints wrap every page in a two-level
//! envelope: `{ "data": { "children": [{ "data": {...} }], "after": ... } }`.
//! All item fields default to empty so a partially-removed record degrades
//! to empty strings instead of failing the whole page.

use serde::Deserialize;

use crate::types::{ItemKind, RawItem};

/// Which of the two per-user streams a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStream {
    /// Authored posts (`submitted.json`)
    Submitted,
    /// Authored comments (`comments.json`)
    Comments,
}

impl ListingStream {
    /// Endpoint path segment under `/user/{username}/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted.json",
            Self::Comments => "comments.json",
        }
    }

    /// Kind assigned to items fetched from this stream
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Submitted => ItemKind::Post,
            Self::Comments => ItemKind::Comment,
        }
    }

    /// Human-readable label for progress logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submitted => "posts",
            Self::Comments => "comments",
        }
    }
}

/// Top-level listing envelope
#[derive(Debug, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub data: ListingData,
}

/// One page of results plus the next-page cursor.
///
/// An empty `children` array or an absent `after` cursor both signal
/// stream exhaustion.
#[derive(Debug, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListedItem>,
    #[serde(default)]
    pub after: Option<String>,
}

/// Wrapper around each item in a page
#[derive(Debug, Deserialize)]
pub struct ListedItem {
    #[serde(default)]
    pub data: ItemData,
}

/// The fields we read off a listed post or comment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemData {
    #[serde(default)]
    pub subreddit: String,
    /// Post title (absent on comments)
    #[serde(default)]
    pub title: String,
    /// Post selftext (absent on comments and link posts)
    #[serde(default)]
    pub selftext: String,
    /// Comment body (absent on posts)
    #[serde(default)]
    pub body: String,
}

impl ItemData {
    /// Flatten into a domain item for the given stream.
    pub fn into_raw_item(self, kind: ItemKind) -> RawItem {
        match kind {
            ItemKind::Post => RawItem {
                subreddit: self.subreddit,
                primary_text: self.title,
                secondary_text: self.selftext,
                kind,
            },
            ItemKind::Comment => RawItem {
                subreddit: self.subreddit,
                primary_text: self.body,
                secondary_text: String::new(),
                kind,
            },
        }
    }
}
