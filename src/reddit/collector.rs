//! Paginated Activity Collector
//!
//! Fetches a user's posts and comments through cursor-based pagination
//! with a hard per-stream cap and a mandatory inter-page delay.
//!
//! ## Partial-Failure Policy
//!
//! A transport failure (connection error, non-2xx status, malformed JSON)
//! stops that stream and keeps whatever was already accumulated. One
//! stream's failure never blocks the other stream or aborts the run;
//! downstream components are built to work on partial or empty
//! collections. Do not add retries here.
//!
//! ## Termination
//!
//! Every loop iteration either consumes cap budget, observes exhaustion
//! (empty page or absent cursor), or hits a transport failure. There is
//! no path that loops indefinitely.

use std::time::Duration;

use tracing::{info, warn};

use super::client::ListingSource;
use super::listing::ListingStream;
use crate::constants::reddit;
use crate::types::{RawItem, UserActivity};

/// Collects both per-user streams through a `ListingSource`.
///
/// Streams are fetched sequentially: the target API enforces an implicit
/// rate budget shared across both streams from the same client identity.
pub struct Collector<S> {
    source: S,
    page_delay: Duration,
}

impl<S: ListingSource> Collector<S> {
    pub fn new(source: S, page_delay: Duration) -> Self {
        Self { source, page_delay }
    }

    /// Collector with the default courtesy delay between pages.
    pub fn with_default_delay(source: S) -> Self {
        Self::new(source, Duration::from_millis(reddit::PAGE_DELAY_MS))
    }

    /// Fetch up to `max_items` posts and up to `max_items` comments.
    ///
    /// Never fails: transport errors truncate the affected stream.
    pub async fn collect(&self, username: &str, max_items: usize) -> UserActivity {
        info!("Fetching posts for {}...", username);
        let posts = self
            .collect_stream(username, ListingStream::Submitted, max_items)
            .await;

        info!("Fetching comments for {}...", username);
        let comments = self
            .collect_stream(username, ListingStream::Comments, max_items)
            .await;

        UserActivity { posts, comments }
    }

    async fn collect_stream(
        &self,
        username: &str,
        stream: ListingStream,
        max_items: usize,
    ) -> Vec<RawItem> {
        let mut items: Vec<RawItem> = Vec::new();
        let mut after: Option<String> = None;

        while items.len() < max_items {
            let page = match self
                .source
                .fetch_page(username, stream, after.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!("Error fetching {}: {}", stream.label(), e);
                    break;
                }
            };

            if page.children.is_empty() {
                break;
            }

            items.extend(
                page.children
                    .into_iter()
                    .map(|child| child.data.into_raw_item(stream.kind())),
            );
            info!("Fetched {} {}...", items.len(), stream.label());

            match page.after {
                Some(cursor) if items.len() < max_items => {
                    after = Some(cursor);
                    // Courtesy rate limiting toward the upstream API
                    tokio::time::sleep(self.page_delay).await;
                }
                _ => break,
            }
        }

        items.truncate(max_items);
        items
    }
}
