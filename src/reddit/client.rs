//! Reddit Listing Client
//!
//! Production `ListingSource` backed by reqwest. Owns the HTTP client
//! (connection reuse, static User-Agent) exclusively; it is never shared
//! across concurrent callers, so no locking discipline is needed.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::listing::{Listing, ListingData, ListingStream};
use crate::config::RedditConfig;
use crate::constants::reddit;
use crate::types::{PersonaError, Result};

/// One page of a user's stream, fetched from somewhere.
///
/// The collector only depends on this seam; tests substitute scripted
/// page sequences for the network.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch up to one page (100 items) of the given stream, starting
    /// after the supplied cursor when present.
    async fn fetch_page(
        &self,
        username: &str,
        stream: ListingStream,
        after: Option<&str>,
    ) -> Result<ListingData>;
}

/// HTTP-backed listing source against the public `.json` endpoints
#[derive(Debug)]
pub struct RedditClient {
    api_base: String,
    client: reqwest::Client,
}

impl RedditClient {
    pub fn new(config: &RedditConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(PersonaError::Transport)?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl ListingSource for RedditClient {
    async fn fetch_page(
        &self,
        username: &str,
        stream: ListingStream,
        after: Option<&str>,
    ) -> Result<ListingData> {
        let url = format!(
            "{}/user/{}/{}",
            self.api_base,
            username,
            stream.endpoint()
        );

        debug!("GET {} (after: {:?})", url, after);

        let mut request = self
            .client
            .get(&url)
            .query(&[("limit", reddit::PAGE_SIZE.to_string())]);
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor)]);
        }

        let listing: Listing = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(listing.data)
    }
}
