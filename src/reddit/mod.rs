//! Reddit Listing Integration
//!
//! Cursor-paginated collection of a user's public posts and comments.
//!
//! ## Modules
//!
//! - `listing`: wire types for the `.json` listing envelope
//! - `client`: reqwest-backed `ListingSource`
//! - `collector`: pagination loop with cap, rate limiting, and
//!   partial-failure tolerance

pub mod client;
pub mod collector;
pub mod listing;

pub use client::{ListingSource, RedditClient};
pub use collector::Collector;
pub use listing::{ItemData, ListedItem, Listing, ListingData, ListingStream};
