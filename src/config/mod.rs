pub mod loader;
pub mod types;

pub use loader::{CONFIG_FILE, ConfigLoader};
pub use types::{Config, GroqConfig, RedditConfig};
