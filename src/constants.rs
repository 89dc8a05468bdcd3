//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Reddit listing API constants
pub mod reddit {
    /// Public listing API base URL
    pub const DEFAULT_API_BASE: &str = "https://www.reddit.com";

    /// Items requested per page (the API's own maximum)
    pub const PAGE_SIZE: usize = 100;

    /// Minimum delay between successive page requests (milliseconds).
    /// Courtesy rate limiting; both streams share the same budget.
    pub const PAGE_DELAY_MS: u64 = 1000;

    /// Default per-stream item cap when the operator does not supply one
    pub const DEFAULT_MAX_ITEMS: usize = 1000;

    /// Caps above this log a slowness warning (each page costs ~1s)
    pub const LARGE_CAP_WARNING: usize = 3000;

    /// Static client identifier sent with every listing request
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
         AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/91.0.4472.124 Safari/537.36";
}

/// Content sampling bounds for prompt assembly.
///
/// Fixed by design: they cap generation-service input size and cost
/// independently of the overall collection cap.
pub mod sampling {
    /// Posts scanned into the prompt
    pub const MAX_PROMPT_POSTS: usize = 10;

    /// Comments scanned into the prompt
    pub const MAX_PROMPT_COMMENTS: usize = 20;

    /// Per-field excerpt truncation (characters)
    pub const EXCERPT_CHARS: usize = 200;

    /// Subreddits rendered in the frequency breakdown
    pub const TOP_SUBREDDITS: usize = 10;
}

/// Generation service constants
pub mod synthesis {
    /// Groq's OpenAI-compatible endpoint
    pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

    pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

    /// Low temperature favors determinism and factuality over creativity
    pub const DEFAULT_TEMPERATURE: f32 = 0.1;

    pub const DEFAULT_TOP_P: f32 = 0.9;

    pub const DEFAULT_MAX_TOKENS: usize = 4000;

    /// System role sent with every synthesis request
    pub const SYSTEM_ROLE: &str = "You are an expert user researcher and data \
         analyst specializing in social media behavior analysis.";
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Generation requests run much longer than listing fetches
    pub const SYNTHESIS_TIMEOUT_SECS: u64 = 300;
}
