//! Subreddit Frequency Accumulation
//!
//! Insertion-ordered category counts over the scanned sample. Top-N
//! selection is deterministic: stable sort by count descending, ties
//! broken by first-seen order.

/// Counts per subreddit, preserving first-seen order for tie-breaking
#[derive(Debug, Default)]
pub struct SubredditFrequency {
    entries: Vec<(String, usize)>,
}

impl SubredditFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a subreddit.
    pub fn record(&mut self, subreddit: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == subreddit) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((subreddit.to_string(), 1)),
        }
    }

    /// Sum of all counts; equals the number of scanned items.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Top `n` subreddits by count descending.
    ///
    /// `Vec::sort_by` is stable, so equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Render the top `n` as a comma-joined `r/name (count)` list.
    pub fn render_top(&self, n: usize) -> String {
        self.top(n)
            .iter()
            .map(|(name, count)| format!("r/{name} ({count})"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
