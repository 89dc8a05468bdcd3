//! Report Formatting and Persistence
//!
//! Strips markdown artifacts from the generated text (the generation
//! service is instructed to emit plain prose but does not always comply)
//! and writes the final UTF-8 artifact with a fixed header and footer.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;

use crate::types::{PersonaError, Result};

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());
static MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());

/// Everything the report writer needs besides the body text
pub struct ReportContext<'a> {
    pub username: &'a str,
    pub total_posts: usize,
    pub total_comments: usize,
    /// Model credited in the footer
    pub model: &'a str,
    pub generated_at: DateTime<Local>,
}

/// Strip markdown emphasis and normalize whitespace for plain-text output.
pub fn clean_markdown(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = text.replace('*', "");
    let text = MULTI_SPACE.replace_all(&text, " ");
    let text = MULTI_NEWLINE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Default artifact name: `{username}_persona_{timestamp}.txt`.
pub fn default_filename(username: &str, now: DateTime<Local>) -> String {
    format!("{}_persona_{}.txt", username, now.format("%Y%m%d_%H%M%S"))
}

/// Append `.txt` to operator-supplied names that lack it.
pub fn ensure_txt_extension(filename: String) -> String {
    if filename.ends_with(".txt") {
        filename
    } else {
        format!("{filename}.txt")
    }
}

/// Write the final report artifact.
///
/// The body is markdown-cleaned here; callers pass the synthesizer
/// output verbatim (including a diagnostic body on synthesis failure).
pub fn write_report(path: &Path, report: &str, ctx: &ReportContext<'_>) -> Result<()> {
    let cleaned = clean_markdown(report);

    let document = format!(
        "=== AI-POWERED REDDIT PERSONA ANALYSIS ===\n\
         Username: {username}\n\
         Generated: {generated}\n\
         Total Posts Analyzed: {posts}\n\
         Total Comments Analyzed: {comments}\n\
         \n\
         {body}\n\
         \n\
         === ANALYSIS COMPLETED ===\n\
         Powered by Groq ({model})\n",
        username = ctx.username,
        generated = ctx.generated_at.format("%Y-%m-%d %H:%M:%S"),
        posts = ctx.total_posts,
        comments = ctx.total_comments,
        body = cleaned,
        model = ctx.model,
    );

    fs::write(path, document).map_err(|source| PersonaError::Report {
        path: path.to_path_buf(),
        source,
    })
}
