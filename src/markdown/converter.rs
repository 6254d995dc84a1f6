//! Markdown converter built on the rewrite pipeline.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use super::pipeline::{Pipeline, Rule};
use super::rules::markdown_rules;

static DEFAULT_CONVERTER: LazyLock<MarkdownConverter> = LazyLock::new(MarkdownConverter::new);

/// Converts Markdown text to HTML with the default rule set.
///
/// Total over all inputs: malformed syntax degrades into literal or partially
/// substituted text, never an error. The output is not sanitized, and feeding
/// the output back in is not guaranteed to return it unchanged.
///
/// # Arguments
///
/// * `markdown`: Markdown source text
///
/// # Returns
///
/// HTML string
///
/// # Examples
///
/// ```
/// assert_eq!(toolshed::convert("# Title"), "<h1>Title</h1>");
/// ```
pub fn convert(markdown: &str) -> String {
    DEFAULT_CONVERTER.convert(markdown)
}

/// Converts a Markdown subset to HTML through regex rewrites.
///
/// Supports headers (h1 to h3), bold and italic emphasis, links, images,
/// fenced and inline code, list items, blockquotes, horizontal rules and
/// blank line separated paragraphs. Rules are applied in a fixed order over
/// the whole text, so nested or overlapping constructs compose only as far
/// as that order allows.
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    pipeline: Pipeline,
}

impl MarkdownConverter {
    /// Creates converter with the standard rule order.
    pub fn new() -> Self {
        Self {
            pipeline: markdown_rules().into_iter().collect(),
        }
    }

    /// Returns rules in execution order.
    pub fn rules(&self) -> &[Rule] {
        self.pipeline.rules()
    }

    /// Converts Markdown content to HTML string.
    ///
    /// `\r\n` and lone `\r` line breaks are normalized to `\n` before any
    /// rule runs.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Markdown source text
    ///
    /// # Returns
    ///
    /// HTML string, empty for empty input
    pub fn convert(&self, markdown: &str) -> String {
        let html = if markdown.contains('\r') {
            self.pipeline
                .run(&markdown.replace("\r\n", "\n").replace('\r', "\n"))
        } else {
            self.pipeline.run(markdown)
        };
        debug!(
            input_bytes = markdown.len(),
            output_bytes = html.len(),
            "converted markdown"
        );
        html
    }

    /// Converts Markdown file at given path.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to Markdown file
    ///
    /// # Returns
    ///
    /// HTML string
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or is not valid UTF8
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.convert(&content))
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}
