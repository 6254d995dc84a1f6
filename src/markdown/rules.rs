//! Rewrite rules for the Markdown subset.
//!
//! Every rule is a regex substitution over the whole working text. Line
//! oriented rules use multi-line mode so `^` and `$` match at line
//! boundaries. Inline rules never cross a line break, except fenced code
//! which spans lines by definition.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::pipeline::Rule;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rewrite rule pattern is a valid regex literal")
}

static H3: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^### (.*)$"));
static H2: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^## (.*)$"));
static H1: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^# (.*)$"));

static STRONG_EM: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*\*(.*?)\*\*\*"));
static STRONG: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
static EM: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));

/// Group 1 captures an optional leading `!` so image syntax can be skipped.
static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"(!?)\[([^\]]+)\]\(([^)]+)\)"));
static IMAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"!\[([^\]]*)\]\(([^)]+)\)"));

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)```(.*?)```"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"`(.*?)`"));

static STAR_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^\* (.*)$"));
static DASH_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^- (.*)$"));
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^[0-9]+\. (.*)$"));

static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^> (.*)$"));
static RULE_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^---$"));

/// Paragraph body holding nothing but one header or one horizontal rule.
static STANDALONE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:<h[1-6]>[^\n]*</h[1-6]>|<hr />)$"));

/// Returns Markdown rules in execution order.
pub(super) fn markdown_rules() -> [Rule; 10] {
    [
        Rule::new("headers", headers),
        Rule::new("emphasis", emphasis),
        Rule::new("links", links),
        Rule::new("images", images),
        Rule::new("code_blocks", code_blocks),
        Rule::new("inline_code", inline_code),
        Rule::new("list_items", list_items),
        Rule::new("blockquotes", blockquotes),
        Rule::new("horizontal_rules", horizontal_rules),
        Rule::new("paragraphs", paragraphs),
    ]
}

/// Converts `### `, `## ` and `# ` lines, longest prefix first.
fn headers(text: &str) -> String {
    let text = H3.replace_all(text, "<h3>${1}</h3>");
    let text = H2.replace_all(&text, "<h2>${1}</h2>");
    H1.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// Converts triple, double, then single asterisk emphasis.
fn emphasis(text: &str) -> String {
    let text = STRONG_EM.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = STRONG.replace_all(&text, "<strong>${1}</strong>");
    EM.replace_all(&text, "<em>${1}</em>").into_owned()
}

/// Converts `[label](url)` into anchors, leaving `![alt](url)` for images.
fn links(text: &str) -> String {
    LINK.replace_all(text, |caps: &Captures<'_>| {
        if caps[1].is_empty() {
            format!("<a href=\"{}\">{}</a>", &caps[3], &caps[2])
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

fn images(text: &str) -> String {
    IMAGE
        .replace_all(text, "<img src=\"${2}\" alt=\"${1}\" />")
        .into_owned()
}

/// Converts triple backtick fences. Content is kept verbatim, unescaped.
fn code_blocks(text: &str) -> String {
    CODE_BLOCK
        .replace_all(text, "<pre><code>${1}</code></pre>")
        .into_owned()
}

fn inline_code(text: &str) -> String {
    INLINE_CODE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

/// Wraps `* `, `- ` and `N. ` lines in `<li>`. No list container is emitted.
fn list_items(text: &str) -> String {
    let text = STAR_ITEM.replace_all(text, "<li>${1}</li>");
    let text = DASH_ITEM.replace_all(&text, "<li>${1}</li>");
    NUMBERED_ITEM
        .replace_all(&text, "<li>${1}</li>")
        .into_owned()
}

/// Wraps each `> ` line in its own blockquote.
fn blockquotes(text: &str) -> String {
    BLOCKQUOTE
        .replace_all(text, "<blockquote>${1}</blockquote>")
        .into_owned()
}

fn horizontal_rules(text: &str) -> String {
    RULE_LINE.replace_all(text, "<hr />").into_owned()
}

/// Splits on blank lines, wraps each block in `<p>`, and drops empty
/// paragraphs. A block that only holds a header or `<hr />`, ignoring
/// trailing newlines, is emitted without the wrap.
fn paragraphs(text: &str) -> String {
    let wrapped: String = text
        .split("\n\n")
        .map(|block| {
            let body = block.trim_end_matches('\n');
            if STANDALONE_BLOCK.is_match(body) {
                body.to_string()
            } else {
                format!("<p>{}</p>", block)
            }
        })
        .collect();
    wrapped.replace("<p></p>", "")
}
