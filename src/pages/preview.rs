//! Markdown preview page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::preview_document;
use crate::markdown::MarkdownConverter;

/// Stylesheet path relative to the generated page.
pub const STYLESHEET: &str = "assets/preview.css";

/// Generates standalone Markdown preview page
///
/// Converts the Markdown source and embeds the resulting HTML unescaped
/// inside an article, followed by a collapsible block holding the original
/// source. The source is escaped by maud; the converted HTML is not
/// sanitized, so untrusted input yields untrusted markup.
///
/// # Arguments
///
/// * `title`: Page title shown in the header and document title
/// * `markdown`: Markdown source text
///
/// # Returns
///
/// Complete HTML document markup
///
/// # Examples
///
/// ```
/// use toolshed::pages::preview::generate;
///
/// let page = generate("Notes", "# Hello").into_string();
/// assert!(page.contains("<h1>Hello</h1>"));
/// ```
pub fn generate(title: &str, markdown: &str) -> Markup {
    let converter = MarkdownConverter::new();
    let rendered = converter.convert(markdown);

    preview_document(
        title,
        STYLESHEET,
        html! {
            header.preview-header {
                h1.page-title { (title) }
            }
            main.preview-card {
                article.preview {
                    (PreEscaped(rendered))
                }
                details.source {
                    summary { "Markdown source" }
                    pre { code { (markdown) } }
                }
            }
        },
    )
}
