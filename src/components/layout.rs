//! Standalone document shell for generated previews

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Wraps preview body in a self-contained HTML document
///
/// The document links exactly one stylesheet, path relative to the written
/// page, and carries a generator meta tag so output files can be traced
/// back to the tool that wrote them.
///
/// # Arguments
///
/// * `title`: Document title, suffixed with the tool name
/// * `stylesheet`: Relative path of the bundled preview stylesheet
/// * `body`: Markup placed inside the centered container
///
/// # Returns
///
/// Complete HTML document
pub fn preview_document(title: &str, stylesheet: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(concat!("toolshed ", env!("CARGO_PKG_VERSION")));
                title { (title) " - Toolshed" }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                div.container { (body) }
                (footer())
            }
        }
    }
}
