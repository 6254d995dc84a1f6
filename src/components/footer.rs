//! Page footer component

use maud::{Markup, html};

/// Renders the generator attribution footer
pub fn footer() -> Markup {
    html! {
        footer {
            p { "Generated by Toolshed" }
        }
    }
}
