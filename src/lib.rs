//! Single-purpose text tools with a Markdown preview generator.

mod assets;
pub mod components;
mod config;
pub mod logging;
pub mod markdown;
pub mod pages;
pub mod tools;

pub use assets::write_css_assets;
pub use config::{Command, Config, Direction, IoArgs, MarkdownArgs};
pub use markdown::{MarkdownConverter, convert};
pub use tools::TrimMode;
