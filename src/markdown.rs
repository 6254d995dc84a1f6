//! Markdown to HTML conversion through an ordered rewrite pipeline.
//!
//! The converter does not build a syntax tree. It runs a fixed sequence of
//! regex substitutions over the whole text, each one consuming the output of
//! the previous one: headers, emphasis, links, images, code, list items,
//! blockquotes, horizontal rules, and finally paragraph wrapping.

mod converter;
mod pipeline;
mod rules;

pub use converter::{MarkdownConverter, convert};
pub use pipeline::{Pipeline, Rewrite, Rule};
