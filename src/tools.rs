//! Single-purpose text transforms.
//!
//! Each submodule wraps one small conversion with no shared state. Encoders
//! are infallible; decoders return errors describing malformed input.

pub mod base64;
pub mod trim;
pub mod url;

pub use trim::TrimMode;
