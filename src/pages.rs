//! Page generation modules
//!
//! Each page module builds a complete HTML document from tool output and
//! utilizes shared components from the components module.

pub mod preview;
