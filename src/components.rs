//! Reusable HTML components for page generation
//!
//! Maud component functions shared by generated pages. Components own the
//! document skeleton and footer so page modules only provide body content.

pub mod footer;
pub mod layout;
