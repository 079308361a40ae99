//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form surfaces while the pages own
//! the state they read and write.

pub mod banner;
pub mod page_header;
pub mod section_grid;
