//! Core functionality for data summaries
//!
//! Contains the logic for loading delimited files and rendering previews of
//! their leading rows.

pub mod summary;
pub mod table;

pub use summary::{FileSummarizer, Summary};
pub use table::render_preview;
