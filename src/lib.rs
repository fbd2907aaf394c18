//! Chapter numbering and table-of-contents generation for rendered HTML.
//!
//! The heading tree normalizer lives in [`indexes`]; [`indexes::make_indexes`]
//! is the entry point that numbers headings and inserts the table of contents.

pub mod cli;
pub mod config;
pub mod document;
pub mod indexes;
pub mod utils;
