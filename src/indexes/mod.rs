//! Chapter numbering and table of contents for a rendered document.
//!
//! Both features work on a normalized heading tree built by the collector.
//! Each one collects with its own level window, so numbering may go deeper
//! or shallower than the table of contents.

mod collector;
mod ordering;
mod outline;
mod toc;
mod types;

use crate::config::IndexOptions;
use crate::document::Document;
use crate::utils::error::BoxResult;

pub use collector::{collect_headers, resolve_window};
pub use ordering::{format_label, inject_heading_order, ORDER_CLASS};
pub use outline::render_outline;
pub use toc::{build_toc, make_toc, TOC_ID};
pub use types::{HeaderNode, HeaderTree, IndexReport, IndexWarning, LevelWindow, MAX_HEADER_LEVEL};

/// Number the headings, then generate the table of contents.
///
/// Numbering runs first so the TOC links pick up the chapter numbers as part
/// of the heading content they copy.
pub fn make_indexes(document: &Document, options: &IndexOptions) -> BoxResult<IndexReport> {
    let mut report = IndexReport::default();

    inject_heading_order(document, options, &mut report);
    make_toc(document, options, &mut report)?;

    Ok(report)
}
