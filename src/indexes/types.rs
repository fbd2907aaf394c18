use std::fmt;
use std::ops::Range;

use kuchiki::NodeRef;
use log::warn;

/// Deepest heading tag supported: `<h1>` ... `<h6>`
pub const MAX_HEADER_LEVEL: usize = 6;

/// Half-open range `[start, stop)` of heading levels a pass looks at.
/// Levels are counted from zero, so level 0 is `h1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelWindow {
    start: usize,
    stop: usize,
}

impl LevelWindow {
    /// Panics unless `start < stop <= MAX_HEADER_LEVEL`.
    pub fn new(start: usize, stop: usize) -> Self {
        assert!(start < stop, "level window start {} must be below stop {}", start, stop);
        assert!(
            stop <= MAX_HEADER_LEVEL,
            "level window stop {} exceeds h{}",
            stop,
            MAX_HEADER_LEVEL
        );
        Self { start, stop }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn stop(&self) -> usize {
        self.stop
    }

    pub fn levels(&self) -> Range<usize> {
        self.start..self.stop
    }
}

/// One position of the normalized heading hierarchy
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderNode {
    /// A heading element that exists in the document
    Heading(NodeRef),
    /// A level the author skipped, kept so deeper headings still have a parent
    Missing,
}

/// Normalized tree of document headings
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderTree {
    pub node: HeaderNode,
    pub subheaders: Vec<HeaderTree>,
}

impl HeaderTree {
    /// The heading element, or `None` for a placeholder
    pub fn element(&self) -> Option<&NodeRef> {
        match &self.node {
            HeaderNode::Heading(element) => Some(element),
            HeaderNode::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.node, HeaderNode::Missing)
    }
}

/// Something odd the indexer ran into. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexWarning {
    /// A stop level above `h6` was lowered to the maximum
    LevelClamped {
        option: &'static str,
        value: usize,
        max: usize,
    },
    /// A stop level not above the start level switched the feature off
    LevelDisabled {
        option: &'static str,
        value: usize,
        start: usize,
    },
    /// A number was assigned to a heading level the document skipped
    MissingHeaderNumbered { label: String },
    /// An empty entry was added to the table of contents for a skipped level
    MissingHeaderInToc,
}

impl fmt::Display for IndexWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexWarning::LevelClamped { option, value, max } => write!(
                f,
                "Ignore `{}` value {}. Use max possible {} instead",
                option, value, max
            ),
            IndexWarning::LevelDisabled { option, value, start } => write!(
                f,
                "`{}` value {} is not above start level {}, skipping",
                option, value, start
            ),
            IndexWarning::MissingHeaderNumbered { label } => {
                write!(f, "Assigned number for a missed header {}", label)
            }
            IndexWarning::MissingHeaderInToc => write!(f, "Adding missed header to TOC"),
        }
    }
}

/// Summary of one indexing run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexReport {
    /// Headings that received a chapter number
    pub numbered: usize,
    /// Links written into the table of contents
    pub toc_entries: usize,
    /// Whether a table of contents was inserted into the body
    pub toc_inserted: bool,
    pub warnings: Vec<IndexWarning>,
}

impl IndexReport {
    /// Log a warning and keep it in the report
    pub fn warn(&mut self, warning: IndexWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}
