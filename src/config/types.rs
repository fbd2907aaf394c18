use serde::Deserialize;
use std::collections::BTreeSet;

use crate::config::defaults;

/// Options controlling chapter numbering and table-of-contents generation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexOptions {
    /// Start both windows at `h2` instead of `h1`
    #[serde(default)]
    pub ignore_top_header: bool,

    /// Stop level (exclusive, counted from 0) of the table of contents
    #[serde(default = "defaults::default_toc_level")]
    pub toc_level: usize,

    /// Stop level (exclusive, counted from 0) of chapter numbering
    #[serde(default = "defaults::default_ordered_chapter_level")]
    pub ordered_chapter_level: usize,

    /// Title of the generated table of contents
    #[serde(default = "defaults::default_toc_title")]
    pub toc_title: String,

    /// Heading ids whose heading and nested headings are left out
    #[serde(default)]
    pub excludes_children: BTreeSet<String>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            ignore_top_header: false,
            toc_level: defaults::default_toc_level(),
            ordered_chapter_level: defaults::default_ordered_chapter_level(),
            toc_title: defaults::default_toc_title(),
            excludes_children: BTreeSet::new(),
        }
    }
}

impl IndexOptions {
    /// First heading level both windows start from
    pub fn start_level(&self) -> usize {
        if self.ignore_top_header {
            1
        } else {
            0
        }
    }

    /// Whether a heading id is listed in `excludes_children`.
    /// Headings without an id are never excluded.
    pub fn is_excluded(&self, id: Option<&str>) -> bool {
        match id {
            Some(id) if !id.is_empty() => self.excludes_children.contains(id),
            _ => false,
        }
    }
}
