/// Default TOC stop level: `h1` and `h2`
pub fn default_toc_level() -> usize {
    2
}

/// Default numbering stop level: `h1` to `h3`
pub fn default_ordered_chapter_level() -> usize {
    3
}

/// Default TOC title
pub fn default_toc_title() -> String {
    "Table of Contents".to_string()
}
