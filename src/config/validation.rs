use log::warn;

use crate::config::IndexOptions;

/// Check options for suspicious values. Level windows are resolved later by
/// the indexer, so nothing here is fatal.
pub fn validate_options(options: &IndexOptions) -> Vec<String> {
    let mut problems = Vec::new();

    if options.toc_title.trim().is_empty() {
        problems.push("`toc_title` is empty, the table of contents will have a blank title".to_string());
    }

    if options.excludes_children.iter().any(|id| id.trim().is_empty()) {
        problems.push("`excludes_children` contains an empty id, it never matches a heading".to_string());
    }

    for problem in &problems {
        warn!("{}", problem);
    }

    problems
}
