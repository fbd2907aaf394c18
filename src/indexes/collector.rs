use log::info;

use crate::config::IndexOptions;
use crate::document::{element_id, heading_level, heading_tag, Document};
use crate::indexes::types::{
    HeaderNode, HeaderTree, IndexReport, IndexWarning, LevelWindow, MAX_HEADER_LEVEL,
};

/// Turn a configured stop level into a window starting at `start`.
///
/// A stop level above `h6` is clamped, one not above `start` disables the
/// feature. Both cases leave a warning in the report.
pub fn resolve_window(
    option: &'static str,
    start: usize,
    stop: usize,
    report: &mut IndexReport,
) -> Option<LevelWindow> {
    let clamped = if stop > MAX_HEADER_LEVEL {
        report.warn(IndexWarning::LevelClamped {
            option,
            value: stop,
            max: MAX_HEADER_LEVEL,
        });
        MAX_HEADER_LEVEL
    } else {
        stop
    };

    if clamped <= start {
        report.warn(IndexWarning::LevelDisabled { option, value: stop, start });
        return None;
    }

    Some(LevelWindow::new(start, clamped))
}

/// Heading tree under construction. Children are indices into `nodes`.
struct Arena {
    nodes: Vec<(HeaderNode, Vec<usize>)>,
    top: Vec<usize>,
}

impl Arena {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            top: Vec::new(),
        }
    }

    fn push(&mut self, node: HeaderNode, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push((node, Vec::new()));
        match parent {
            Some(parent) => self.nodes[parent].1.push(index),
            None => self.top.push(index),
        }
        index
    }

    fn into_forest(self) -> Vec<HeaderTree> {
        let mut slots: Vec<Option<(HeaderNode, Vec<usize>)>> =
            self.nodes.into_iter().map(Some).collect();
        self.top
            .iter()
            .map(|&index| Self::take_tree(&mut slots, index))
            .collect()
    }

    fn take_tree(slots: &mut [Option<(HeaderNode, Vec<usize>)>], index: usize) -> HeaderTree {
        let (node, children) = slots[index]
            .take()
            .unwrap_or((HeaderNode::Missing, Vec::new()));
        HeaderTree {
            node,
            subheaders: children
                .into_iter()
                .map(|child| Self::take_tree(slots, child))
                .collect(),
        }
    }
}

/// Collect the document headings inside `window` into a forest of top-level
/// headers with their subheaders.
///
/// Levels skipped between a heading and its nearest ancestor get `Missing`
/// placeholders. A heading whose id is in `options.excludes_children` is left
/// out together with every heading nested below it.
pub fn collect_headers(
    document: &Document,
    window: LevelWindow,
    options: &IndexOptions,
) -> Vec<HeaderTree> {
    let start = window.start();
    let stop = window.stop();

    let mut arena = Arena::new();
    // Most recent node seen at each level
    let mut current: Vec<Option<usize>> = vec![None; stop];
    // Whether the most recent heading at each level is excluded
    let mut excluded: Vec<bool> = vec![false; stop];

    for heading in document.headings(window.levels()) {
        let level = match heading_level(&heading) {
            Some(level) => level,
            None => continue,
        };

        let id = element_id(&heading);
        excluded[level] = is_excluded(id.as_deref(), options);
        excluded[level + 1..].iter_mut().for_each(|flag| *flag = false);

        // The excluded heading goes too, not only what is nested below it
        if excluded[..=level].iter().any(|&flag| flag) {
            continue;
        }

        let parent = if level == start {
            None
        } else {
            if current[level - 1].is_none() {
                for missing_level in start..level {
                    if current[missing_level].is_some() {
                        continue;
                    }
                    let parent = if missing_level == start {
                        None
                    } else {
                        current[missing_level - 1]
                    };
                    current[missing_level] = Some(arena.push(HeaderNode::Missing, parent));
                }
            }
            current[level - 1]
        };

        current[level] = Some(arena.push(HeaderNode::Heading(heading), parent));
        current[level + 1..].iter_mut().for_each(|slot| *slot = None);
    }

    arena.into_forest()
}

fn is_excluded(id: Option<&str>, options: &IndexOptions) -> bool {
    if options.is_excluded(id) {
        info!("|  (exclude '{}')", id.unwrap_or_default());
        return true;
    }
    false
}

/// Heading tags a window covers, e.g. `h2 to h3`
pub fn describe_window(window: LevelWindow) -> String {
    format!("{} to {}", heading_tag(window.start()), heading_tag(window.stop() - 1))
}
