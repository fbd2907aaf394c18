use log::{debug, info};

use crate::config::IndexOptions;
use crate::document::{element_id, new_element, new_text, Document};
use crate::indexes::collector::{collect_headers, describe_window, resolve_window};
use crate::indexes::types::{HeaderTree, IndexReport, IndexWarning, MAX_HEADER_LEVEL};

/// Class of the `<span>` holding a chapter number
pub const ORDER_CLASS: &str = "pdf-order";

/// Prefix every heading in the numbering window with its chapter number,
/// e.g. `<h2><span class="pdf-order">1.2 </span>Setup</h2>`.
pub fn inject_heading_order(document: &Document, options: &IndexOptions, report: &mut IndexReport) {
    let window = match resolve_window(
        "ordered_chapter_level",
        options.start_level(),
        options.ordered_chapter_level,
        report,
    ) {
        Some(window) => window,
        None => return,
    };

    info!("Number headers from {}", describe_window(window));

    let top_headers = collect_headers(document, window, options);
    inject_order(&top_headers, &[], report);
}

fn inject_order(headers: &[HeaderTree], prefix: &[usize], report: &mut IndexReport) {
    assert!(prefix.len() < MAX_HEADER_LEVEL);

    for (index, header) in headers.iter().enumerate() {
        let mut numbers = prefix.to_vec();
        numbers.push(index + 1);
        let label = format_label(&numbers);

        match header.element() {
            Some(element) => {
                debug!(
                    "| [{} {}]({})",
                    label,
                    element.text_contents().trim(),
                    element_id(element).unwrap_or_else(|| "(none)".to_string())
                );
                let marker = new_element("span", &[("class", ORDER_CLASS)]);
                marker.append(new_text(&format!("{} ", label)));
                element.prepend(marker);
                report.numbered += 1;
            }
            None => report.warn(IndexWarning::MissingHeaderNumbered { label }),
        }

        if !header.subheaders.is_empty() {
            inject_order(&header.subheaders, &numbers, report);
        }
    }
}

/// Dotted chapter number, `[2, 3, 1]` becomes `2.3.1`
pub fn format_label(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
