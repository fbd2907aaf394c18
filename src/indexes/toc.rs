use kuchiki::NodeRef;
use log::{debug, info};

use crate::config::IndexOptions;
use crate::document::{deep_clone, element_id, is_element, new_element, new_text, Document};
use crate::indexes::collector::{collect_headers, describe_window, resolve_window};
use crate::indexes::types::{HeaderTree, IndexReport, IndexWarning};
use crate::utils::error::BoxResult;

/// Id of the generated table-of-contents container
pub const TOC_ID: &str = "doc-toc";

/// Build the table of contents and insert it as the first child of `<body>`.
/// Nothing is inserted when `toc_level` disables it.
pub fn make_toc(document: &Document, options: &IndexOptions, report: &mut IndexReport) -> BoxResult<()> {
    let window = match resolve_window("toc_level", options.start_level(), options.toc_level, report) {
        Some(window) => window,
        None => return Ok(()),
    };

    info!("Generate a table of contents from {}", describe_window(window));

    let top_headers = collect_headers(document, window, options);
    let toc = build_toc(&top_headers, &options.toc_title, report);

    document.prepend_to_body(toc)?;
    report.toc_inserted = true;
    Ok(())
}

/// `<article id="doc-toc"><h1>{title}</h1><ul>...</ul></article>` for a forest
pub fn build_toc(top_headers: &[HeaderTree], title: &str, report: &mut IndexReport) -> NodeRef {
    let toc = new_element("article", &[("id", TOC_ID)]);

    let heading = new_element("h1", &[]);
    heading.append(new_text(title));
    toc.append(heading);

    append_list(top_headers, &toc, report);
    toc
}

fn append_list(headers: &[HeaderTree], parent: &NodeRef, report: &mut IndexReport) {
    let list = new_element("ul", &[]);
    parent.append(list.clone());

    for header in headers {
        let item = match header.element() {
            Some(element) => {
                report.toc_entries += 1;
                make_link(element)
            }
            None => {
                report.warn(IndexWarning::MissingHeaderInToc);
                new_element("li", &[])
            }
        };
        list.append(item.clone());

        if !header.subheaders.is_empty() {
            append_list(&header.subheaders, &item, report);
        }
    }
}

/// `<li><a href="#id">heading content</a></li>`
fn make_link(heading: &NodeRef) -> NodeRef {
    let item = new_element("li", &[]);
    let id = element_id(heading).unwrap_or_default();
    let href = format!("#{}", id);
    let link = new_element("a", &[("href", href.as_str())]);

    for child in heading.children() {
        if is_element(&child, "a") {
            // Keep the text of a link inside the heading, not the link itself
            for inner in child.children() {
                link.append(deep_clone(&inner));
            }
        } else {
            link.append(deep_clone(&child));
        }
    }

    debug!("| [{}]({})", heading.text_contents().trim(), id);
    item.append(link);
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toc_options(toc_level: usize) -> IndexOptions {
        IndexOptions {
            toc_level,
            ..IndexOptions::default()
        }
    }

    fn toc_html(document: &Document) -> String {
        let body = document.body().unwrap();
        let first = body.first_child().unwrap();
        assert_eq!(element_id(&first).as_deref(), Some(TOC_ID));
        first.to_string()
    }

    #[test]
    fn test_link_to_heading() {
        let doc = Document::parse(r#"<h1 id="top">Top</h1><h2 id="intro">Intro</h2>"#);
        let mut report = IndexReport::default();

        make_toc(&doc, &toc_options(2), &mut report).unwrap();

        assert_eq!(
            toc_html(&doc),
            concat!(
                r#"<article id="doc-toc"><h1>Table of Contents</h1><ul>"#,
                r##"<li><a href="#top">Top</a><ul><li><a href="#intro">Intro</a></li></ul></li>"##,
                r#"</ul></article>"#,
            )
        );
        assert!(report.toc_inserted);
        assert_eq!(report.toc_entries, 2);
    }

    #[test]
    fn test_custom_title() {
        let doc = Document::parse(r#"<h1 id="a">A</h1>"#);
        let options = IndexOptions {
            toc_title: "Contents".to_string(),
            ..IndexOptions::default()
        };
        let mut report = IndexReport::default();

        make_toc(&doc, &options, &mut report).unwrap();

        assert!(toc_html(&doc).contains("<h1>Contents</h1>"));
    }

    #[test]
    fn test_heading_without_id_links_to_bare_hash() {
        let doc = Document::parse("<h1>Anonymous</h1>");
        let mut report = IndexReport::default();

        make_toc(&doc, &toc_options(1), &mut report).unwrap();

        assert!(toc_html(&doc).contains(r##"<a href="#">Anonymous</a>"##));
    }

    #[test]
    fn test_inner_link_is_unwrapped() {
        let doc = Document::parse(
            r##"<h1 id="api">See <a href="#ref" class="headerlink">the <b>API</b></a></h1>"##,
        );
        let heading = doc.headings(0..1).remove(0);
        let mut report = IndexReport::default();

        make_toc(&doc, &toc_options(1), &mut report).unwrap();

        let html = toc_html(&doc);
        assert!(html.contains(r##"<a href="#api">See the <b>API</b></a>"##));
        // The heading itself still has its own link
        assert_eq!(element_id(&heading).as_deref(), Some("api"));
        assert!(heading.children().any(|child| is_element(&child, "a")));
        assert_eq!(heading.text_contents(), "See the API");
    }

    #[test]
    fn test_placeholder_becomes_empty_item() {
        let doc = Document::parse(r#"<h1 id="a">A</h1><h3 id="c">C</h3>"#);
        let mut report = IndexReport::default();

        make_toc(&doc, &toc_options(3), &mut report).unwrap();

        assert!(toc_html(&doc).contains(concat!(
            r##"<li><a href="#a">A</a><ul><li><ul>"##,
            r##"<li><a href="#c">C</a></li></ul></li></ul></li>"##,
        )));
        assert_eq!(report.warnings, vec![IndexWarning::MissingHeaderInToc]);
        assert_eq!(report.toc_entries, 2);
    }

    #[test]
    fn test_disabled_toc_inserts_nothing() {
        let doc = Document::parse(r#"<h1 id="a">A</h1><p>body</p>"#);
        let before = doc.to_html().unwrap();
        let options = IndexOptions {
            ignore_top_header: true,
            toc_level: 1,
            ..IndexOptions::default()
        };
        let mut report = IndexReport::default();

        make_toc(&doc, &options, &mut report).unwrap();

        assert_eq!(doc.to_html().unwrap(), before);
        assert!(!report.toc_inserted);
    }

    #[test]
    fn test_toc_goes_before_existing_content() {
        let doc = Document::parse(r#"<p>preface</p><h1 id="a">A</h1>"#);
        let mut report = IndexReport::default();

        make_toc(&doc, &toc_options(2), &mut report).unwrap();

        let html = doc.to_html().unwrap();
        let toc_at = html.find(TOC_ID).unwrap();
        let preface_at = html.find("preface").unwrap();
        assert!(toc_at < preface_at);
    }

    #[test]
    fn test_empty_forest_still_builds_container() {
        let mut report = IndexReport::default();
        let toc = build_toc(&[], "Contents", &mut report);

        assert_eq!(
            toc.to_string(),
            r#"<article id="doc-toc"><h1>Contents</h1><ul></ul></article>"#
        );
    }
}
