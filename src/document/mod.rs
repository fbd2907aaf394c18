//! Host document the indexer works on: a mutable HTML DOM backed by kuchiki.

mod elements;

use std::ops::Range;

use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

use crate::utils::error::{BoxResult, IndexError};

pub use elements::{
    deep_clone, element_id, heading_level, heading_tag, is_element, new_element, new_text,
};

/// A parsed HTML document
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse an HTML string. Fragments are wrapped into `<html><body>` by the parser.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// The document node
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// All heading elements whose level lies in `levels`, in document order
    pub fn headings(&self, levels: Range<usize>) -> Vec<NodeRef> {
        self.root
            .descendants()
            .filter(|node| {
                heading_level(node)
                    .map(|level| levels.contains(&level))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// The `<body>` element
    pub fn body(&self) -> BoxResult<NodeRef> {
        self.root
            .descendants()
            .find(|node| is_element(node, "body"))
            .ok_or_else(|| IndexError::Document("document has no <body> element".to_string()).into())
    }

    /// Insert a node as the first child of `<body>`
    pub fn prepend_to_body(&self, node: NodeRef) -> BoxResult<()> {
        self.body()?.prepend(node);
        Ok(())
    }

    /// Serialize the whole document back to HTML
    pub fn to_html(&self) -> BoxResult<String> {
        let mut buffer = Vec::new();
        self.root.serialize(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            IndexError::Document(format!("serialized document is not UTF-8: {}", e)).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_in_document_order() {
        let doc = Document::parse(
            r#"<h1 id="a">A</h1><p>text</p><h3 id="b">B</h3><h2 id="c">C</h2><h5 id="d">D</h5>"#,
        );

        let ids: Vec<Option<String>> = doc.headings(0..6).iter().map(element_id).collect();
        assert_eq!(
            ids,
            vec![
                Some("a".to_string()),
                Some("b".to_string()),
                Some("c".to_string()),
                Some("d".to_string())
            ]
        );
    }

    #[test]
    fn test_headings_respect_level_range() {
        let doc = Document::parse("<h1>A</h1><h2>B</h2><h3>C</h3><h4>D</h4>");

        let texts: Vec<String> = doc.headings(1..3).iter().map(|h| h.text_contents()).collect();
        assert_eq!(texts, vec!["B", "C"]);
    }

    #[test]
    fn test_prepend_to_body() {
        let doc = Document::parse("<p>content</p>");
        let marker = new_element("nav", &[("id", "first")]);
        doc.prepend_to_body(marker).unwrap();

        let body = doc.body().unwrap();
        let first = body.first_child().unwrap();
        assert!(is_element(&first, "nav"));

        let html = doc.to_html().unwrap();
        assert!(html.contains(r#"<body><nav id="first"></nav><p>content</p></body>"#));
    }
}
