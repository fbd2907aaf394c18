use html5ever::{LocalName, Namespace, QualName};
use kuchiki::{Attribute, ExpandedName, NodeData, NodeRef};
use lazy_static::lazy_static;
use regex::Regex;

/// Namespace every element created by the indexer lives in
const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

lazy_static! {
    static ref HEADING_TAG_REGEX: Regex = Regex::new(r"^h([1-6])$").unwrap();
}

/// Heading level of an element, counted from zero (`h1` is 0, `h6` is 5).
/// Returns `None` for anything that is not a heading element.
pub fn heading_level(node: &NodeRef) -> Option<usize> {
    let element = node.as_element()?;
    let caps = HEADING_TAG_REGEX.captures(&element.name.local)?;
    let rank: usize = caps[1].parse().ok()?;
    Some(rank - 1)
}

/// Tag name for a zero-based heading level
pub fn heading_tag(level: usize) -> String {
    format!("h{}", level + 1)
}

/// Whether the node is an element with the given (lowercase) tag name
pub fn is_element(node: &NodeRef, tag: &str) -> bool {
    node.as_element()
        .map(|element| &*element.name.local == tag)
        .unwrap_or(false)
}

/// The `id` attribute of an element, if it has one
pub fn element_id(node: &NodeRef) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get("id").map(|id| id.to_string())
}

/// Create a detached HTML element with the given attributes
pub fn new_element(tag: &str, attrs: &[(&str, &str)]) -> NodeRef {
    let name = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag));
    let attributes = attrs.iter().map(|(key, value)| {
        (
            ExpandedName::new("", *key),
            Attribute {
                prefix: None,
                value: value.to_string(),
            },
        )
    });
    NodeRef::new_element(name, attributes)
}

/// Create a detached text node
pub fn new_text(text: &str) -> NodeRef {
    NodeRef::new_text(text)
}

/// Deep copy of a node and its whole subtree. The copy is detached, so it can
/// be appended elsewhere without moving the original out of its parent.
pub fn deep_clone(node: &NodeRef) -> NodeRef {
    let copy = match node.data() {
        NodeData::Element(element) => {
            let attributes = element.attributes.borrow().map.clone();
            NodeRef::new_element(element.name.clone(), attributes)
        }
        NodeData::Text(text) => NodeRef::new_text(text.borrow().clone()),
        NodeData::Comment(comment) => NodeRef::new_comment(comment.borrow().clone()),
        NodeData::ProcessingInstruction(pi) => {
            let (target, data) = pi.borrow().clone();
            NodeRef::new_processing_instruction(target, data)
        }
        NodeData::Doctype(doctype) => NodeRef::new_doctype(
            doctype.name.clone(),
            doctype.public_id.clone(),
            doctype.system_id.clone(),
        ),
        NodeData::Document(_) | NodeData::DocumentFragment => NodeRef::new_document(),
    };

    for child in node.children() {
        copy.append(deep_clone(&child));
    }

    copy
}
