use crate::document::element_id;
use crate::indexes::types::HeaderTree;

/// Plain-text outline of a heading forest, two spaces per depth.
/// Skipped levels show up as `(missing)`.
pub fn render_outline(headers: &[HeaderTree]) -> String {
    let mut outline = String::new();
    for header in headers {
        append_outline(&mut outline, header, 0);
    }
    outline
}

fn append_outline(outline: &mut String, header: &HeaderTree, depth: usize) {
    let indent = "  ".repeat(depth);
    match header.element() {
        Some(element) => {
            let text = element.text_contents();
            match element_id(element) {
                Some(id) => outline.push_str(&format!("{}- {} (#{})\n", indent, text.trim(), id)),
                None => outline.push_str(&format!("{}- {}\n", indent, text.trim())),
            }
        }
        None => outline.push_str(&format!("{}- (missing)\n", indent)),
    }

    for child in &header.subheaders {
        append_outline(outline, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexOptions;
    use crate::document::Document;
    use crate::indexes::collector::collect_headers;
    use crate::indexes::types::LevelWindow;

    #[test]
    fn test_render_outline() {
        let doc = Document::parse(concat!(
            r#"<h1 id="guide">Guide</h1><h3 id="deep">Deep</h3>"#,
            r#"<h2>Plain</h2>"#,
        ));
        let forest = collect_headers(&doc, LevelWindow::new(0, 6), &IndexOptions::default());

        assert_eq!(
            render_outline(&forest),
            "- Guide (#guide)\n  - (missing)\n    - Deep (#deep)\n  - Plain\n"
        );
    }

    #[test]
    fn test_empty_outline() {
        assert_eq!(render_outline(&[]), "");
    }
}
