use crate::cli::types::Commands;
use crate::config::{validate_options, IndexOptions};
use crate::document::Document;
use crate::indexes::{self, IndexReport};
use crate::utils::error::BoxResult;

/// Handle the outline command
pub fn handle_outline_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Outline { input, config: config_path, start, stop } = command {
        let options = super::load_options(config_path.as_deref())?;
        validate_options(&options);
        let html = super::read_input(input)?;

        let outline = outline_html(
            &html,
            &options,
            start.unwrap_or_else(|| options.start_level()),
            stop.unwrap_or(options.toc_level),
        );
        print!("{}", outline);
    }

    Ok(())
}

/// Outline of the headings between `start` and `stop`, empty when the
/// window is disabled
pub fn outline_html(
    html: &str,
    options: &IndexOptions,
    start: usize,
    stop: usize,
) -> String {
    let document = Document::parse(html);
    let mut report = IndexReport::default();
    match indexes::resolve_window("stop", start, stop, &mut report) {
        Some(window) => {
            let forest = indexes::collect_headers(&document, window, options);
            indexes::render_outline(&forest)
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_html() {
        let html = r#"<h1 id="a">A</h1><h3 id="c">C</h3>"#;

        let outline = outline_html(html, &IndexOptions::default(), 0, 6);
        assert_eq!(outline, "- A (#a)\n  - (missing)\n    - C (#c)\n");
    }

    #[test]
    fn test_outline_disabled_window() {
        let outline = outline_html("<h1>A</h1>", &IndexOptions::default(), 2, 1);
        assert!(outline.is_empty());
    }
}
