use log::{info, warn};

use crate::cli::types::Commands;
use crate::config::{validate_options, IndexOptions};
use crate::document::Document;
use crate::indexes::{self, IndexReport};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the index command
pub fn handle_index_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Index { input, output, .. } = command {
        let options = index_options(command)?;

        info!("Indexing {}", input.display());
        let html = super::read_input(input)?;
        let html = index_html(&html, &options)?;

        match output {
            Some(path) => {
                fs::write_file(path, &html)?;
                info!("Wrote {}", path.display());
            }
            None => print!("{}", html),
        }
    }

    Ok(())
}

/// Options from the config file with the command line flags applied on top,
/// validated once
fn index_options(command: &Commands) -> BoxResult<IndexOptions> {
    let mut options = IndexOptions::default();

    if let Commands::Index {
        config: config_path,
        toc_level,
        ordered_chapter_level,
        toc_title,
        ignore_top_header,
        exclude,
        ..
    } = command
    {
        options = super::load_options(config_path.as_deref())?;

        // Command line options take precedence over the config file
        if let Some(level) = toc_level {
            options.toc_level = *level;
        }
        if let Some(level) = ordered_chapter_level {
            options.ordered_chapter_level = *level;
        }
        if let Some(title) = toc_title {
            options.toc_title = title.clone();
        }
        if *ignore_top_header {
            options.ignore_top_header = true;
        }
        options.excludes_children.extend(exclude.iter().cloned());
    }

    validate_options(&options);
    Ok(options)
}

/// Parse, index and serialize one HTML document
pub fn index_html(html: &str, options: &IndexOptions) -> BoxResult<String> {
    let document = Document::parse(html);
    let report = indexes::make_indexes(&document, options)?;
    log_summary(&report);
    document.to_html()
}

fn log_summary(report: &IndexReport) {
    info!(
        "Numbered {} headings, {} table of contents entries{}",
        report.numbered,
        report.toc_entries,
        if report.toc_inserted { "" } else { " (no table of contents inserted)" }
    );
    if !report.warnings.is_empty() {
        warn!("{} warnings while indexing", report.warnings.len());
    }
}
