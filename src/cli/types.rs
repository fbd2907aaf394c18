use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "tocsmith")]
#[command(about = "Number chapters and build a table of contents for rendered HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Number headings and insert a table of contents
    #[command(alias = "i")]
    Index {
        /// HTML file to process, `-` reads stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to write the result (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Options file (YAML, TOML, JSON or an mkdocs.yml)
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Stop level of the table of contents
        #[arg(long, value_name = "LEVEL")]
        toc_level: Option<usize>,

        /// Stop level of chapter numbering
        #[arg(long, value_name = "LEVEL")]
        ordered_chapter_level: Option<usize>,

        /// Title of the table of contents
        #[arg(long, value_name = "TEXT")]
        toc_title: Option<String>,

        /// Start numbering and the table of contents at h2
        #[arg(long, default_value_t = false)]
        ignore_top_header: bool,

        /// Heading id to leave out together with its subheadings (repeatable)
        #[arg(short = 'x', long = "exclude", value_name = "ID")]
        exclude: Vec<String>,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// Print the normalized heading tree of a document
    #[command(alias = "o")]
    Outline {
        /// HTML file to inspect, `-` reads stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Options file (YAML, TOML, JSON or an mkdocs.yml)
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// First heading level, counted from 0 (defaults to the configured start)
        #[arg(long, value_name = "LEVEL")]
        start: Option<usize>,

        /// Stop level, exclusive (defaults to `toc_level`)
        #[arg(long, value_name = "LEVEL")]
        stop: Option<usize>,
    },
}
