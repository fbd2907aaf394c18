mod index;
mod outline;

pub use index::handle_index_command;
pub use outline::handle_outline_command;

use std::path::Path;

use crate::config::{self, IndexOptions};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Read the HTML input, `-` meaning stdin
fn read_input(input: &Path) -> BoxResult<String> {
    if input == Path::new("-") {
        fs::read_stdin()
    } else {
        fs::read_file(input)
    }
}

/// Options from the config file if one was given, defaults otherwise
fn load_options(config_path: Option<&Path>) -> BoxResult<IndexOptions> {
    match config_path {
        Some(path) => config::load_options(path),
        None => Ok(IndexOptions::default()),
    }
}
