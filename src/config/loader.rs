use log::debug;
use std::fs;
use std::path::Path;

use crate::config::types::IndexOptions;
use crate::utils::error::{BoxResult, IndexError};

/// Plugin section name looked up in mkdocs-style YAML files
const PLUGIN_SECTION: &str = "with-pdf";

/// Load indexing options from a YAML, TOML or JSON file
pub fn load_options<P: AsRef<Path>>(path: P) -> BoxResult<IndexOptions> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IndexError::Config(format!(
            "Configuration file not found: {}", path.display()
        )).into());
    }

    debug!("Loading options from {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| IndexError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    let options = match path.extension() {
        Some(ext) => {
            let ext_str = ext.to_string_lossy().to_lowercase();
            match ext_str.as_str() {
                "yml" | "yaml" => parse_yaml_options(&content, path)?,
                "toml" => parse_toml_options(&content, path)?,
                "json" => parse_json_options(&content, path)?,
                _ => {
                    return Err(IndexError::Config(format!(
                        "Unsupported configuration file format: {}", ext.to_string_lossy()
                    )).into());
                }
            }
        }
        // Assume YAML if no extension
        None => parse_yaml_options(&content, path)?,
    };

    debug!("Options loaded: {:?}", options);
    Ok(options)
}

/// Parse YAML options. Either the options sit at the top level, or the file
/// is an mkdocs config whose `plugins` list holds a `with-pdf` mapping.
fn parse_yaml_options(content: &str, path: &Path) -> BoxResult<IndexOptions> {
    let yaml_value = serde_yaml::from_str::<serde_yaml::Value>(content)
        .map_err(|e| IndexError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))?;

    let section = match find_plugin_section(&yaml_value) {
        Some(section) => {
            debug!("Using `{}` plugin section of {}", PLUGIN_SECTION, path.display());
            section
        }
        None => yaml_value,
    };

    // An empty file or an empty plugin entry means "all defaults"
    if section.is_null() {
        return Ok(IndexOptions::default());
    }

    serde_yaml::from_value(section)
        .map_err(|e| IndexError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Find `plugins: [ { with-pdf: {...} } ]` in an mkdocs-style document
fn find_plugin_section(yaml_value: &serde_yaml::Value) -> Option<serde_yaml::Value> {
    let plugins = yaml_value.get("plugins")?.as_sequence()?;
    plugins.iter().find_map(|plugin| {
        plugin.as_mapping()?.get(PLUGIN_SECTION).cloned()
    })
}

/// Parse a TOML options file
fn parse_toml_options(content: &str, path: &Path) -> BoxResult<IndexOptions> {
    toml::from_str(content)
        .map_err(|e| IndexError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON options file
fn parse_json_options(content: &str, path: &Path) -> BoxResult<IndexOptions> {
    serde_json::from_str(content)
        .map_err(|e| IndexError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "options.yml",
            "toc_level: 3\nordered_chapter_level: 2\ntoc_title: Contents\nexcludes_children:\n  - appendix\n",
        );

        let options = load_options(&path).unwrap();
        assert_eq!(options.toc_level, 3);
        assert_eq!(options.ordered_chapter_level, 2);
        assert_eq!(options.toc_title, "Contents");
        assert!(options.excludes_children.contains("appendix"));
    }

    #[test]
    fn test_load_mkdocs_plugin_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "mkdocs.yml",
            "site_name: Manual\nplugins:\n  - search\n  - with-pdf:\n      ignore_top_header: true\n      toc_level: 4\n",
        );

        let options = load_options(&path).unwrap();
        assert!(options.ignore_top_header);
        assert_eq!(options.toc_level, 4);
        assert_eq!(options.ordered_chapter_level, 3);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "options.toml",
            "ignore_top_header = true\nexcludes_children = [\"legal\"]\n",
        );

        let options = load_options(&path).unwrap();
        assert!(options.ignore_top_header);
        assert!(options.excludes_children.contains("legal"));
        assert_eq!(options.toc_level, 2);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "options.json", r#"{"toc_level": 6, "toc_title": "Index"}"#);

        let options = load_options(&path).unwrap();
        assert_eq!(options.toc_level, 6);
        assert_eq!(options.toc_title, "Index");
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "options.yaml", "");

        assert_eq!(load_options(&path).unwrap(), IndexOptions::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(dir.path().join("absent.yml")).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "options.ini", "toc_level=3");

        let err = load_options(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "options.yml", "toc_level: [unclosed\n");

        assert!(load_options(&path).is_err());
    }
}
