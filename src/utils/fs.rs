use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::BoxResult;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Read all of stdin to string
pub fn read_stdin() -> BoxResult<String> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("book.html");

        write_file(&path, "<p>hi</p>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_file(dir.path().join("nope.html")).is_err());
    }
}
