//! Access to the directory holding the source images.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, IoAction, Result};

/// Where image files are listed and read from.
///
/// The generator only needs two capabilities: list the entry names of a
/// single directory, and read one entry's bytes. Implementations must not
/// recurse into subdirectories.
pub trait ImageSource {
    /// Returns the names of all entries, in no particular order.
    fn list(&self) -> Result<Vec<String>>;

    /// Reads the raw bytes of the named entry.
    fn read(&self, file_name: &str) -> Result<Vec<u8>>;
}

/// An [`ImageSource`] backed by a filesystem directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageSource for DirectorySource {
    fn list(&self) -> Result<Vec<String>> {
        let list_err = |e| Error::io(IoAction::ListDirectory, &self.root, e);

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(name = ?raw, "skipping entry with non UTF-8 name"),
            }
        }
        Ok(names)
    }

    fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(file_name);
        fs::read(&path).map_err(|e| Error::io(IoAction::ReadImage, path, e))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_source_lists_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a~light.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();

        let source = DirectorySource::new(dir.path());
        let mut names = source.list().unwrap();
        names.sort();
        assert_eq!(names, vec!["a~light.svg", "notes.txt"]);
    }

    #[test]
    fn test_directory_source_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("b~dark.svg"), "<svg/>").unwrap();

        let names = DirectorySource::new(dir.path()).list().unwrap();
        assert_eq!(names, vec!["nested"]);
    }

    #[test]
    fn test_directory_source_missing_directory() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path().join("missing"));

        let err = source.list().unwrap_err();
        assert!(matches!(
            err,
            Error::Io {
                action: IoAction::ListDirectory,
                ..
            }
        ));
    }

    #[test]
    fn test_directory_source_reads_bytes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a~light.svg"), b"\x00\xffsvg").unwrap();

        let bytes = DirectorySource::new(dir.path()).read("a~light.svg").unwrap();
        assert_eq!(bytes, b"\x00\xffsvg");
    }

    #[test]
    fn test_directory_source_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = DirectorySource::new(dir.path())
            .read("gone~dark.svg")
            .unwrap_err();
        assert!(err.to_string().contains("gone~dark.svg"));
    }
}
