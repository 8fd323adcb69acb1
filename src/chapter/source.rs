//! Where a chapter document is read from.

use crate::common::{Result, StructureError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of a chapter document, kept by the chapter for reloading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterSource {
    /// A document on disk, re-read on every load
    File(PathBuf),
    /// A document held in memory
    Memory(Vec<u8>),
}

impl ChapterSource {
    /// Read the full document. The file handle is closed before returning.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            ChapterSource::File(path) => {
                std::fs::read(path).map_err(|source| StructureError::Unreadable {
                    path: path.clone(),
                    source,
                })
            },
            ChapterSource::Memory(bytes) => Ok(bytes.clone()),
        }
    }

    /// Path of the document, if it lives on disk.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ChapterSource::File(path) => Some(path),
            ChapterSource::Memory(_) => None,
        }
    }

    /// Directory relative slide paths are resolved against.
    pub(crate) fn base_dir(&self) -> Option<&Path> {
        self.path().and_then(Path::parent)
    }
}

impl fmt::Display for ChapterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterSource::File(path) => write!(f, "{}", path.display()),
            ChapterSource::Memory(bytes) => write!(f, "<memory: {} bytes>", bytes.len()),
        }
    }
}

impl From<PathBuf> for ChapterSource {
    fn from(path: PathBuf) -> Self {
        ChapterSource::File(path)
    }
}

impl From<&Path> for ChapterSource {
    fn from(path: &Path) -> Self {
        ChapterSource::File(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let source = ChapterSource::from(dir.path().join("missing.xml"));
        let err = source.read().unwrap_err();
        assert!(err.is_unreadable());
        assert!(err.to_string().contains("missing.xml"));
    }

    #[test]
    fn test_base_dir() {
        let source = ChapterSource::File(PathBuf::from("shows/intro/chapter.xml"));
        assert_eq!(source.base_dir(), Some(Path::new("shows/intro")));
        assert_eq!(ChapterSource::Memory(Vec::new()).base_dir(), None);
    }
}
