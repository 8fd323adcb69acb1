//! Structure error type for chapter loading.
//!
//! Every way a chapter document can fail to load is a structural failure:
//! the document could not be read, was not well-formed markup, or did not
//! have the chapter/scene shape the loader expects.
use std::path::PathBuf;
use thiserror::Error;

/// Error raised when a chapter document cannot be turned into a timeline.
#[derive(Error, Debug)]
pub enum StructureError {
    /// The document is absent or could not be read
    #[error("Cannot read chapter document {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document bytes are not valid UTF-8 or BOM-marked UTF-16 text
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The document is not well-formed markup
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// The document must contain exactly one chapter element
    #[error("Expected exactly one chapter element, found {0}")]
    ChapterCount(usize),

    /// The chapter element has no scenes
    #[error("Chapter contains no scenes")]
    NoScenes,
}

impl StructureError {
    /// Whether the failure came from reading the source rather than its content.
    #[inline]
    pub fn is_unreadable(&self) -> bool {
        matches!(self, StructureError::Unreadable { .. })
    }
}

/// Result type for chapter operations.
pub type Result<T> = std::result::Result<T, StructureError>;
