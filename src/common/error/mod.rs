//! Error types for slide-chapter.
//!
//! All load failures are reported through a single structural error type so
//! callers can keep showing a previous chapter or abort startup as they see fit.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Result, StructureError};
