//! Common types and utilities shared by the chapter loader.
//!
//! This module provides the structural error type, BOM-aware UTF-8/UTF-16 decoding,
//! and the small element tree chapter documents are parsed into.

// Submodule declarations
pub mod bom;
pub mod encoding;
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Result, StructureError};
