//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert parser-level
//! errors into `StructureError`.

use super::types::StructureError;

impl From<quick_xml::Error> for StructureError {
    fn from(err: quick_xml::Error) -> Self {
        StructureError::Malformed(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for StructureError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        StructureError::Malformed(format!("invalid attribute: {}", err))
    }
}

impl From<std::str::Utf8Error> for StructureError {
    fn from(err: std::str::Utf8Error) -> Self {
        StructureError::InvalidEncoding(err.to_string())
    }
}
