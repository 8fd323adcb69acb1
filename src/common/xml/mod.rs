//! Markup parsing shared by the chapter loader.

mod tree;

pub use tree::{Descendants, Document, Element};
