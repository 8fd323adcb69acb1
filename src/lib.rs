//! slide-chapter - load slideshow chapters into transition timelines
//!
//! A chapter document describes an ordered list of scenes, each with an
//! optional sound track and any number of photos. This library parses such a
//! document and expands it into a flat sequence of [`Slide`] transitions that
//! a playback component can step through.
//!
//! # Features
//!
//! - **Well-formedness checks**: malformed markup is rejected, never salvaged
//! - **Tag-search semantics**: scenes and photos are found at any depth
//! - **Reloadable**: a chapter re-reads its document on [`Chapter::reload`]
//!   and keeps its previous timeline if the new one fails to load
//! - **Configurable vocabulary**: tag and attribute names via [`Schema`]
//!
//! # Example - Loading a chapter file
//!
//! ```no_run
//! use slide_chapter::Chapter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chapter = Chapter::open("chapter.xml")?;
//!
//! for (i, slide) in chapter.iter().enumerate() {
//!     println!("{:>3}: {}", i + 1, slide);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Handling a bad document
//!
//! ```rust
//! use slide_chapter::{Chapter, StructureError};
//!
//! match Chapter::from_bytes("<Chapter/>") {
//!     Err(StructureError::NoScenes) => {},
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

/// Shared error type, text decoding and markup tree
pub mod common;

/// Chapter loading and the slide timeline
///
/// This module provides [`Chapter`], the owner of a loaded timeline, and the
/// expansion of scene descriptions into [`Slide`] transitions.
pub mod chapter;

// Re-export commonly used types for convenience
pub use chapter::{Chapter, ChapterSource, LoadOptions, Schema, Slide, parse_slides};
pub use common::{Result, StructureError};
