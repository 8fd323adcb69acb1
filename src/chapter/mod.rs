//! Slideshow chapter loading.
//!
//! A chapter document lists scenes, each with an optional sound track and any
//! number of photos:
//!
//! ```xml
//! <Chapter>
//!   <Scene sound="theme.mp3">
//!     <Photo path="beach.jpg"/>
//!     <Photo path="sunset.jpg"/>
//!   </Scene>
//!   <Scene sound="quiet.mp3"/>
//! </Chapter>
//! ```
//!
//! Loading flattens it into a timeline of [`Slide`] transitions:
//!
//! - the first photo of a scene switches picture and sound together,
//! - later photos of the scene switch only the picture,
//! - a scene without photos switches only the sound.
//!
//! The document above yields `(beach.jpg, theme.mp3)`, `(sunset.jpg, -)` and
//! `(-, quiet.mp3)`.
//!
//! # Example
//!
//! ```rust
//! use slide_chapter::Chapter;
//!
//! let chapter = Chapter::from_bytes(
//!     r#"<Chapter><Scene sound="a.mp3"><Photo path="p1.jpg"/><Photo path="p2.jpg"/></Scene></Chapter>"#,
//! )?;
//!
//! let pictures: Vec<_> = chapter.iter().filter_map(|s| s.picture()).collect();
//! assert_eq!(pictures, ["p1.jpg", "p2.jpg"]);
//! # Ok::<(), slide_chapter::StructureError>(())
//! ```

// Submodule declarations
mod loader;
mod options;
mod parser;
mod slide;
mod source;


// Re-exports
pub use loader::Chapter;
pub use options::{LoadOptions, Schema};
pub use parser::parse_slides;
pub use slide::Slide;
pub use source::ChapterSource;
