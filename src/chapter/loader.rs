//! Main Chapter structure and implementation.

use super::parser::ChapterParser;
use super::{ChapterSource, LoadOptions, Slide};
use crate::common::Result;
use crate::common::encoding::decode_document;
use std::path::Path;
use tracing::{info, warn};

/// A slideshow chapter loaded from a markup document.
///
/// The chapter keeps the location it was loaded from so that [`reload`]
/// can rebuild the timeline after the document changes on disk.
///
/// # Examples
///
/// ```no_run
/// use slide_chapter::Chapter;
///
/// # fn main() -> slide_chapter::Result<()> {
/// let mut chapter = Chapter::open("chapter.xml")?;
///
/// for slide in &chapter {
///     if let Some(picture) = slide.picture() {
///         println!("show {}", picture);
///     }
///     if let Some(sound) = slide.sound() {
///         println!("play {}", sound);
///     }
/// }
///
/// // Pick up edits to the document
/// chapter.reload()?;
/// # Ok(())
/// # }
/// ```
///
/// [`reload`]: Chapter::reload
#[derive(Debug, Clone)]
pub struct Chapter {
    source: ChapterSource,
    options: LoadOptions,
    slides: Vec<Slide>,
}

impl Chapter {
    /// Load a chapter from a file path.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`](crate::StructureError) if the file cannot
    /// be read, is not well-formed, or does not contain exactly one chapter
    /// with at least one scene.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, LoadOptions::default())
    }

    /// Load a chapter from a file path with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        Self::from_source(ChapterSource::from(path.as_ref()), options)
    }

    /// Load a chapter from an in-memory document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slide_chapter::{Chapter, Slide};
    ///
    /// # fn main() -> slide_chapter::Result<()> {
    /// let chapter = Chapter::from_bytes(
    ///     r#"<Chapter><Scene sound="intro.mp3"/></Chapter>"#,
    /// )?;
    /// assert_eq!(chapter.slides(), [Slide::sound_only("intro.mp3")]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_bytes_with_options(bytes, LoadOptions::default())
    }

    /// Load a chapter from an in-memory document with custom options.
    pub fn from_bytes_with_options(bytes: impl Into<Vec<u8>>, options: LoadOptions) -> Result<Self> {
        Self::from_source(ChapterSource::Memory(bytes.into()), options)
    }

    /// Load a chapter from any source.
    pub fn from_source(source: ChapterSource, options: LoadOptions) -> Result<Self> {
        let slides = Self::load(&source, &options)?;
        info!(source = %source, slides = slides.len(), "Loaded chapter");
        Ok(Self {
            source,
            options,
            slides,
        })
    }

    /// Rebuild the slide timeline from the current contents of the source.
    ///
    /// The new timeline replaces the old one only once it is complete. On
    /// error the previous slides stay in place.
    pub fn reload(&mut self) -> Result<()> {
        match Self::load(&self.source, &self.options) {
            Ok(slides) => {
                info!(source = %self.source, slides = slides.len(), "Reloaded chapter");
                self.slides = slides;
                Ok(())
            },
            Err(err) => {
                warn!(source = %self.source, error = %err, "Reload failed, keeping previous slides");
                Err(err)
            },
        }
    }

    fn load(source: &ChapterSource, options: &LoadOptions) -> Result<Vec<Slide>> {
        let bytes = source.read()?;
        let xml = decode_document(&bytes)?;
        ChapterParser::new(options, source.base_dir()).parse(&xml)
    }

    /// Where this chapter was loaded from.
    pub fn source(&self) -> &ChapterSource {
        &self.source
    }

    /// Options the chapter is loaded with.
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Slides of the most recent successful load, in timeline order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Iterate over the slides. Each call starts a fresh traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Number of slides in the timeline.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the timeline is empty. A loaded chapter always has at least
    /// one slide.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl<'a> IntoIterator for &'a Chapter {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
