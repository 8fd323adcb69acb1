//! Expansion of chapter documents into slide timelines.

use super::{LoadOptions, Slide};
use crate::common::xml::{Document, Element};
use crate::common::{Result, StructureError};
use smallvec::SmallVec;
use std::path::Path;
use tracing::{debug, warn};

/// Turns a chapter document into its flat slide sequence.
///
/// Every scene contributes one slide per photo found below it. The first
/// photo carries the scene's sound, later photos keep it running. A scene
/// without photos contributes a single sound-only slide.
pub(crate) struct ChapterParser<'a> {
    options: &'a LoadOptions,
    base_dir: Option<&'a Path>,
}

impl<'a> ChapterParser<'a> {
    /// Create a parser. `base_dir` is only used when the options ask for
    /// relative path resolution.
    pub fn new(options: &'a LoadOptions, base_dir: Option<&'a Path>) -> Self {
        Self {
            options,
            base_dir: base_dir.filter(|_| options.resolve_relative_paths),
        }
    }

    /// Parse a document and expand it into slides.
    pub fn parse(&self, xml: &str) -> Result<Vec<Slide>> {
        let document = Document::parse(xml)?;
        self.expand(&document)
    }

    fn expand(&self, document: &Document) -> Result<Vec<Slide>> {
        let schema = &self.options.schema;

        let chapters: SmallVec<[&Element; 1]> =
            document.elements_named(&schema.chapter_tag).collect();
        if chapters.len() != 1 {
            return Err(StructureError::ChapterCount(chapters.len()));
        }

        let scenes: Vec<&Element> = chapters[0].descendants_named(&schema.scene_tag).collect();
        if scenes.is_empty() {
            return Err(StructureError::NoScenes);
        }

        let mut slides = Vec::with_capacity(scenes.len());
        for scene in &scenes {
            self.expand_scene(scene, &mut slides);
        }

        debug!(scenes = scenes.len(), slides = slides.len(), "Expanded chapter");
        Ok(slides)
    }

    fn expand_scene(&self, scene: &Element, slides: &mut Vec<Slide>) {
        let schema = &self.options.schema;
        let sound = self.value(scene.attribute(&schema.sound_attr).unwrap_or_default());
        let mut photos = scene.descendants_named(&schema.photo_tag);

        match photos.next() {
            None => slides.push(Slide::sound_only(sound)),
            Some(first) => {
                slides.push(Slide::new(Some(self.photo_path(first)), Some(sound)));
                slides.extend(photos.map(|photo| Slide::picture_only(self.photo_path(photo))));
            },
        }
    }

    fn photo_path(&self, photo: &Element) -> String {
        let attr = &self.options.schema.path_attr;
        let path = photo.attribute(attr).unwrap_or_else(|| {
            warn!(attribute = %attr, "Photo without path attribute, using empty path");
            ""
        });
        self.value(path)
    }

    /// Slide value for a raw attribute, joined onto the base directory when
    /// it is a non-empty relative path.
    fn value(&self, raw: &str) -> String {
        match self.base_dir {
            Some(dir) if !raw.is_empty() && Path::new(raw).is_relative() => {
                dir.join(raw).to_string_lossy().into_owned()
            },
            _ => raw.to_string(),
        }
    }
}

/// Expand a chapter document held in a string.
///
/// This is the loading step of [`Chapter`](super::Chapter) without an owning
/// chapter; relative paths are never resolved since there is no file.
///
/// # Examples
///
/// ```rust
/// use slide_chapter::chapter::{LoadOptions, Slide, parse_slides};
///
/// let xml = r#"<Chapter><Scene sound="a.mp3"><Photo path="p1.jpg"/></Scene></Chapter>"#;
/// let slides = parse_slides(xml, &LoadOptions::default())?;
/// assert_eq!(slides, vec![Slide::new(Some("p1.jpg"), Some("a.mp3"))]);
/// # Ok::<(), slide_chapter::StructureError>(())
/// ```
pub fn parse_slides(xml: &str, options: &LoadOptions) -> Result<Vec<Slide>> {
    ChapterParser::new(options, None).parse(xml)
}
