//! Configuration types for chapter loading.
//!
//! This module defines the schema vocabulary a chapter document is read with
//! and the options controlling how slide values are produced.

/// Configuration options for loading a chapter.
///
/// # Examples
///
/// ```rust
/// use slide_chapter::chapter::{LoadOptions, Schema};
///
/// // Create with defaults
/// let options = LoadOptions::default();
///
/// // Or customize
/// let options = LoadOptions::new()
///     .with_schema(Schema::new().with_photo_tag("Image"))
///     .with_resolve_relative_paths(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Tag and attribute names the document is read with
    pub schema: Schema,
    /// Whether relative picture and sound paths are joined onto the
    /// directory of the chapter file
    pub resolve_relative_paths: bool,
}

impl LoadOptions {
    /// Create a new `LoadOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema vocabulary.
    #[inline]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Set whether relative paths are resolved against the chapter file.
    ///
    /// Only applies to chapters loaded from a file. Empty values and absolute
    /// paths are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slide_chapter::chapter::LoadOptions;
    ///
    /// let options = LoadOptions::new().with_resolve_relative_paths(true);
    /// assert!(options.resolve_relative_paths);
    /// ```
    #[inline]
    pub fn with_resolve_relative_paths(mut self, resolve: bool) -> Self {
        self.resolve_relative_paths = resolve;
        self
    }
}

/// Tag and attribute names of a chapter document.
///
/// Names are matched exactly against qualified tag names, so a prefixed
/// document (`<s:Scene>`) needs a prefixed schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Tag of the single chapter element
    pub chapter_tag: String,
    /// Tag of scene elements
    pub scene_tag: String,
    /// Tag of photo elements
    pub photo_tag: String,
    /// Scene attribute holding the sound track
    pub sound_attr: String,
    /// Photo attribute holding the picture path
    pub path_attr: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            chapter_tag: "Chapter".to_string(),
            scene_tag: "Scene".to_string(),
            photo_tag: "Photo".to_string(),
            sound_attr: "sound".to_string(),
            path_attr: "path".to_string(),
        }
    }
}

impl Schema {
    /// Create the default schema.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag of the chapter element.
    #[inline]
    pub fn with_chapter_tag(mut self, tag: impl Into<String>) -> Self {
        self.chapter_tag = tag.into();
        self
    }

    /// Set the tag of scene elements.
    #[inline]
    pub fn with_scene_tag(mut self, tag: impl Into<String>) -> Self {
        self.scene_tag = tag.into();
        self
    }

    /// Set the tag of photo elements.
    #[inline]
    pub fn with_photo_tag(mut self, tag: impl Into<String>) -> Self {
        self.photo_tag = tag.into();
        self
    }

    /// Set the scene attribute holding the sound track.
    #[inline]
    pub fn with_sound_attr(mut self, attr: impl Into<String>) -> Self {
        self.sound_attr = attr.into();
        self
    }

    /// Set the photo attribute holding the picture path.
    #[inline]
    pub fn with_path_attr(mut self, attr: impl Into<String>) -> Self {
        self.path_attr = attr.into();
        self
    }
}
