//! Slide transition record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One atomic step of a chapter timeline.
///
/// Each field is either a new value to switch to, or `None` to keep whatever
/// is currently shown or playing. For example `Slide::new(Some("a.jpg"), None)`
/// switches the picture to `a.jpg` and leaves the running sound alone.
///
/// The loader never produces a slide with both fields absent, but nothing
/// stops a caller from building one; see [`Slide::is_noop`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    picture: Option<String>,
    sound: Option<String>,
}

impl Slide {
    /// Create a slide from an optional picture and an optional sound.
    pub fn new<P, S>(picture: Option<P>, sound: Option<S>) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            picture: picture.map(Into::into),
            sound: sound.map(Into::into),
        }
    }

    /// Switch the picture and keep the current sound.
    pub fn picture_only(picture: impl Into<String>) -> Self {
        Self {
            picture: Some(picture.into()),
            sound: None,
        }
    }

    /// Switch the sound and keep the current picture.
    pub fn sound_only(sound: impl Into<String>) -> Self {
        Self {
            picture: None,
            sound: Some(sound.into()),
        }
    }

    /// Picture to switch to, or `None` to keep the current one.
    #[inline]
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    /// Sound to switch to, or `None` to keep the current one.
    #[inline]
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    /// True when the slide changes neither picture nor sound.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.picture.is_none() && self.sound.is_none()
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.picture.as_deref().map_or("-".into(), |p| format!("{:?}", p)),
            self.sound.as_deref().map_or("-".into(), |s| format!("{:?}", s))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let slide = Slide::new(Some("p1.jpg"), Some("a.mp3"));
        assert_eq!(slide.picture(), Some("p1.jpg"));
        assert_eq!(slide.sound(), Some("a.mp3"));

        assert_eq!(Slide::picture_only("p2.jpg"), Slide::new(Some("p2.jpg"), None::<&str>));
        assert_eq!(Slide::sound_only(""), Slide::new(None::<&str>, Some("")));
    }

    #[test]
    fn test_noop() {
        assert!(Slide::new(None::<&str>, None::<&str>).is_noop());
        assert!(!Slide::sound_only("").is_noop());
    }

    #[test]
    fn test_display() {
        assert_eq!(Slide::picture_only("p.jpg").to_string(), r#"("p.jpg", -)"#);
        assert_eq!(Slide::sound_only("").to_string(), r#"(-, "")"#);
    }

    #[test]
    fn test_serde_keeps_absent_distinct_from_empty() {
        let json = serde_json::to_string(&Slide::sound_only("")).unwrap();
        assert_eq!(json, r#"{"picture":null,"sound":""}"#);
        let back: Slide = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Slide::sound_only(""));
    }
}
