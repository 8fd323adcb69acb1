//! Byte Order Mark (BOM) handling for chapter documents.
//!
//! Detects which Unicode encoding a chapter document announces. Decoding
//! itself lives in [`crate::common::encoding`].

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
            BomKind::Utf32Le => &UTF32_LE_BOM,
            BomKind::Utf32Be => &UTF32_BE_BOM,
        }
    }

    /// Returns the length in bytes of the BOM.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-32 little-endian BOM bytes.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// UTF-32 big-endian BOM bytes.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

/// Detects the BOM at the start of `bytes`, if any.
///
/// UTF-32 marks are checked before UTF-16 because the UTF-32 LE mark starts
/// with the UTF-16 LE one.
pub fn detect_bom(bytes: &[u8]) -> Option<BomKind> {
    [
        BomKind::Utf32Be,
        BomKind::Utf32Le,
        BomKind::Utf8,
        BomKind::Utf16Be,
        BomKind::Utf16Le,
    ]
    .into_iter()
    .find(|kind| bytes.starts_with(kind.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_bom() {
        assert_eq!(detect_bom(&[0xEF, 0xBB, 0xBF, b'<']), Some(BomKind::Utf8));
        assert_eq!(detect_bom(&[0xFF, 0xFE, 0x00, 0x00]), Some(BomKind::Utf32Le));
        assert_eq!(detect_bom(&[0xFF, 0xFE, b'<', 0x00]), Some(BomKind::Utf16Le));
        assert_eq!(detect_bom(b"<Chapter/>"), None);
        assert_eq!(detect_bom(&[]), None);
    }
}
