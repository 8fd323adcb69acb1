//! Text decoding for chapter documents.
//!
//! Documents are UTF-8 unless they start with a UTF-16 byte order mark, the
//! two encodings every conforming XML processor must accept. UTF-8 input
//! without a BOM is borrowed as-is; BOM-marked input is decoded with
//! `encoding_rs` and the BOM removed.

use crate::common::bom::{BomKind, detect_bom};
use crate::common::{Result, StructureError};
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Map a byte order mark to its `encoding_rs` encoding.
///
/// Returns `None` for UTF-32, which `encoding_rs` does not implement.
#[inline]
pub fn bom_to_encoding(kind: BomKind) -> Option<&'static Encoding> {
    match kind {
        BomKind::Utf8 => Some(encoding_rs::UTF_8),
        BomKind::Utf16Le => Some(encoding_rs::UTF_16LE),
        BomKind::Utf16Be => Some(encoding_rs::UTF_16BE),
        BomKind::Utf32Le | BomKind::Utf32Be => None,
    }
}

/// Decode a chapter document to text.
///
/// Malformed byte sequences are an error rather than being replaced, so a
/// broken document never loads with substituted characters.
///
/// # Examples
///
/// ```
/// use slide_chapter::common::encoding::decode_document;
///
/// let utf16: Vec<u8> = [0xFF, 0xFE]
///     .into_iter()
///     .chain("<a/>".encode_utf16().flat_map(u16::to_le_bytes))
///     .collect();
/// assert_eq!(decode_document(&utf16).unwrap(), "<a/>");
/// assert_eq!(decode_document(b"<a/>").unwrap(), "<a/>");
/// ```
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let Some(kind) = detect_bom(bytes) else {
        return Ok(Cow::Borrowed(std::str::from_utf8(bytes)?));
    };

    let encoding = bom_to_encoding(kind).ok_or_else(|| {
        StructureError::InvalidEncoding(format!("{:?} documents are not supported", kind))
    })?;

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[kind.len()..])
        .ok_or_else(|| {
            StructureError::InvalidEncoding(format!("malformed {} content", encoding.name()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::bom::UTF8_BOM;

    fn utf16(text: &str, big_endian: bool) -> Vec<u8> {
        let bom = if big_endian { BomKind::Utf16Be } else { BomKind::Utf16Le };
        let mut bytes = bom.as_bytes().to_vec();
        for unit in text.encode_utf16() {
            let pair = if big_endian { unit.to_be_bytes() } else { unit.to_le_bytes() };
            bytes.extend_from_slice(&pair);
        }
        bytes
    }

    #[test]
    fn test_plain_utf8_is_borrowed() {
        let decoded = decode_document(b"<Chapter/>").unwrap();
        assert!(matches!(decoded, Cow::Borrowed("<Chapter/>")));
    }

    #[test]
    fn test_utf8_bom_removed() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("<Scene sound=\"café.mp3\"/>".as_bytes());
        assert_eq!(decode_document(&bytes).unwrap(), "<Scene sound=\"café.mp3\"/>");
    }

    #[test]
    fn test_utf16_both_byte_orders() {
        let text = "<Scene sound=\"café.mp3\"/>";
        assert_eq!(decode_document(&utf16(text, false)).unwrap(), text);
        assert_eq!(decode_document(&utf16(text, true)).unwrap(), text);
    }

    #[test]
    fn test_rejects_bad_input() {
        // lone high surrogate
        let mut broken = utf16("<a/>", false);
        broken.extend_from_slice(&0xD800u16.to_le_bytes());
        assert!(matches!(
            decode_document(&broken),
            Err(StructureError::InvalidEncoding(_))
        ));

        let utf32 = [0x00, 0x00, 0xFE, 0xFF, 0x00, 0x00, 0x00, b'<'];
        assert!(matches!(
            decode_document(&utf32),
            Err(StructureError::InvalidEncoding(_))
        ));

        let latin1: Vec<u8> = b"caf".iter().copied().chain([0xE9]).collect();
        assert!(matches!(
            decode_document(&latin1),
            Err(StructureError::InvalidEncoding(_))
        ));
    }
}
