//! Permissive decoding of file bytes into text.

use crate::config::DecodePolicy;
use std::borrow::Cow;

/// Decode `bytes` as UTF-8 without failing on invalid sequences.
///
/// Valid input is returned unchanged under both policies. With
/// [`DecodePolicy::Skip`] the invalid bytes vanish, so a pattern split by
/// them can still match. With [`DecodePolicy::Replace`] each invalid
/// sequence becomes U+FFFD.
pub fn decode_content(bytes: &[u8], policy: DecodePolicy) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    match policy {
        DecodePolicy::Replace => String::from_utf8_lossy(bytes),
        DecodePolicy::Skip => {
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            Cow::Owned(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_is_borrowed() {
        let decoded = decode_content("héllo 🦀".as_bytes(), DecodePolicy::Skip);
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "héllo 🦀");
    }

    #[test]
    fn test_skip_drops_invalid_bytes() {
        let bytes = b"al\xFFpha";
        assert_eq!(decode_content(bytes, DecodePolicy::Skip), "alpha");
    }

    #[test]
    fn test_replace_substitutes_invalid_bytes() {
        let bytes = b"al\xFFpha";
        assert_eq!(decode_content(bytes, DecodePolicy::Replace), "al\u{FFFD}pha");
    }

    #[test]
    fn test_skip_keeps_real_replacement_characters() {
        let mut bytes = "a\u{FFFD}b".as_bytes().to_vec();
        bytes.push(0xC3);
        assert_eq!(decode_content(&bytes, DecodePolicy::Skip), "a\u{FFFD}b");
    }

    #[test]
    fn test_binary_content_keeps_ascii_runs() {
        let bytes = [0x00, 0x9F, b's', b'e', b'c', 0xFE, b'r', b'e', b't', 0x00];
        assert_eq!(
            decode_content(&bytes, DecodePolicy::Skip),
            "\u{0}secret\u{0}"
        );
    }
}
