//! Text decoding for playlist files
//!
//! Legacy `.m3u` files written by Windows players are usually in a
//! single-byte Western code page, while `.m3u8` is UTF-8 by definition.

use encoding_rs::{UTF_8, WINDOWS_1252};

/// How the raw bytes of a playlist are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, invalid sequences replaced, BOM stripped
    Utf8,

    /// Windows-1252 (the WHATWG superset of ISO-8859-1); never fails
    Latin1,
}

/// Decode playlist bytes with the given encoding
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> String {
    let encoding = match encoding {
        TextEncoding::Utf8 => UTF_8,
        TextEncoding::Latin1 => WINDOWS_1252,
    };

    let (decoded, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::debug!("Playlist contains bytes invalid for {}", encoding.name());
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_accents() {
        // "Canción.mp3" with ó as 0xF3
        let bytes: &[u8] = b"Canci\xF3n.mp3";
        assert_eq!(decode_text(bytes, TextEncoding::Latin1), "Canción.mp3");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let bytes: &[u8] = b"\xEF\xBB\xBF#EXTM3U";
        assert_eq!(decode_text(bytes, TextEncoding::Utf8), "#EXTM3U");
    }

    #[test]
    fn test_utf8_invalid_replaced() {
        let bytes: &[u8] = b"a\xFFb";
        assert_eq!(decode_text(bytes, TextEncoding::Utf8), "a\u{FFFD}b");
    }
}
