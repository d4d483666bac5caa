//! Base64URL encoding/decoding per RFC 4648
//!
//! Encoding never emits padding. Decoding accepts input with or without
//! trailing `=` padding, but only the URL-safe alphabet: `+` and `/` are
//! rejected so that every token segment has a single valid spelling.

use crate::error::{Error, Result};

use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// URL-safe engine that restores missing padding on decode
const URL_SAFE_ANY_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_ANY_PAD
        .decode(input)
        .map_err(|e| Error::DecodeError(e.to_string()))
}

/// Decode Base64URL string to UTF-8 string
pub fn decode(input: &str) -> Result<String> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| Error::DecodeError(format!("Invalid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let tests = vec![
            "",
            "f",
            "fo",
            "foo",
            "foob",
            "fooba",
            "foobar",
            "Hello, World!",
            "The quick brown fox jumps over the lazy dog",
        ];

        for test in tests {
            let encoded = encode(test);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(test, decoded, "Roundtrip failed for: {}", test);
        }
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_url_safe_characters() {
        let bytes = vec![0xfb, 0xff, 0xbf];
        let encoded = encode_bytes(&bytes);
        assert_eq!(encoded, "-_-_");
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn test_decode_restores_padding() {
        assert_eq!(decode_bytes("Zg").unwrap(), b"f");
        assert_eq!(decode_bytes("Zg==").unwrap(), b"f");
        assert_eq!(decode_bytes("Zm8").unwrap(), b"fo");
        assert_eq!(decode_bytes("Zm8=").unwrap(), b"fo");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(decode_bytes("!!!"), Err(Error::DecodeError(_))));
        // A single leftover character cannot encode a byte
        assert!(matches!(decode_bytes("A"), Err(Error::DecodeError(_))));
        // Standard alphabet characters are not part of base64url
        assert!(decode_bytes("-_-_").is_ok());
        assert!(decode_bytes("+/+/").is_err());
    }

    #[test]
    fn test_decode_rejects_non_canonical_trailing_bits() {
        // "Zh" carries bits past the single encoded byte
        assert!(decode_bytes("Zh").is_err());
        assert!(decode_bytes("Zg").is_ok());
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let encoded = encode_bytes(&[0xff, 0xfe]);
        assert!(decode_bytes(&encoded).is_ok());
        assert!(matches!(decode(&encoded), Err(Error::DecodeError(_))));
    }
}
