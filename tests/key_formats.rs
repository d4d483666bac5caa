//! Key format compatibility tests
//!
//! These tests verify that jwtcodec treats secrets identically regardless of
//! how they are supplied:
//! - UTF-8 strings (`&str`, `String`)
//! - raw bytes (`&[u8]`, `&[u8; N]`, `Vec<u8>`)
//! - bytes decoded from an encoded secret (Base64URL, as found in JWKs)

use jwtcodec::utils::base64url;
use jwtcodec::*;
use serde_json::{json, Value};

#[test]
fn test_string_and_byte_keys_are_interchangeable() {
    let payload = json!({"sub": "user"});
    let token = encode(&payload, &Key::from("shared-secret")).unwrap();

    let keys = [
        Key::from(String::from("shared-secret")),
        Key::from(b"shared-secret"),
        Key::from(&b"shared-secret"[..]),
        Key::from(b"shared-secret".to_vec()),
        Key::symmetric("shared-secret"),
    ];

    for key in &keys {
        let data: TokenData = decode_verified(&token, key).unwrap();
        assert_eq!(data.payload, payload);
    }
}

#[test]
fn test_builder_accepts_plain_secrets() {
    let token = Encoder::new("shared-secret")
        .encode(&json!({"sub": "user"}))
        .unwrap();

    assert!(Decoder::new()
        .verify_with(b"shared-secret".to_vec())
        .decode::<Value>(&token)
        .is_ok());
}

#[test]
fn test_base64url_encoded_secret() {
    // Secrets distributed as JWK "k" values must be decoded before use
    let encoded = "c2VjcmV0LWZyb20tandr";
    let raw = base64url::decode_bytes(encoded).unwrap();
    assert_eq!(raw, b"secret-from-jwk");

    let token = encode(&json!({"sub": "user"}), &Key::symmetric(raw)).unwrap();

    assert!(decode_verified::<Value>(&token, &Key::from("secret-from-jwk")).is_ok());
    assert_eq!(
        decode_verified::<Value>(&token, &Key::from(encoded)),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn test_non_utf8_key() {
    let key = Key::symmetric(vec![0xff, 0xfe, 0x00, 0x80, 0xc3]);
    for algorithm in Algorithm::ALL {
        let token = Encoder::new(key.clone())
            .algorithm(algorithm)
            .encode(&json!({"sub": "user"}))
            .unwrap();
        assert!(decode_verified::<Value>(&token, &key).is_ok());
    }
}

#[test]
fn test_keys_differing_in_one_byte() {
    let token = encode(&json!({"sub": "user"}), &Key::from("secret-a")).unwrap();
    assert_eq!(
        decode_verified::<Value>(&token, &Key::from("secret-b")),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn test_key_with_trailing_nul_matches_short_key() {
    // HMAC zero-pads keys shorter than the block size
    let token = encode(&json!({"sub": "user"}), &Key::from("k")).unwrap();
    assert!(decode_verified::<Value>(&token, &Key::from(b"k\0")).is_ok());
}

#[test]
fn test_key_debug_is_redacted() {
    let key = Key::from("do-not-print-me");
    assert!(!format!("{key:?}").contains("do-not-print-me"));
}
