use crate::algorithm::Algorithm;
use crate::error::{EncodingFailure, Result};
use crate::json;
use crate::keys::Key;
use crate::signer;
use crate::token::Header;
use crate::utils::base64url;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Builds signed tokens
///
/// The header always carries `typ: "JWT"` and the configured `alg`. A key ID
/// and custom fields can be added; `typ` and `alg` cannot be overridden.
///
/// # Example
/// ```
/// use jwtcodec::{Algorithm, Encoder};
/// use serde_json::json;
///
/// let token = Encoder::new("secret")
///     .algorithm(Algorithm::HS512)
///     .key_id("key-1")
///     .encode(&json!({"sub": "user123"}))?;
///
/// assert_eq!(token.split('.').count(), 3);
/// # Ok::<(), jwtcodec::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    key: Key,
    algorithm: Algorithm,
    key_id: Option<String>,
    extra: Map<String, Value>,
}

impl Encoder {
    /// Create an encoder signing with HS256
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            algorithm: Algorithm::HS256,
            key_id: None,
            extra: Map::new(),
        }
    }

    /// Sign with the given algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the `kid` header field
    pub fn key_id(mut self, kid: impl Into<String>) -> Self {
        self.key_id = Some(kid.into());
        self
    }

    /// Add a custom header field
    ///
    /// Reserved names (`typ`, `alg`, `kid`) are ignored; use
    /// [`algorithm`](Self::algorithm) and [`key_id`](Self::key_id) instead.
    pub fn header_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        match name.as_str() {
            "typ" | "alg" | "kid" => {
                warn!(field = %name, "ignoring reserved header field");
            }
            _ => {
                self.extra.insert(name, value.into());
            }
        }
        self
    }

    /// The header that will be written into every token
    pub fn header(&self) -> Header {
        let mut header = Header::new(self.algorithm);
        header.key_id = self.key_id.clone().map(Value::String);
        header.extra = self.extra.clone();
        header
    }

    /// Serialize, sign and assemble a token for `payload`
    pub fn encode<P: Serialize + ?Sized>(&self, payload: &P) -> Result<String> {
        let payload_json = json::to_string(payload)?;

        // Such a payload could never be decoded again
        if json::is_empty_json(&payload_json) {
            return Err(EncodingFailure::EmptyResult.into());
        }

        self.assemble(&payload_json)
    }

    /// Sign a payload that is already JSON text
    ///
    /// The text is checked with the same parser the decoder uses and signed
    /// exactly as given, whitespace included. Invalid JSON fails with
    /// [`Error::Encoding`](crate::Error::Encoding) naming the reason.
    pub fn encode_json(&self, payload_json: &str) -> Result<String> {
        json::check_text(payload_json)?;
        self.assemble(payload_json)
    }

    fn assemble(&self, payload_json: &str) -> Result<String> {
        let header_json = json::to_string(&self.header())?;

        let header_b64 = base64url::encode(&header_json);
        let payload_b64 = base64url::encode(payload_json);
        let signing_input = format!("{header_b64}.{payload_b64}");

        let signature = signer::sign_with(&signing_input, &self.key, self.algorithm)?;
        let signature_b64 = base64url::encode_bytes(&signature);

        debug!(
            algorithm = %self.algorithm,
            header_len = header_b64.len(),
            payload_len = payload_b64.len(),
            "encoded token"
        );

        Ok(format!("{signing_input}.{signature_b64}"))
    }
}

/// Encode `payload` into a token signed with HS256
pub fn encode<P: Serialize + ?Sized>(payload: &P, key: &Key) -> Result<String> {
    Encoder::new(key.clone()).encode(payload)
}

/// Encode `payload` into a token signed with the named algorithm
///
/// Fails with [`Error::UnsupportedAlgorithm`](crate::Error::UnsupportedAlgorithm)
/// unless `algorithm` is `HS256`, `HS384` or `HS512`.
pub fn encode_with_algorithm<P: Serialize + ?Sized>(
    payload: &P,
    key: &Key,
    algorithm: &str,
) -> Result<String> {
    let algorithm = Algorithm::from_name(algorithm)?;
    Encoder::new(key.clone())
        .algorithm(algorithm)
        .encode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_encode_layout() {
        let token = encode(&json!({"sub": "user"}), &Key::from("secret")).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(
            base64url::decode(parts[0]).unwrap(),
            r#"{"typ":"JWT","alg":"HS256"}"#
        );
        assert_eq!(base64url::decode(parts[1]).unwrap(), r#"{"sub":"user"}"#);
        assert_eq!(base64url::decode_bytes(parts[2]).unwrap().len(), 32);
        assert!(!token.contains('='));
    }

    #[test]
    fn test_encode_signature_covers_signing_input() {
        let key = Key::from("secret");
        let token = encode_with_algorithm(&json!({"sub": "user"}), &key, "HS384").unwrap();
        let (signing_input, signature_b64) = token.rsplit_once('.').unwrap();

        let expected = signer::sign(signing_input, &key, "HS384").unwrap();
        assert_eq!(base64url::decode_bytes(signature_b64).unwrap(), expected);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let key = Key::from("secret");
        let payload = json!({"sub": "user", "admin": true});
        assert_eq!(
            encode(&payload, &key).unwrap(),
            encode(&payload, &key).unwrap()
        );
    }

    #[test]
    fn test_encode_unsupported_algorithm() {
        let result = encode_with_algorithm(&json!({"a": 1}), &Key::from("k"), "HS1");
        assert_eq!(result, Err(Error::UnsupportedAlgorithm("HS1".to_string())));
    }

    #[test]
    fn test_encode_empty_key() {
        let result = encode(&json!({"a": 1}), &Key::symmetric(Vec::new()));
        assert_eq!(result, Err(Error::EmptyKey));
    }

    #[test]
    fn test_encode_empty_payload() {
        let key = Key::from("k");
        for payload in [json!({}), json!(null), json!([]), json!(false)] {
            assert_eq!(
                encode(&payload, &key),
                Err(Error::Encoding(EncodingFailure::EmptyResult))
            );
        }
    }

    #[test]
    fn test_encoder_header_fields() {
        let encoder = Encoder::new("k")
            .algorithm(Algorithm::HS512)
            .key_id("key-7")
            .header_field("cty", "example")
            .header_field("alg", "none")
            .header_field("typ", "JOSE");

        let header = encoder.header();
        assert_eq!(header.algorithm_str(), Some("HS512"));
        assert_eq!(header.token_type(), Some("JWT"));
        assert_eq!(header.key_id(), Some("key-7"));
        assert_eq!(header.get("cty"), Some(&json!("example")));

        let token = encoder.encode(&json!({"sub": "u"})).unwrap();
        let header_b64 = token.split('.').next().unwrap();
        assert_eq!(
            base64url::decode(header_b64).unwrap(),
            r#"{"typ":"JWT","alg":"HS512","kid":"key-7","cty":"example"}"#
        );
    }

    #[test]
    fn test_encode_rejects_payload_too_deep_to_decode() {
        let key = Key::from("secret");

        let mut deep = json!(1);
        for _ in 0..200 {
            deep = json!([deep]);
        }
        assert_eq!(
            encode(&json!({"deep": deep}), &key),
            Err(Error::Encoding(EncodingFailure::DepthExceeded))
        );

        let mut nested = json!(1);
        for _ in 0..100 {
            nested = json!([nested]);
        }
        let payload = json!({"nested": nested});
        let token = encode(&payload, &key).unwrap();
        let data: crate::TokenData = crate::decode_verified(&token, &key).unwrap();
        assert_eq!(data.payload, payload);
    }

    #[test]
    fn test_encode_json_signs_text_verbatim() {
        let key = Key::from("secret");
        let token = Encoder::new(key.clone())
            .encode_json("{ \"sub\": \"user\" }")
            .unwrap();

        let payload_b64 = token.split('.').nth(1).unwrap();
        assert_eq!(base64url::decode(payload_b64).unwrap(), "{ \"sub\": \"user\" }");

        let data: crate::TokenData = crate::decode_verified(&token, &key).unwrap();
        assert_eq!(data.payload, json!({"sub": "user"}));
    }

    #[test]
    fn test_encode_json_failure_reasons() {
        let encoder = Encoder::new("secret");

        assert_eq!(
            encoder.encode_json("{\"sub\":\"a\u{0001}b\"}"),
            Err(Error::Encoding(EncodingFailure::ControlCharacter))
        );
        assert!(matches!(
            encoder.encode_json("{\"sub\":}"),
            Err(Error::Encoding(EncodingFailure::Syntax(_)))
        ));
        assert!(matches!(
            encoder.encode_json("{\"sub\":"),
            Err(Error::Encoding(EncodingFailure::Syntax(_)))
        ));
        assert_eq!(
            encoder.encode_json(&"[".repeat(200)),
            Err(Error::Encoding(EncodingFailure::DepthExceeded))
        );
        assert_eq!(
            encoder.encode_json("[]"),
            Err(Error::Encoding(EncodingFailure::EmptyResult))
        );
        assert_eq!(
            encoder.encode_json(""),
            Err(Error::Encoding(EncodingFailure::EmptyResult))
        );
    }
}
