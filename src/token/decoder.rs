//! Token decoding and signature verification
//!
//! Decoding always splits the token and parses both JSON segments. The
//! signature is only checked when verification is requested; otherwise the
//! header and payload are returned exactly as the token claims them.

use crate::algorithm::AlgorithmPolicy;
use crate::error::{Error, Result};
use crate::json;
use crate::keys::Key;
use crate::limits::MAX_TOKEN_LENGTH;
use crate::signer;
use crate::token::{Header, TokenData};
use crate::utils::base64url;

use serde::de::DeserializeOwned;
use tracing::debug;

/// The three Base64URL segments of a token, borrowed from the input
struct RawToken<'a> {
    token: &'a str,
    header_b64: &'a str,
    payload_b64: &'a str,
    signature_b64: &'a str,
}

impl<'a> RawToken<'a> {
    fn split(token: &'a str) -> Result<Self> {
        let mut parts = token.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header_b64), Some(payload_b64), Some(signature_b64), None) => Ok(Self {
                token,
                header_b64,
                payload_b64,
                signature_b64,
            }),
            _ => Err(Error::MalformedToken),
        }
    }

    /// The original `header.payload` text the signature was computed over
    fn signing_input(&self) -> &'a str {
        &self.token[..self.header_b64.len() + 1 + self.payload_b64.len()]
    }
}

/// Decodes tokens, optionally verifying their signature
///
/// # Example
/// ```
/// use jwtcodec::{AlgorithmPolicy, Decoder, Key, encode};
/// use serde_json::{json, Value};
///
/// let key = Key::from("secret");
/// let token = encode(&json!({"sub": "user123"}), &key)?;
///
/// let data = Decoder::new()
///     .verify_with(key)
///     .allow_algorithms(AlgorithmPolicy::hs256_only())
///     .decode::<Value>(&token)?;
///
/// assert_eq!(data.payload["sub"], "user123");
/// # Ok::<(), jwtcodec::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Decoder {
    verify: bool,
    key: Option<Key>,
    policy: AlgorithmPolicy,
    max_token_length: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            verify: false,
            key: None,
            policy: AlgorithmPolicy::default(),
            max_token_length: MAX_TOKEN_LENGTH,
        }
    }
}

impl Decoder {
    /// Create a decoder that does not verify signatures
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify signatures with `key`
    pub fn verify_with(mut self, key: impl Into<Key>) -> Self {
        self.verify = true;
        self.key = Some(key.into());
        self
    }

    /// Turn signature verification on or off
    ///
    /// Verifying without a key fails with [`Error::KeyRequired`].
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Set the verification key without changing whether verification runs
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Restrict which algorithms are accepted during verification
    pub fn allow_algorithms(mut self, policy: AlgorithmPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject tokens longer than `max` bytes
    pub fn max_token_length(mut self, max: usize) -> Self {
        self.max_token_length = max;
        self
    }

    /// Decode `token` into header and payload
    pub fn decode<P: DeserializeOwned>(&self, token: &str) -> Result<TokenData<P>> {
        let key = if self.verify {
            Some(self.key.as_ref().ok_or(Error::KeyRequired)?)
        } else {
            None
        };

        decode_token(token, key, &self.policy, self.max_token_length)
    }
}

fn decode_token<P: DeserializeOwned>(
    token: &str,
    key: Option<&Key>,
    policy: &AlgorithmPolicy,
    max_token_length: usize,
) -> Result<TokenData<P>> {
    if token.len() > max_token_length {
        return Err(Error::TokenTooLarge {
            size: token.len(),
            max: max_token_length,
        });
    }

    let raw = RawToken::split(token)?;
    let header: Header = json::from_segment(raw.header_b64, Error::HeaderUnreadable)?;
    let payload: P = json::from_segment(raw.payload_b64, Error::PayloadUnreadable)?;

    if let Some(key) = key {
        if let Err(err) = verify_signature(&raw, &header, key, policy) {
            debug!(error = %err, alg = ?header.algorithm_str(), "token verification failed");
            return Err(err);
        }
    }

    debug!(
        alg = ?header.algorithm_str(),
        verified = key.is_some(),
        "decoded token"
    );

    Ok(TokenData { header, payload })
}

fn verify_signature(
    raw: &RawToken<'_>,
    header: &Header,
    key: &Key,
    policy: &AlgorithmPolicy,
) -> Result<()> {
    let signature =
        base64url::decode_bytes(raw.signature_b64).map_err(|_| Error::InvalidSignature)?;

    let algorithm = header.parse_algorithm()?;
    policy.validate(algorithm)?;

    signer::verify_with(raw.signing_input(), &signature, key, algorithm)
}

/// Decode `token`, verifying its signature when `verify` is true
///
/// This mirrors the classic `decode(token, verify, key)` call shape; prefer
/// [`decode_verified`] or [`Decoder`] in new code.
pub fn decode<P: DeserializeOwned>(
    token: &str,
    verify: bool,
    key: Option<&Key>,
) -> Result<TokenData<P>> {
    let key = match (verify, key) {
        (true, Some(key)) => Some(key),
        (true, None) => return Err(Error::KeyRequired),
        (false, _) => None,
    };

    decode_token(token, key, &AlgorithmPolicy::default(), MAX_TOKEN_LENGTH)
}

/// Decode `token` and verify its signature with `key`
pub fn decode_verified<P: DeserializeOwned>(token: &str, key: &Key) -> Result<TokenData<P>> {
    decode(token, true, Some(key))
}

/// Decode `token` without checking its signature
///
/// The returned data is untrusted. Use it only for routing decisions such as
/// picking a key by `kid`, never for authorization.
pub fn decode_unverified<P: DeserializeOwned>(token: &str) -> Result<TokenData<P>> {
    decode(token, false, None)
}
