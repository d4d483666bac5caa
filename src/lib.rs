//! # jwtcodec - Minimal HMAC JSON Web Tokens
//!
//! > Encode, decode and verify HMAC-signed JSON Web Tokens (JWT).
//!
//! **jwtcodec** is the token codec behind an authentication layer: it issues
//! tamper-evident tokens and checks tokens presented by clients. It covers
//! header and payload serialization, Base64URL encoding, and HMAC signing and
//! verification with HS256, HS384 and HS512. Everything else (routing,
//! sessions, user lookup, claim checks such as expiry or audience) belongs to
//! the caller.
//!
//! ## Quick Start
//!
//! ```
//! use jwtcodec::{decode_verified, encode, Key, TokenData};
//! use serde_json::{json, Value};
//!
//! let key = Key::from("your-256-bit-secret");
//! let token = encode(&json!({"sub": "user123", "admin": false}), &key)?;
//!
//! let data: TokenData<Value> = decode_verified(&token, &key)?;
//! assert_eq!(data.payload["sub"], "user123");
//! assert_eq!(data.header.algorithm_str(), Some("HS256"));
//! # Ok::<(), jwtcodec::Error>(())
//! ```
//!
//! ## Token Format
//!
//! ```text
//! base64url(JSON(header)) "." base64url(JSON(payload)) "." base64url(HMAC(key, signing input))
//! ```
//!
//! The header is always `{"typ":"JWT","alg":"HS256"|"HS384"|"HS512"}`, plus an
//! optional `kid` and custom fields set through [`Encoder`]. The signing input
//! is the first two segments joined by `.` exactly as they appear in the token.
//! No segment carries `=` padding.
//!
//! ## Verification
//!
//! [`decode_verified`] (or [`Decoder::verify_with`]) recomputes the HMAC using
//! the algorithm named in the header and compares it in constant time via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//!
//! [`decode_unverified`] performs no cryptographic check at all: a tampered or
//! unsigned token is returned as parsed. Only use it when the contents are
//! needed before a key is known.
//!
//! ## Algorithm Confusion
//!
//! The header's `alg` is untrusted input. It is parsed into [`Algorithm`],
//! which only knows the HMAC family, so `"none"`, case variants and asymmetric
//! names fail with [`Error::UnsupportedAlgorithm`] on both the signing and the
//! verification path. [`AlgorithmPolicy`] narrows the accepted set further.
//!
//! ## Errors
//!
//! Every failure is an [`Error`]. Callers should treat any decode error as
//! "reject the token".

// Core modules
pub mod error;
pub mod json;
pub mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;
pub mod signer;

// Token types
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use token::{decode, decode_unverified, decode_verified, encode, encode_with_algorithm};
pub use token::{Decoder, Encoder};
pub use token::{Header, TokenData};

pub use algorithm::{Algorithm, AlgorithmPolicy};
pub use error::{EncodingFailure, Error, Result};
pub use keys::Key;
