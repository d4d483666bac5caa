//! HMAC signer shared by the encode and verify paths
//!
//! Both paths resolve the algorithm name through [`Algorithm::from_name`], so
//! a name rejected when signing is rejected the same way when verifying.

use crate::algorithm::{self, Algorithm};
use crate::error::{Error, Result};
use crate::keys::Key;

/// Compute the raw HMAC digest of `message` for the named algorithm
///
/// # Example
/// ```
/// use jwtcodec::{signer, Key};
///
/// let signature = signer::sign("header.payload", &Key::from("secret"), "HS384")?;
/// assert_eq!(signature.len(), 48);
/// # Ok::<(), jwtcodec::Error>(())
/// ```
pub fn sign(message: &str, key: &Key, method: &str) -> Result<Vec<u8>> {
    let algorithm = Algorithm::from_name(method)?;
    sign_with(message, key, algorithm)
}

/// Compute the raw HMAC digest of `message` with an already parsed algorithm
pub fn sign_with(message: &str, key: &Key, algorithm: Algorithm) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    algorithm::hmac::sign(algorithm, key.as_bytes(), message.as_bytes())
}

/// Check a raw signature against `message` in constant time
pub fn verify(message: &str, signature: &[u8], key: &Key, method: &str) -> Result<()> {
    let algorithm = Algorithm::from_name(method)?;
    verify_with(message, signature, key, algorithm)
}

/// Check a raw signature with an already parsed algorithm
pub fn verify_with(message: &str, signature: &[u8], key: &Key, algorithm: Algorithm) -> Result<()> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    algorithm::hmac::verify(
        algorithm,
        key.as_bytes(),
        message.as_bytes(),
        signature,
    )
}
