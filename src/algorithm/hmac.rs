use crate::algorithm::Algorithm;
use crate::error::{Error, Result};

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Compute the raw HMAC digest of `message` for the given algorithm
pub(crate) fn sign(algorithm: Algorithm, secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::HS256 => mac::<Hmac<Sha256>>(secret, message),
        Algorithm::HS384 => mac::<Hmac<Sha384>>(secret, message),
        Algorithm::HS512 => mac::<Hmac<Sha512>>(secret, message),
    }
}

/// Verify a raw signature with constant-time comparison
pub(crate) fn verify(
    algorithm: Algorithm,
    secret: &[u8],
    message: &[u8],
    provided_signature: &[u8],
) -> Result<()> {
    let expected_signature = sign(algorithm, secret, message)?;

    if provided_signature.len() != expected_signature.len() {
        return Err(Error::InvalidSignature);
    }

    if constant_time_eq(provided_signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}

fn mac<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret).map_err(|_| Error::InvalidSignature)?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
