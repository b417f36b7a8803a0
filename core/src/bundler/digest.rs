//! HMAC-SHA512 digest creation and verification.
//!
//! The digest is keyed over the hex-encoded ciphertext string, never the
//! plaintext, so authentication does not depend on decryption succeeding.
//!
//! Security notes:
//! - Verification is constant-time (`subtle`). A value-revealing comparison
//!   would leak the mismatch position through timing and defeat the
//!   authentication.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::constants::DIGEST_LEN;
use crate::keys::HmacKey;

type HmacSha512 = Hmac<Sha512>;

#[derive(Debug, Error)]
pub enum DigestError {
    /// HMAC key rejected by the digest primitive.
    #[error("HMAC key rejected by the digest primitive")]
    InvalidKey,
}

/// Compute the raw 64-byte HMAC-SHA512 digest of `message`.
pub fn raw_digest(key: &HmacKey, message: &[u8]) -> Result<[u8; DIGEST_LEN], DigestError> {
    let mut mac =
        HmacSha512::new_from_slice(key.as_bytes()).map_err(|_| DigestError::InvalidKey)?;
    mac.update(message);
    let out = mac.finalize().into_bytes();

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&out);
    Ok(digest)
}

/// Compute the digest of `message` as 128 lowercase hex characters, the
/// form that goes on the wire.
pub fn hex_digest(key: &HmacKey, message: &[u8]) -> Result<String, DigestError> {
    Ok(hex::encode(raw_digest(key, message)?))
}

/// Recompute the digest of `message` and compare it with `expected_hex`
/// in constant time. `expected_hex` is untrusted wire input.
pub fn verify_hex_digest(
    key: &HmacKey,
    message: &[u8],
    expected_hex: &[u8],
) -> Result<bool, DigestError> {
    let computed = hex_digest(key, message)?;
    Ok(bool::from(computed.as_bytes().ct_eq(expected_hex)))
}
