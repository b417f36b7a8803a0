//! Validated key material and the key-provisioning seam.
//!
//! Design notes:
//! - The cipher key and the HMAC key are distinct types; they are different
//!   secrets even when provisioned from the same place, and the type system
//!   keeps them from being conflated.
//! - However raw bytes reach the process (file, environment, KMS) is a
//!   collaborator's concern behind `KeyProvider`; this module only validates
//!   and holds them. No dynamic code loading is involved in key retrieval.
//! - Both containers zeroize on drop and never `Debug`-print their bytes.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::AES_KEY_LENS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Cipher key is not a valid AES key length.
    #[error("invalid AES key length: expected 16, 24, or 32 bytes, actual {actual}")]
    InvalidCipherKeyLen { actual: usize },

    /// HMAC key bytes are missing.
    #[error("HMAC key must not be empty")]
    EmptyHmacKey,
}

/// AES cipher key, length 16, 24, or 32 bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey(Vec<u8>);

impl CipherKey {
    /// Validate and take ownership of raw key bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let bytes = bytes.into();
        if !AES_KEY_LENS.contains(&bytes.len()) {
            return Err(KeyError::InvalidCipherKeyLen { actual: bytes.len() });
        }
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey").field("len", &self.0.len()).finish()
    }
}

/// HMAC authentication key. Independently sized, must be non-empty.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HmacKey(Vec<u8>);

impl HmacKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(KeyError::EmptyHmacKey);
        }
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacKey").field("len", &self.0.len()).finish()
    }
}

/// Supplies key material on demand. Retrieval is a precondition of the
/// core, not one of its responsibilities.
pub trait KeyProvider {
    fn cipher_key(&self) -> Result<CipherKey, KeyError>;
    fn hmac_key(&self) -> Result<HmacKey, KeyError>;
}

/// In-memory provider for keys already resolved by the caller.
#[derive(Debug, Clone)]
pub struct StaticKeyProvider {
    cipher: CipherKey,
    hmac: HmacKey,
}

impl StaticKeyProvider {
    pub fn new(cipher: CipherKey, hmac: HmacKey) -> Self {
        Self { cipher, hmac }
    }
}

impl KeyProvider for StaticKeyProvider {
    fn cipher_key(&self) -> Result<CipherKey, KeyError> {
        Ok(self.cipher.clone())
    }

    fn hmac_key(&self) -> Result<HmacKey, KeyError> {
        Ok(self.hmac.clone())
    }
}
