//! AES-CBC block cipher engine.
//!
//! Design notes:
//! - One engine per validated key; key size (16/24/32) selects
//!   AES-128/192/256. The engine holds no mutable state between calls, so
//!   concurrent use is safe.
//! - A fresh 16-byte IV is drawn from the OS CSPRNG for every encryption
//!   and prepended to the ciphertext: the output is `IV || ciphertext`.
//!   Never reuse an IV under the same key; fresh IVs are why two
//!   encryptions of one plaintext differ.
//! - Padding is zero-byte padding for wire compatibility, not PKCS#7: the
//!   plaintext is extended with 1..=16 `0x00` bytes up to the next block
//!   boundary, and decryption strips every trailing `0x00`. A plaintext
//!   that legitimately ends in NUL bytes loses them; callers must not rely
//!   on trailing NULs surviving a round trip.

use cipher::block_padding::NoPadding;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;
use zeroize::Zeroize;

use crate::constants::{BLOCK_LEN, IV_LEN};
use crate::keys::CipherKey;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Cipher-layer errors.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Key length not valid for AES.
    #[error("invalid AES key length: expected 16, 24, or 32 bytes, actual {actual}")]
    InvalidKeyLen { actual: usize },

    /// Input shorter than one IV block.
    #[error("ciphertext too short: {actual} bytes, need at least {min} for the IV")]
    CiphertextTooShort { actual: usize, min: usize },

    /// Ciphertext body (after the IV) not block-aligned.
    #[error("ciphertext body length {len} is not a multiple of the 16-byte block size")]
    NotBlockAligned { len: usize },

    /// Hex form of a ciphertext could not be decoded.
    #[error("hex decode failed: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decrypted bytes do not form valid UTF-8 text.
    #[error("decrypted payload is not valid UTF-8")]
    InvalidUtf8,
}

/// Stateless AES-CBC engine bound to one validated cipher key.
#[derive(Debug, Clone)]
pub struct BlockCipherEngine {
    key: CipherKey,
}

impl BlockCipherEngine {
    pub fn new(key: CipherKey) -> Self {
        Self { key }
    }

    /// Encrypt raw bytes. Returns `IV || ciphertext`.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut padded = pad_zero(plaintext);

        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);

        let key = self.key.as_bytes();
        let body = match key.len() {
            16 => Aes128CbcEnc::new_from_slices(key, &iv)
                .map_err(|_| CipherError::InvalidKeyLen { actual: key.len() })?
                .encrypt_padded_vec_mut::<NoPadding>(&padded),
            24 => Aes192CbcEnc::new_from_slices(key, &iv)
                .map_err(|_| CipherError::InvalidKeyLen { actual: key.len() })?
                .encrypt_padded_vec_mut::<NoPadding>(&padded),
            32 => Aes256CbcEnc::new_from_slices(key, &iv)
                .map_err(|_| CipherError::InvalidKeyLen { actual: key.len() })?
                .encrypt_padded_vec_mut::<NoPadding>(&padded),
            other => return Err(CipherError::InvalidKeyLen { actual: other }),
        };
        padded.zeroize();

        let mut out = Vec::with_capacity(IV_LEN + body.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Decrypt `IV || ciphertext` back to raw bytes, stripping the
    /// zero-byte padding.
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() < IV_LEN {
            return Err(CipherError::CiphertextTooShort {
                actual: ciphertext.len(),
                min: IV_LEN,
            });
        }
        let (iv, body) = ciphertext.split_at(IV_LEN);
        if body.len() % BLOCK_LEN != 0 {
            return Err(CipherError::NotBlockAligned { len: body.len() });
        }

        let key = self.key.as_bytes();
        let mut plain = match key.len() {
            16 => Aes128CbcDec::new_from_slices(key, iv)
                .map_err(|_| CipherError::InvalidKeyLen { actual: key.len() })?
                .decrypt_padded_vec_mut::<NoPadding>(body)
                .map_err(|_| CipherError::NotBlockAligned { len: body.len() })?,
            24 => Aes192CbcDec::new_from_slices(key, iv)
                .map_err(|_| CipherError::InvalidKeyLen { actual: key.len() })?
                .decrypt_padded_vec_mut::<NoPadding>(body)
                .map_err(|_| CipherError::NotBlockAligned { len: body.len() })?,
            32 => Aes256CbcDec::new_from_slices(key, iv)
                .map_err(|_| CipherError::InvalidKeyLen { actual: key.len() })?
                .decrypt_padded_vec_mut::<NoPadding>(body)
                .map_err(|_| CipherError::NotBlockAligned { len: body.len() })?,
            other => return Err(CipherError::InvalidKeyLen { actual: other }),
        };

        // Zero-byte padding policy: every trailing NUL goes, including any
        // that belonged to the plaintext.
        let end = plain.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        plain.truncate(end);
        Ok(plain)
    }

    /// Encrypt UTF-8 text. Returns `IV || ciphertext`.
    #[inline]
    pub fn encrypt_text(&self, plaintext: &str) -> Result<Vec<u8>, CipherError> {
        self.encrypt_bytes(plaintext.as_bytes())
    }

    /// Decrypt `IV || ciphertext` and decode the payload as UTF-8.
    pub fn decrypt_text(&self, ciphertext: &[u8]) -> Result<String, CipherError> {
        let plain = self.decrypt_bytes(ciphertext)?;
        String::from_utf8(plain).map_err(|_| CipherError::InvalidUtf8)
    }

    /// Encrypt UTF-8 text and return the lowercase hex form of
    /// `IV || ciphertext`, the storage-friendly representation bundles use.
    pub fn encrypt_hex(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(hex::encode(self.encrypt_bytes(plaintext.as_bytes())?))
    }

    /// Decode a hex ciphertext and decrypt it back to UTF-8 text.
    pub fn decrypt_hex(&self, ciphertext_hex: &[u8]) -> Result<String, CipherError> {
        let raw = hex::decode(ciphertext_hex)?;
        self.decrypt_text(&raw)
    }
}

/// Extend `data` with 1..=16 zero bytes up to the next block boundary.
/// Block-aligned input gains a full block of zeros, matching the wire
/// peers' padding.
fn pad_zero(data: &[u8]) -> Vec<u8> {
    let pad = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, 0);
    padded
}
