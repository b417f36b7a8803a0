//! bundle-core
//!
//! Authenticated-encryption message bundler.
//!
//! A bundle is a single text artifact combining an AES-CBC ciphertext (fresh
//! random IV per message) with an HMAC-SHA512 digest of that ciphertext,
//! encrypt-then-MAC. The wire form is hex, optionally base64-wrapped, so
//! bundles can be stored or shipped anywhere plain text goes.
//!
//! Design notes:
//! - bundle:   compose -> encrypt -> digest -> encode
//! - debundle: decode -> split -> verify -> decrypt -> decompose
//! - The digest is verified in constant time before decryption is attempted.
//! - Keys are loaded once per bundler; every per-call intermediate (IV,
//!   digest, padded plaintext) lives on the call stack.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod error;

pub mod config;
pub mod keys;

// Layered components, leaves first
pub mod cipher;
pub mod bundler;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::bundler::{DebundledMessage, MessageBundler};
    pub use crate::cipher::BlockCipherEngine;
    pub use crate::config::{BundleConfig, ConfigProvider, HashPosition};
    pub use crate::error::{BundleError, Result};
    pub use crate::keys::{CipherKey, HmacKey, KeyProvider, StaticKeyProvider};
}
