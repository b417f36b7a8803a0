//! Public error taxonomy.
//!
//! Every bundling/debundling stage maps to exactly one kind so callers can
//! branch deterministically. No stage retries; no error is swallowed. Fatal
//! preconditions (bad key length, bad configuration) surface at
//! construction, before any cryptographic operation runs.

use thiserror::Error;

use crate::keys::KeyError;

pub type Result<T> = std::result::Result<T, BundleError>;

/// One kind per transform stage, plus the fatal preconditions.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Cipher primitive or text-encoding failure while bundling.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Cipher primitive or decoding failure while debundling.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// Digest computation failed.
    #[error("digest computation failed: {0}")]
    Hashing(String),

    /// Hex/base64 encoding of an outgoing bundle failed. Not produced by
    /// the current encoders (both are infallible); kept because the wire
    /// contract names the kind and callers branch on it.
    #[error("bundle encoding failed: {0}")]
    Encoding(String),

    /// Base64 decoding of an incoming bundle failed.
    #[error("bundle decoding failed: {0}")]
    Decoding(String),

    /// Bundle could not be sliced at the configured digest boundary, or a
    /// payload cannot be split cleanly into sub-messages.
    #[error("bundle splitting failed: {0}")]
    Splitting(String),

    /// Recomputed digest does not match the received digest. The bundle is
    /// rejected without attempting decryption.
    #[error("received digest does not match computed digest: message not trusted")]
    HashVerification,

    /// Decrypted payload equals a legacy peer's in-band error token.
    #[error("decrypted payload equals legacy error token `{0}`: message not trusted")]
    MessageNotTrusted(String),

    /// Configuration record violates an invariant (e.g. `hash_length` not
    /// matching the digest algorithm).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Key material rejected before any cryptographic operation.
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),
}
