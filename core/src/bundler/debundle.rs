//! Debundling: decode -> split -> verify -> decrypt -> decompose.
//!
//! Verification always precedes decryption: a bundle whose digest does not
//! match is rejected before the cipher ever sees it. This mirrors
//! encrypt-then-MAC on the send path and is the core security property of
//! the protocol.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::{debug, warn};

use crate::bundler::digest::verify_hex_digest;
use crate::bundler::{DebundledMessage, MessageBundler};
use crate::config::HashPosition;
use crate::constants::LEGACY_ERROR_TOKENS;
use crate::error::{BundleError, Result};

impl MessageBundler {
    /// Recover the full payload from a bundle. Sub-messages, if any, are
    /// left joined; use [`debundle_with_extras`] to split them.
    ///
    /// [`debundle_with_extras`]: MessageBundler::debundle_with_extras
    pub fn debundle(&self, bundle: &str, base64: bool) -> Result<String> {
        self.debundle_payload(bundle, base64)
    }

    /// Recover the primary message and the ordered extra messages from a
    /// bundle produced by [`bundle_with_extras`].
    ///
    /// [`bundle_with_extras`]: MessageBundler::bundle_with_extras
    pub fn debundle_with_extras(&self, bundle: &str, base64: bool) -> Result<DebundledMessage> {
        let payload = self.debundle_payload(bundle, base64)?;

        // Decompose
        let mut parts = payload.split(self.config.split_string.as_str());
        let message = parts.next().unwrap_or_default().to_string();
        let extras = parts.map(str::to_string).collect();
        Ok(DebundledMessage { message, extras })
    }

    fn debundle_payload(&self, bundle: &str, base64: bool) -> Result<String> {
        // Decode
        let raw: Vec<u8> = if base64 {
            BASE64
                .decode(bundle)
                .map_err(|e| BundleError::Decoding(e.to_string()))?
        } else {
            bundle.as_bytes().to_vec()
        };

        // Split at the configured digest boundary
        let hash_len = self.config.hash_length;
        if raw.len() < hash_len {
            return Err(BundleError::Splitting(format!(
                "bundle length {} is shorter than the configured digest length {hash_len}",
                raw.len()
            )));
        }
        let (received_digest, received_ciphertext) = match self.config.hash_position {
            HashPosition::Before => raw.split_at(hash_len),
            HashPosition::After => {
                let (ciphertext, digest) = raw.split_at(raw.len() - hash_len);
                (digest, ciphertext)
            }
        };

        // Verify before decrypting, constant-time
        let trusted = verify_hex_digest(&self.hmac_key, received_ciphertext, received_digest)
            .map_err(|e| BundleError::Hashing(e.to_string()))?;
        if !trusted {
            warn!(bundle_len = raw.len(), "digest mismatch, bundle rejected without decrypting");
            return Err(BundleError::HashVerification);
        }

        // Decrypt
        let payload = self
            .engine
            .decrypt_hex(received_ciphertext)
            .map_err(|e| BundleError::Decryption(e.to_string()))?;

        // A legacy peer's in-band error token is never live data
        if let Some(token) = LEGACY_ERROR_TOKENS.iter().find(|t| **t == payload) {
            return Err(BundleError::MessageNotTrusted((*token).to_string()));
        }

        debug!(payload_len = payload.len(), "bundle verified and decrypted");
        Ok(payload)
    }
}
