//! Bundling: compose -> encrypt -> digest -> encode.
//!
//! Each stage maps to one error kind and short-circuits the rest. The IV is
//! fresh per call, so bundling the same message twice under the same keys
//! yields different bundles; both debundle back to the message.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use crate::bundler::digest::hex_digest;
use crate::bundler::MessageBundler;
use crate::config::HashPosition;
use crate::error::{BundleError, Result};

impl MessageBundler {
    /// Bundle a single message into its wire form.
    pub fn bundle(&self, message: &str, base64: bool) -> Result<String> {
        self.bundle_parts(message, &[], base64)
    }

    /// Bundle a message with extra sub-messages attached. The extras are
    /// joined onto the message with the configured delimiter before
    /// encryption and recovered by [`debundle_with_extras`].
    ///
    /// [`debundle_with_extras`]: MessageBundler::debundle_with_extras
    pub fn bundle_with_extras(
        &self,
        message: &str,
        extras: &[&str],
        base64: bool,
    ) -> Result<String> {
        self.bundle_parts(message, extras, base64)
    }

    fn bundle_parts(&self, message: &str, extras: &[&str], base64: bool) -> Result<String> {
        // Compose
        let payload = self.compose(message, extras)?;

        // Encrypt
        let ciphertext_hex = self
            .engine
            .encrypt_hex(&payload)
            .map_err(|e| BundleError::Encryption(e.to_string()))?;

        // Digest, over the hex ciphertext: wire peers MAC the hex form
        let digest_hex = hex_digest(&self.hmac_key, ciphertext_hex.as_bytes())
            .map_err(|e| BundleError::Hashing(e.to_string()))?;

        // Encode
        let joined = match self.config.hash_position {
            HashPosition::Before => format!("{digest_hex}{ciphertext_hex}"),
            HashPosition::After => format!("{ciphertext_hex}{digest_hex}"),
        };
        let out = if base64 {
            BASE64.encode(joined.as_bytes())
        } else {
            joined
        };

        debug!(bundle_len = out.len(), base64, extras = extras.len(), "message bundled");
        Ok(out)
    }

    /// Join the message and extras with the configured delimiter.
    ///
    /// With extras present, any element containing the delimiter is
    /// rejected: the composed payload would mis-split on decompose.
    /// Single-message payloads are never delimiter-checked, so they may
    /// contain the delimiter freely.
    fn compose(&self, message: &str, extras: &[&str]) -> Result<String> {
        if extras.is_empty() {
            return Ok(message.to_string());
        }

        let split = self.config.split_string.as_str();
        for part in std::iter::once(&message).chain(extras.iter()) {
            if part.contains(split) {
                return Err(BundleError::Splitting(format!(
                    "sub-message contains the delimiter `{split}` and would mis-split on debundle"
                )));
            }
        }

        let mut parts = Vec::with_capacity(1 + extras.len());
        parts.push(message);
        parts.extend_from_slice(extras);
        Ok(parts.join(split))
    }
}
