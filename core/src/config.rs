//! Resolved bundler configuration.
//!
//! Parsing a config file into this record is a collaborator's concern
//! (`ConfigProvider`); the core consumes the resolved record and validates
//! its invariants before any cryptographic operation runs.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SPLIT_STRING, HEX_DIGEST_LEN};
use crate::error::BundleError;

/// Where the digest sits relative to the ciphertext inside a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashPosition {
    /// Digest first, ciphertext after (wire default).
    Before,
    /// Ciphertext first, digest last.
    After,
}

/// Bundler configuration record.
///
/// Invariant: `hash_length` must equal the hex length actually produced by
/// the digest algorithm (128 for HMAC-SHA512). A mismatch would misalign
/// splitting and fail non-deterministically, so it is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Digest placement inside the bundle.
    pub hash_position: HashPosition,
    /// Digest length in hex characters; the splitting offset.
    pub hash_length: usize,
    /// Delimiter between the primary message and attached extras.
    pub split_string: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            hash_position: HashPosition::Before,
            hash_length: HEX_DIGEST_LEN,
            split_string: DEFAULT_SPLIT_STRING.to_string(),
        }
    }
}

impl BundleConfig {
    /// Check the record's invariants.
    pub fn validate(&self) -> Result<(), BundleError> {
        if self.hash_length != HEX_DIGEST_LEN {
            return Err(BundleError::InvalidConfig(format!(
                "hash_length must be {HEX_DIGEST_LEN} for HMAC-SHA512, got {}",
                self.hash_length
            )));
        }
        if self.split_string.is_empty() {
            return Err(BundleError::InvalidConfig(
                "split_string must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Supplies the resolved configuration record before any bundle/debundle
/// call. File formats and lookup order live behind this seam.
pub trait ConfigProvider {
    fn bundle_config(&self) -> Result<BundleConfig, BundleError>;
}

/// An already-resolved record provides itself.
impl ConfigProvider for BundleConfig {
    fn bundle_config(&self) -> Result<BundleConfig, BundleError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BundleConfig::default().validate().is_ok());
    }

    #[test]
    fn wrong_hash_length_is_rejected() {
        let config = BundleConfig {
            hash_length: 64,
            ..BundleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BundleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_split_string_is_rejected() {
        let config = BundleConfig {
            split_string: String::new(),
            ..BundleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BundleError::InvalidConfig(_))
        ));
    }
}
