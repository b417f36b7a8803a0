//! Bundler session state and result records.

use crate::cipher::BlockCipherEngine;
use crate::config::{BundleConfig, ConfigProvider};
use crate::error::Result;
use crate::keys::{CipherKey, HmacKey, KeyProvider};

/// A debundled payload split back into its logical sub-messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebundledMessage {
    /// Primary message (first element of the composed payload).
    pub message: String,
    /// Extra messages in the order they were attached.
    pub extras: Vec<String>,
}

/// Bundles and debundles messages under one configuration and key pair.
///
/// Keys and configuration are loaded once and held read-only for the
/// bundler's lifetime; every per-call intermediate (IV, ciphertext, digest)
/// lives on the call stack, so a shared bundler is safe for concurrent use.
#[derive(Debug, Clone)]
pub struct MessageBundler {
    pub(crate) config: BundleConfig,
    pub(crate) engine: BlockCipherEngine,
    pub(crate) hmac_key: HmacKey,
}

impl MessageBundler {
    /// Build a bundler over a validated configuration and key pair.
    ///
    /// Fatal preconditions (invalid `hash_length`, empty delimiter) fail
    /// here, before any cryptographic operation runs.
    pub fn new(config: BundleConfig, cipher_key: CipherKey, hmac_key: HmacKey) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            engine: BlockCipherEngine::new(cipher_key),
            hmac_key,
        })
    }

    /// Build a bundler from the external configuration and key seams.
    pub fn from_providers(
        config: &impl ConfigProvider,
        keys: &impl KeyProvider,
    ) -> Result<Self> {
        let config = config.bundle_config()?;
        let cipher_key = keys.cipher_key()?;
        let hmac_key = keys.hmac_key()?;
        Self::new(config, cipher_key, hmac_key)
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }
}
