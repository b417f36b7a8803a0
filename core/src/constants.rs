/// AES block size in bytes. CBC requires block-aligned input, so plaintexts
/// are zero-padded up to the next multiple of this length.
pub const BLOCK_LEN: usize = 16;

/// CBC initialization vector length: exactly one block.
pub const IV_LEN: usize = BLOCK_LEN;

/// Valid AES key lengths (AES-128 / AES-192 / AES-256).
pub const AES_KEY_LENS: &[usize] = &[16, 24, 32];

/// HMAC-SHA512 digest length in raw bytes.
pub const DIGEST_LEN: usize = 64;

/// HMAC-SHA512 digest length in hex characters. The configured
/// `hash_length` must equal this for bundle splitting to align.
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_LEN;

/// Default delimiter joining a primary message and its extra messages.
pub const DEFAULT_SPLIT_STRING: &str = "###";

/// In-band error tokens emitted by legacy wire peers instead of typed
/// errors. A decrypted payload equal to one of these is rejected as
/// `MessageNotTrusted` rather than surfaced as live data. A legitimate
/// payload spelled exactly like a token is therefore rejected too; that
/// ambiguity is inherent to the legacy wire.
pub const LEGACY_ERROR_TOKENS: &[&str] = &[
    "ENCRYPTION_ERROR",
    "DECRYPTION_ERROR",
    "HASHING_ERROR",
    "ENCODING_ERROR",
    "DECODING_ERROR",
    "SPLITTING_ERROR",
    "HASH_VERIFICATION_ERROR",
    "MSG_NOT_TRUSTED",
];
