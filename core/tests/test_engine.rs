use bundle_core::cipher::{BlockCipherEngine, CipherError};
use bundle_core::keys::CipherKey;

fn engine_16() -> BlockCipherEngine {
    BlockCipherEngine::new(CipherKey::new(b"0123456789abcdef".to_vec()).unwrap())
}

#[test]
fn round_trips_bytes_under_all_key_sizes() {
    for len in [16usize, 24, 32] {
        let engine = BlockCipherEngine::new(CipherKey::new(vec![0x42; len]).unwrap());
        let plaintext = b"block cipher engine round trip".to_vec();
        let ciphertext = engine.encrypt_bytes(&plaintext).unwrap();
        assert_eq!(engine.decrypt_bytes(&ciphertext).unwrap(), plaintext);
    }
}

#[test]
fn round_trips_text() {
    let engine = engine_16();
    let ciphertext = engine.encrypt_text("héllo wörld").unwrap();
    assert_eq!(engine.decrypt_text(&ciphertext).unwrap(), "héllo wörld");
}

#[test]
fn round_trips_hex() {
    let engine = engine_16();
    let hex_ct = engine.encrypt_hex("transfer:1000").unwrap();
    assert!(hex_ct.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(engine.decrypt_hex(hex_ct.as_bytes()).unwrap(), "transfer:1000");
}

#[test]
fn ciphertext_layout_is_iv_plus_padded_blocks() {
    let engine = engine_16();
    // 13 bytes pad to 16; output is one IV block plus one data block.
    let ciphertext = engine.encrypt_bytes(b"transfer:1000").unwrap();
    assert_eq!(ciphertext.len(), 32);
    // Block-aligned input gains a full padding block.
    let ciphertext = engine.encrypt_bytes(&[7u8; 16]).unwrap();
    assert_eq!(ciphertext.len(), 48);
}

#[test]
fn fresh_iv_makes_ciphertexts_differ() {
    let engine = engine_16();
    let a = engine.encrypt_bytes(b"same message").unwrap();
    let b = engine.encrypt_bytes(b"same message").unwrap();
    assert_ne!(a, b);
    assert_ne!(a[..16], b[..16]);
    assert_eq!(engine.decrypt_bytes(&a).unwrap(), b"same message");
    assert_eq!(engine.decrypt_bytes(&b).unwrap(), b"same message");
}

#[test]
fn empty_plaintext_round_trips_to_empty() {
    let engine = engine_16();
    let ciphertext = engine.encrypt_bytes(b"").unwrap();
    // One IV block plus one all-padding block.
    assert_eq!(ciphertext.len(), 32);
    assert_eq!(engine.decrypt_bytes(&ciphertext).unwrap(), Vec::<u8>::new());
}

#[test]
fn trailing_nul_bytes_are_lost() {
    // Known lossy edge of the zero-padding policy.
    let engine = engine_16();
    let ciphertext = engine.encrypt_bytes(b"data\0\0").unwrap();
    assert_eq!(engine.decrypt_bytes(&ciphertext).unwrap(), b"data");
}

#[test]
fn interior_nul_bytes_survive() {
    let engine = engine_16();
    let ciphertext = engine.encrypt_bytes(b"da\0ta").unwrap();
    assert_eq!(engine.decrypt_bytes(&ciphertext).unwrap(), b"da\0ta");
}

#[test]
fn rejects_ciphertext_shorter_than_iv() {
    let engine = engine_16();
    assert!(matches!(
        engine.decrypt_bytes(&[0u8; 15]),
        Err(CipherError::CiphertextTooShort { actual: 15, min: 16 })
    ));
}

#[test]
fn rejects_unaligned_ciphertext_body() {
    let engine = engine_16();
    assert!(matches!(
        engine.decrypt_bytes(&[0u8; 27]),
        Err(CipherError::NotBlockAligned { len: 11 })
    ));
}

#[test]
fn rejects_non_hex_ciphertext() {
    let engine = engine_16();
    assert!(matches!(
        engine.decrypt_hex(b"zz-not-hex"),
        Err(CipherError::Hex(_))
    ));
}

#[test]
fn rejects_non_utf8_plaintext_on_text_decrypt() {
    let engine = engine_16();
    let ciphertext = engine.encrypt_bytes(&[0xff, 0xfe, 0xfd]).unwrap();
    assert!(matches!(
        engine.decrypt_text(&ciphertext),
        Err(CipherError::InvalidUtf8)
    ));
    // The byte-level entry point still recovers the payload.
    assert_eq!(engine.decrypt_bytes(&ciphertext).unwrap(), vec![0xff, 0xfe, 0xfd]);
}

#[test]
fn keys_of_different_sizes_produce_incompatible_ciphertexts() {
    let small = engine_16();
    let large = BlockCipherEngine::new(CipherKey::new(vec![0x42; 32]).unwrap());
    let ciphertext = small.encrypt_bytes(b"sized for aes-128").unwrap();
    // Wrong key decrypts to garbage, never the original bytes.
    let garbage = large.decrypt_bytes(&ciphertext).unwrap();
    assert_ne!(garbage, b"sized for aes-128".to_vec());
}
