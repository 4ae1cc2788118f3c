// src/crypto/encrypt.rs
use super::cipher::BlockCipher;
use super::padding::pad;
use crate::key_ops::SecretKey;

/// Encrypt plaintext → AES/ECB/PKCS#7 ciphertext (in-memory)
///
/// Output length is always `(plaintext.len() / 16 + 1) * 16`.
pub fn encrypt_to_vec(plaintext: &[u8], key: &SecretKey) -> Vec<u8> {
    encrypt_with(&BlockCipher::new(key), plaintext)
}

pub(crate) fn encrypt_with(cipher: &BlockCipher, plaintext: &[u8]) -> Vec<u8> {
    let mut buf = pad(plaintext);
    cipher.encrypt_blocks(&mut buf);
    buf
}
