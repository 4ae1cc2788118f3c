// src/crypto/decrypt.rs
use super::cipher::BlockCipher;
use super::padding::unpad;
use crate::consts::BLOCK_SIZE;
use crate::error::{CryptoError, Result};
use crate::key_ops::SecretKey;

/// Decrypt AES/ECB/PKCS#7 ciphertext → plaintext (in-memory)
///
/// A wrong key almost always surfaces as [`CryptoError::BadPadding`].
pub fn decrypt_to_vec(ciphertext: &[u8], key: &SecretKey) -> Result<Vec<u8>> {
    decrypt_with(&BlockCipher::new(key), ciphertext)
}

pub(crate) fn decrypt_with(cipher: &BlockCipher, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidBlockLength(ciphertext.len()));
    }

    let mut buf = ciphertext.to_vec();
    cipher.decrypt_blocks(&mut buf);
    unpad(&mut buf)?;
    Ok(buf)
}
