// src/crypto/cipher.rs
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

use crate::consts::BLOCK_SIZE;
use crate::enums::KeySize;
use crate::key_ops::SecretKey;

/// Expanded AES key schedule for whichever key size the secret has
pub(crate) enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    pub(crate) fn new(key: &SecretKey) -> Self {
        // SecretKey::size() always matches the length of its bytes
        let raw = key.expose_secret();
        match key.size() {
            KeySize::Aes128 => Self::Aes128(Aes128::new(GenericArray::from_slice(raw))),
            KeySize::Aes192 => Self::Aes192(Aes192::new(GenericArray::from_slice(raw))),
            KeySize::Aes256 => Self::Aes256(Aes256::new(GenericArray::from_slice(raw))),
        }
    }

    /// Encrypt every block of `buf` in place (ECB)
    ///
    /// `buf.len()` must be a multiple of [`BLOCK_SIZE`].
    pub(crate) fn encrypt_blocks(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % BLOCK_SIZE, 0);
        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let block = Block::from_mut_slice(chunk);
            match self {
                Self::Aes128(c) => c.encrypt_block(block),
                Self::Aes192(c) => c.encrypt_block(block),
                Self::Aes256(c) => c.encrypt_block(block),
            }
        }
    }

    /// Decrypt every block of `buf` in place (ECB)
    pub(crate) fn decrypt_blocks(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % BLOCK_SIZE, 0);
        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let block = Block::from_mut_slice(chunk);
            match self {
                Self::Aes128(c) => c.decrypt_block(block),
                Self::Aes192(c) => c.decrypt_block(block),
                Self::Aes256(c) => c.decrypt_block(block),
            }
        }
    }
}
