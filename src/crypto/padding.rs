// src/crypto/padding.rs
//! PKCS#7 padding (the JCA calls it PKCS5Padding)

use crate::consts::BLOCK_SIZE;
use crate::error::{CryptoError, Result};

/// Copy `data` and append 1..=16 bytes of padding
pub(crate) fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strip padding in place
pub(crate) fn unpad(buf: &mut Vec<u8>) -> Result<()> {
    let pad_len = match buf.last() {
        Some(&n) => n as usize,
        None => return Err(CryptoError::BadPadding),
    };
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > buf.len() {
        return Err(CryptoError::BadPadding);
    }
    let body_len = buf.len() - pad_len;
    if buf[body_len..].iter().any(|&b| b as usize != pad_len) {
        return Err(CryptoError::BadPadding);
    }
    buf.truncate(body_len);
    Ok(())
}
