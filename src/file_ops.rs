// src/file_ops.rs
//! File-level encode/decode operations
//!
//! Builds on the in-memory [`Aes`] codec: plaintext files in, Base64
//! ciphertext text files out, and back. Also includes a cheap
//! ciphertext detection helper.

use std::path::Path;

use base64::Engine;
use tracing::debug;

use crate::codec::Aes;
use crate::consts::BLOCK_SIZE;
use crate::enums::Base64Alphabet;
use crate::error::Result;

/// Encrypt a file on disk into Base64 ciphertext text
///
/// Returns the plaintext size in bytes.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    aes: &Aes,
) -> Result<u64> {
    let plaintext = std::fs::read(input_path.as_ref())?;
    let encoded = aes.encode(&plaintext);
    std::fs::write(output_path.as_ref(), encoded)?;

    let plaintext_size_bytes = plaintext.len() as u64;
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        plaintext_size_bytes,
        "encoded file"
    );
    Ok(plaintext_size_bytes)
}

/// Decrypt a Base64 ciphertext text file on disk
///
/// Surrounding whitespace (e.g. a trailing newline from an editor) is
/// ignored. Returns the plaintext size in bytes.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    aes: &Aes,
) -> Result<u64> {
    let text = std::fs::read(input_path.as_ref())?;
    let plaintext = aes.decode_to_vec(text.trim_ascii())?;
    std::fs::write(output_path.as_ref(), &plaintext)?;

    let plaintext_size_bytes = plaintext.len() as u64;
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        plaintext_size_bytes,
        "decoded file"
    );
    Ok(plaintext_size_bytes)
}

/// Check if text is Base64 for a whole number of AES blocks
///
/// Says nothing about which key produced it.
pub fn looks_like_ciphertext(data: &[u8], alphabet: Base64Alphabet) -> bool {
    match alphabet.engine().decode(data.trim_ascii()) {
        Ok(raw) => !raw.is_empty() && raw.len() % BLOCK_SIZE == 0,
        Err(_) => false,
    }
}
