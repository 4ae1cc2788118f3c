// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no encoding
//!
//! AES in ECB mode with PKCS#7 padding, the transformation the JCA
//! selects for a bare `"AES"` cipher. All functions work on in-memory
//! buffers.

mod cipher;
mod decrypt;
mod encrypt;
mod padding;

pub(crate) use cipher::BlockCipher;
pub(crate) use decrypt::decrypt_with;
pub(crate) use encrypt::encrypt_with;

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;
