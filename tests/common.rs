// tests/common.rs
//! Shared test utilities — logging setup and fixed keys

#![allow(dead_code)] // not every test binary uses every helper

use thenextlvl_crypto::{Aes, SecretKey};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// AES-128 key used by the JCA-compatibility vectors
pub const JAVA_KEY_128: &str = "1234567890123456";

/// AES-256 key used by the JCA-compatibility vectors
pub const JAVA_KEY_256: &str = "0123456789abcdef0123456789abcdef";

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

pub fn java_codec_128() -> Aes {
    Aes::from_secret(JAVA_KEY_128).unwrap()
}

pub fn java_codec_256() -> Aes {
    Aes::from_secret(JAVA_KEY_256).unwrap()
}

/// FIPS-197 Appendix C key: 00 01 02 .. (len - 1)
pub fn fips_key(len: u8) -> SecretKey {
    SecretKey::from_bytes((0..len).collect::<Vec<u8>>()).unwrap()
}
