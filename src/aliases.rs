// src/aliases.rs
//! Secret container aliases
//!
//! These are the canonical secret containers used throughout the crate.

use zeroize::Zeroizing;

/// Raw AES key material (16, 24 or 32 bytes) — zeroized on drop
pub type KeyBytes = Zeroizing<Vec<u8>>;
