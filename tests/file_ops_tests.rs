// tests/file_ops_tests.rs
mod common;
use common::{java_codec_128, setup};

use std::fs;

use tempfile::tempdir;
use thenextlvl_crypto::file_ops::looks_like_ciphertext;
use thenextlvl_crypto::{decode_file, encode_file, Base64Alphabet, CryptoError};

#[test]
fn test_file_roundtrip() {
    setup();
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    let encoded = dir.path().join("plain.bin.b64");
    let decoded = dir.path().join("plain.out");

    let payload: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    fs::write(&plain, &payload).unwrap();

    let aes = java_codec_128();
    assert_eq!(encode_file(&plain, &encoded, &aes).unwrap(), 1000);
    assert!(looks_like_ciphertext(
        &fs::read(&encoded).unwrap(),
        Base64Alphabet::Standard
    ));

    assert_eq!(decode_file(&encoded, &decoded, &aes).unwrap(), 1000);
    assert_eq!(fs::read(&decoded).unwrap(), payload);
}

#[test]
fn test_encoded_file_is_plain_base64_text() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("hello.txt");
    let encoded = dir.path().join("hello.txt.b64");
    fs::write(&plain, "hello").unwrap();

    encode_file(&plain, &encoded, &java_codec_128()).unwrap();
    assert_eq!(
        fs::read_to_string(&encoded).unwrap(),
        "67fHA+Z12z2jlwOLTBeCPA=="
    );
}

#[test]
fn test_decode_file_ignores_trailing_newline() {
    let dir = tempdir().unwrap();
    let encoded = dir.path().join("edited.b64");
    let decoded = dir.path().join("edited.txt");
    fs::write(&encoded, "  67fHA+Z12z2jlwOLTBeCPA==\r\n").unwrap();

    assert_eq!(decode_file(&encoded, &decoded, &java_codec_128()).unwrap(), 5);
    assert_eq!(fs::read_to_string(&decoded).unwrap(), "hello");
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let result = encode_file(
        dir.path().join("does-not-exist"),
        dir.path().join("out"),
        &java_codec_128(),
    );
    assert!(matches!(result, Err(CryptoError::Io(_))));
}

#[test]
fn test_looks_like_ciphertext() {
    assert!(looks_like_ciphertext(
        b"67fHA+Z12z2jlwOLTBeCPA==",
        Base64Alphabet::Standard
    ));
    assert!(looks_like_ciphertext(
        b"67fHA-Z12z2jlwOLTBeCPA==",
        Base64Alphabet::UrlSafe
    ));
    assert!(!looks_like_ciphertext(b"aGVsbG8=", Base64Alphabet::Standard));
    assert!(!looks_like_ciphertext(b"", Base64Alphabet::Standard));
    assert!(!looks_like_ciphertext(b"plain text", Base64Alphabet::Standard));
}
