//! tests/decrypt_tests.rs
//! Decryption: known answers, tamper detection, malformed blobs, lenient padding

mod common;
use common::{decryptor, drain, sample_plaintext, test_key, ZERO_KEY};

use aes::cipher::KeyInit;
use aes::Aes256Enc;
use wamedia_rs::crypto::chain::ChainState;
use wamedia_rs::crypto::hmac::MacAccumulator;
use wamedia_rs::{
    decrypt, decrypt_bytes, encrypt_bytes, DecryptStream, Failure, KeyMaterial, MediaCryptError,
    MediaType, ReadSource, RootKey32, SeekSource, StreamState,
};

// zero root key, "WhatsApp Audio Keys", empty plaintext
const EMPTY_AUDIO_BLOB: &str = "b04f21826acb1d06ac4e1c33bf48924642fa84a17e0daab85c38";
// zero root key, "WhatsApp Audio Keys", sixteen 'A'
const SIXTEEN_A_AUDIO_BLOB: &str =
    "d6693437c8b8f9b02c3897b815b88d99dd6b3c23404afae5a019bdb6eee33f8e8a91c8562acb1af043ef";

#[test]
fn empty_plaintext_blob_decrypts_in_one_read() {
    let blob = hex::decode(EMPTY_AUDIO_BLOB).unwrap();
    assert_eq!(blob.len(), 26);

    let key = RootKey32::new(ZERO_KEY);
    let mut stream =
        DecryptStream::new(SeekSource::from_bytes(blob), &key, MediaType::Audio).unwrap();
    assert!(!stream.eof());
    assert_eq!(stream.read(100).unwrap(), b"");
    assert!(stream.eof());
    assert_eq!(stream.tell(), 0);
}

#[test]
fn block_aligned_plaintext_blob() {
    let blob = hex::decode(SIXTEEN_A_AUDIO_BLOB).unwrap();
    assert_eq!(blob.len(), 42);
    let key = RootKey32::new(ZERO_KEY);
    assert_eq!(
        decrypt_bytes(&blob, &key, MediaType::Audio).unwrap(),
        vec![b'A'; 16]
    );
}

#[test]
fn every_bit_flip_is_detected_at_end_of_stream() {
    let plaintext = sample_plaintext(70);
    let blob = encrypt_bytes(&plaintext, &test_key(), MediaType::Image).unwrap();

    for byte in 0..blob.len() {
        for bit in 0..8 {
            let mut tampered = blob.clone();
            tampered[byte] ^= 1 << bit;

            let mut stream = decryptor(&tampered, MediaType::Image);
            let result = loop {
                match stream.read(16) {
                    Ok(chunk) if chunk.is_empty() && stream.eof() => break Ok(()),
                    Ok(_) => continue,
                    Err(e) => break Err(e),
                }
            };
            assert!(
                matches!(result, Err(MediaCryptError::SignatureVerification)),
                "flip at byte {byte} bit {bit} not detected"
            );
            assert_eq!(
                stream.state(),
                &StreamState::Failed(Failure::SignatureMismatch)
            );
        }
    }
}

#[test]
fn failed_stream_keeps_failing_until_rewind() {
    let mut blob = encrypt_bytes(&sample_plaintext(40), &test_key(), MediaType::Audio).unwrap();
    let last = blob.len() - 1;
    blob[last] ^= 0x80;

    let mut stream = decryptor(&blob, MediaType::Audio);
    assert!(matches!(
        stream.read(1024),
        Err(MediaCryptError::SignatureVerification)
    ));
    for _ in 0..3 {
        assert!(matches!(
            stream.read(1),
            Err(MediaCryptError::SignatureVerification)
        ));
        assert!(!stream.eof());
    }
    assert!(matches!(
        stream.read(0),
        Err(MediaCryptError::SignatureVerification)
    ));

    stream.rewind().unwrap();
    assert_eq!(stream.state(), &StreamState::Init);
    // the blob is still tampered, so the next pass fails the same way
    assert!(matches!(
        stream.read(1024),
        Err(MediaCryptError::SignatureVerification)
    ));
}

#[test]
fn plaintext_before_the_tag_is_released_unauthenticated() {
    let plaintext = sample_plaintext(200);
    let mut blob = encrypt_bytes(&plaintext, &test_key(), MediaType::Audio).unwrap();
    let last = blob.len() - 1;
    blob[last] ^= 0x01;

    let mut stream = decryptor(&blob, MediaType::Audio);
    // early chunks decrypt fine; only the end of stream reports the tampering
    assert_eq!(stream.read(32).unwrap(), &plaintext[..32]);
    let err = loop {
        match stream.read(32) {
            Ok(_) => continue,
            Err(e) => break e,
        }
    };
    assert!(matches!(err, MediaCryptError::SignatureVerification));
}

#[test]
fn wrong_root_key_fails_verification() {
    let blob = encrypt_bytes(b"hello", &test_key(), MediaType::Audio).unwrap();
    let other = RootKey32::new([0x01; 32]);
    assert!(matches!(
        decrypt_bytes(&blob, &other, MediaType::Audio),
        Err(MediaCryptError::SignatureVerification)
    ));
}

#[test]
fn blobs_shorter_than_the_tag_fail_verification() {
    for len in [0usize, 1, 9] {
        let blob = vec![0u8; len];
        assert!(
            matches!(
                decrypt_bytes(&blob, &test_key(), MediaType::Audio),
                Err(MediaCryptError::SignatureVerification)
            ),
            "len {len}"
        );
    }
}

#[test]
fn truncated_blob_fails_verification() {
    let blob = encrypt_bytes(&sample_plaintext(64), &test_key(), MediaType::Video).unwrap();
    for cut in [1usize, 10, 16, 26] {
        let truncated = &blob[..blob.len() - cut];
        assert!(
            matches!(
                decrypt_bytes(truncated, &test_key(), MediaType::Video),
                Err(MediaCryptError::SignatureVerification)
            ),
            "cut {cut}"
        );
    }
}

/// Build `ciphertext ‖ tag` from raw blocks, bypassing PKCS#7.
fn seal_raw_blocks(keys: &KeyMaterial, blocks: &[[u8; 16]]) -> Vec<u8> {
    let cipher = Aes256Enc::new_from_slice(keys.cipher_key()).unwrap();
    let mut chain = ChainState::new(keys).unwrap();
    let mut blob = Vec::new();
    for block in blocks {
        let mut ct = [0u8; 16];
        chain.encrypt_block(&cipher, block, &mut ct).unwrap();
        blob.extend_from_slice(&ct);
    }
    blob.extend_from_slice(&chain.finalize_tag().unwrap());
    blob
}

#[test]
fn invalid_padding_passes_through_unchanged() {
    let keys = KeyMaterial::derive(&test_key(), MediaType::Document).unwrap();

    let mut zero_pad = [0x41u8; 16];
    zero_pad[15] = 0x00;
    let mut oversized = [0x42u8; 16];
    oversized[15] = 0x11;
    let mut inconsistent = [0x43u8; 16];
    inconsistent[15] = 0x04;
    inconsistent[14] = 0x04;

    for last in [zero_pad, oversized, inconsistent] {
        let first = [0x30u8; 16];
        let blob = seal_raw_blocks(&keys, &[first, last]);
        let mut stream = decryptor(&blob, MediaType::Document);
        let plaintext = drain(&mut stream, 5);

        let mut expected = first.to_vec();
        expected.extend_from_slice(&last);
        assert_eq!(plaintext, expected);
        assert!(stream.eof());
    }
}

#[test]
fn valid_tag_over_zero_blocks_is_a_cipher_error() {
    let keys = KeyMaterial::derive(&test_key(), MediaType::Audio).unwrap();
    let mut mac = MacAccumulator::new(keys.mac_key(), keys.iv()).unwrap();
    let blob = mac.finalize_tag().unwrap().to_vec();

    assert!(matches!(
        decrypt_bytes(&blob, &test_key(), MediaType::Audio),
        Err(MediaCryptError::Cipher(_))
    ));
}

#[test]
fn valid_tag_over_ragged_ciphertext_is_a_cipher_error() {
    let keys = KeyMaterial::derive(&test_key(), MediaType::Audio).unwrap();
    let ragged = [0x99u8; 21];
    let mut mac = MacAccumulator::new(keys.mac_key(), keys.iv()).unwrap();
    mac.update(&ragged).unwrap();
    let mut blob = ragged.to_vec();
    blob.extend_from_slice(&mac.finalize_tag().unwrap());

    let mut stream = decryptor(&blob, MediaType::Audio);
    assert!(matches!(stream.read(64), Err(MediaCryptError::Cipher(_))));
    assert!(matches!(stream.state(), StreamState::Failed(Failure::Cipher(_))));
}

#[test]
fn forward_only_source_decrypts() {
    let plaintext = sample_plaintext(5000);
    let blob = encrypt_bytes(&plaintext, &test_key(), MediaType::Image).unwrap();

    for chunk in [1usize, 13, 16, 4096] {
        let mut stream =
            DecryptStream::new(ReadSource::new(blob.as_slice()), &test_key(), MediaType::Image)
                .unwrap();
        assert_eq!(drain(&mut stream, chunk), plaintext, "chunk {chunk}");
    }
}

#[test]
fn decrypt_into_writer() {
    let plaintext = sample_plaintext(150_000);
    let blob = encrypt_bytes(&plaintext, &test_key(), MediaType::Video).unwrap();
    let mut out = Vec::new();
    let written = decrypt(blob.as_slice(), &mut out, &test_key(), MediaType::Video).unwrap();
    assert_eq!(written, plaintext.len() as u64);
    assert_eq!(out, plaintext);
}
