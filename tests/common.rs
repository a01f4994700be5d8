//! tests/common.rs
//! Common constants and helpers shared across test files

use rand::Rng;
use wamedia_rs::{
    DecryptStream, EncryptStream, MediaStream, MediaType, RootKey32, SeekSource,
};

/// Root key used by the fixed known-answer checks: 32 zero bytes.
#[allow(dead_code)]
pub const ZERO_KEY: [u8; 32] = [0u8; 32];

/// Root key for everything else.
#[allow(dead_code)]
pub const TEST_KEY: [u8; 32] = [
    0x8a, 0x1f, 0x3c, 0x44, 0x02, 0x9d, 0xe7, 0x61, 0x5b, 0x70, 0x0e, 0xc3, 0x29, 0x96, 0xd4, 0x1a,
    0x37, 0xfe, 0x88, 0x4c, 0xb2, 0x05, 0x6d, 0x91, 0xaa, 0x13, 0x7e, 0x58, 0xc0, 0x2b, 0xe9, 0x64,
];

/// Chunk sizes every codec must handle identically.
#[allow(dead_code)]
pub const CHUNK_SIZES: &[usize] = &[1, 8, 16, 50, 1024, 1_048_576];

/// Plaintext lengths around every block and look-ahead boundary.
#[allow(dead_code)]
pub const PLAINTEXT_LENGTHS: &[usize] = &[0, 1, 9, 10, 15, 16, 17, 26, 31, 32, 33, 42, 48, 100, 1000, 4103];

#[allow(dead_code)]
pub fn test_key() -> RootKey32 {
    RootKey32::new(TEST_KEY)
}

/// Deterministic, non-repeating-looking plaintext.
#[allow(dead_code)]
pub fn sample_plaintext(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 5)) as u8).collect()
}

#[allow(dead_code)]
pub fn encryptor(plaintext: &[u8], media_type: MediaType) -> EncryptStream<SeekSource<std::io::Cursor<Vec<u8>>>> {
    EncryptStream::new(SeekSource::from_bytes(plaintext.to_vec()), &test_key(), media_type)
        .expect("encryptor")
}

#[allow(dead_code)]
pub fn decryptor(blob: &[u8], media_type: MediaType) -> DecryptStream<SeekSource<std::io::Cursor<Vec<u8>>>> {
    DecryptStream::new(SeekSource::from_bytes(blob.to_vec()), &test_key(), media_type)
        .expect("decryptor")
}

/// Read until `eof()` with a fixed chunk size.
#[allow(dead_code)]
pub fn drain<M: MediaStream>(stream: &mut M, chunk: usize) -> Vec<u8> {
    let mut out = Vec::new();
    while !stream.eof() {
        let part = stream.read(chunk).expect("read");
        assert!(part.len() <= chunk);
        out.extend_from_slice(&part);
    }
    out
}

/// Read until `eof()` with chunk sizes drawn uniformly from `1..=1024`.
#[allow(dead_code)]
pub fn drain_random<M: MediaStream, G: Rng>(stream: &mut M, rng: &mut G) -> Vec<u8> {
    let mut out = Vec::new();
    while !stream.eof() {
        let chunk = rng.random_range(1..=1024);
        out.extend_from_slice(&stream.read(chunk).expect("read"));
    }
    out
}
