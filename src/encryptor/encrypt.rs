//! src/encryptor/encrypt.rs
//! One-shot encryption helpers built on [`EncryptStream`].

use crate::aliases::RootKey32;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::encryptor::stream::{encrypted_len, EncryptStream};
use crate::error::MediaCryptError;
use crate::media::MediaType;
use crate::source::{ReadSource, SeekSource};
use crate::stream::pump;
use std::io::{Read, Write};

/// Encrypt everything `input` yields into `output` as `ciphertext ‖ tag`.
///
/// Returns the number of bytes written.
///
/// # Example
///
/// ```
/// use wamedia_rs::{encrypt, MediaType, RootKey32};
///
/// let key = RootKey32::new([0u8; 32]);
/// let mut blob = Vec::new();
/// let written = encrypt(&b""[..], &mut blob, &key, MediaType::Audio)?;
///
/// // one full padding block plus the 10-byte tag
/// assert_eq!(written, 26);
/// # Ok::<(), wamedia_rs::MediaCryptError>(())
/// ```
pub fn encrypt<R, W>(
    input: R,
    mut output: W,
    root_key: &RootKey32,
    media_type: MediaType,
) -> Result<u64, MediaCryptError>
where
    R: Read,
    W: Write,
{
    let mut stream = EncryptStream::new(ReadSource::new(input), root_key, media_type)?;
    pump(&mut stream, &mut output, DEFAULT_CHUNK_SIZE)
}

/// Encrypt an in-memory plaintext.
pub fn encrypt_bytes(
    plaintext: &[u8],
    root_key: &RootKey32,
    media_type: MediaType,
) -> Result<Vec<u8>, MediaCryptError> {
    let mut stream = EncryptStream::new(SeekSource::from_bytes(plaintext), root_key, media_type)?;
    let len = encrypted_len(plaintext.len() as u64) as usize;
    stream.read(len)
}
