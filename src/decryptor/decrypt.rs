//! src/decryptor/decrypt.rs
//! One-shot decryption helpers built on [`DecryptStream`].

use crate::aliases::RootKey32;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::decryptor::stream::DecryptStream;
use crate::error::MediaCryptError;
use crate::media::MediaType;
use crate::source::{ReadSource, SeekSource};
use crate::stream::pump;
use std::io::{Read, Write};

/// Decrypt `ciphertext ‖ tag` from `input` into `output`.
///
/// Plaintext is written as it is produced, so `output` receives unauthenticated
/// bytes until this function returns `Ok`. On [`MediaCryptError::SignatureVerification`]
/// the caller must discard what was written. Use [`decrypt_bytes`] when the whole
/// blob fits in memory and nothing may be released before the tag is checked.
///
/// Returns the number of plaintext bytes written.
///
/// # Example
///
/// ```
/// use wamedia_rs::{decrypt, encrypt_bytes, MediaType, RootKey32};
///
/// let key = RootKey32::new([0x42; 32]);
/// let blob = encrypt_bytes(b"voice note", &key, MediaType::Audio)?;
///
/// let mut plaintext = Vec::new();
/// decrypt(blob.as_slice(), &mut plaintext, &key, MediaType::Audio)?;
/// assert_eq!(plaintext, b"voice note");
/// # Ok::<(), wamedia_rs::MediaCryptError>(())
/// ```
pub fn decrypt<R, W>(
    input: R,
    mut output: W,
    root_key: &RootKey32,
    media_type: MediaType,
) -> Result<u64, MediaCryptError>
where
    R: Read,
    W: Write,
{
    let mut stream = DecryptStream::new(ReadSource::new(input), root_key, media_type)?;
    pump(&mut stream, &mut output, DEFAULT_CHUNK_SIZE)
}

/// Decrypt a complete in-memory blob.
///
/// The whole blob is consumed before returning, so the tag is verified before
/// any plaintext is handed back.
pub fn decrypt_bytes(
    blob: &[u8],
    root_key: &RootKey32,
    media_type: MediaType,
) -> Result<Vec<u8>, MediaCryptError> {
    let mut stream = DecryptStream::new(SeekSource::from_bytes(blob), root_key, media_type)?;
    let plaintext = stream.read(blob.len().max(1))?;
    debug_assert!(stream.eof());
    Ok(plaintext)
}
