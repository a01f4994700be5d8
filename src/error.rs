//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, MediaCryptError>`](MediaCryptError).

use std::io;
use thiserror::Error;

/// The error type for all media encryption and decryption operations.
#[derive(Error, Debug)]
pub enum MediaCryptError {
    /// I/O error raised by the underlying byte source or sink.
    ///
    /// Propagated unchanged; never retried.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HKDF expansion of the root key failed at construction.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The trailing 10-byte tag does not match the ciphertext.
    ///
    /// Only detected once the whole blob has been consumed. Plaintext returned
    /// before this point was not yet authenticated.
    #[error("signature verification failed")]
    SignatureVerification,

    /// Block cipher or MAC primitive failure, or a malformed ciphertext shape.
    #[error("cipher error: {0}")]
    Cipher(String),

    /// Arbitrary seeks and writes are not supported by the codecs.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A media type label outside the four fixed contexts.
    #[error("invalid media type: {0:?}")]
    InvalidMediaType(String),

    /// Root key with the wrong length.
    #[error("invalid root key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),
}

impl From<MediaCryptError> for io::Error {
    fn from(err: MediaCryptError) -> Self {
        match err {
            MediaCryptError::Io(e) => e,
            MediaCryptError::UnsupportedOperation(_) => {
                io::Error::new(io::ErrorKind::Unsupported, err)
            }
            MediaCryptError::InvalidMediaType(_) | MediaCryptError::InvalidKeyLength(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
