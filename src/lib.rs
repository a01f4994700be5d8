// src/lib.rs

//! Streaming encryption and decryption of WhatsApp-style media blobs.
//!
//! Wire format: `AES-256-CBC(pkcs7(plaintext), cipherKey, iv) ‖ HMAC-SHA256(iv ‖ ciphertext, macKey)[..10]`,
//! with `iv`, `cipherKey` and `macKey` expanded from a 32-byte root key by
//! HKDF-SHA256 under one of four media labels.
//!
//! [`EncryptStream`] and [`DecryptStream`] pull from any [`ByteSource`] and hand
//! out bytes in whatever chunk size the caller asks for, without buffering the
//! whole object.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod buffer;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod media;
pub mod source;
pub mod state;
pub mod stream;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_bytes, DecryptStream};
pub use encryptor::{encrypt, encrypt_bytes, encrypted_len, EncryptStream};
pub use error::MediaCryptError;

pub use aliases::RootKey32;
pub use builders::stream_builder::StreamBuilder;
pub use crypto::keys::KeyMaterial;
pub use media::MediaType;
pub use source::{ByteSource, ReadSource, SeekSource};
pub use state::{Failure, StreamState};
pub use stream::MediaStream;

#[cfg(feature = "rand")]
pub use crypto::rng::generate_root_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
