// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: [`EncryptStream`] for pull-based reads in any chunk size.
//! Helpers: [`encrypt`] (reader → writer), [`encrypt_bytes`] (in-memory),
//! [`encrypted_len`] (output size for a known plaintext length).

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::{encrypt, encrypt_bytes};
pub use stream::{encrypted_len, EncryptStream};
