// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: [`DecryptStream`] for pull-based reads in any chunk size.
//! Helpers: [`decrypt`] (reader → writer) and [`decrypt_bytes`] (in-memory, authenticated first).

pub(crate) mod decrypt;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_bytes};
pub use stream::DecryptStream;
