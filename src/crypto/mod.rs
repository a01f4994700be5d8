// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! Key derivation, the incremental MAC, and the per-stream CBC chaining state.
//! The codecs in [`crate::decryptor`] and [`crate::encryptor`] are built on these.

pub mod chain;
pub mod hmac;
pub mod kdf;
pub mod keys;
#[cfg(feature = "rand")]
pub mod rng;
