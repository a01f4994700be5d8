//! # Key Derivation Functions (KDF)
//!
//! Media keys are expanded from a single 32-byte root key with HKDF-SHA256,
//! using the media type label as `info` and no salt.
//!
//! ## Modules
//!
//! - [`hkdf`] - HKDF-SHA256 expansion to the 112-byte key block
//!
//! Most callers never touch this directly: [`KeyMaterial::derive`](crate::crypto::keys::KeyMaterial::derive)
//! and the codec constructors run the derivation for you.

pub mod hkdf;
