// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets.
//!
//! Uploading new media starts from a fresh random root key; this module gives
//! every `SpanBuffer<N>` a `.random()` constructor backed by a thread-local `OsRng`.

use rand::{rngs::OsRng, TryRngCore};
use secure_gate::{Fixed, RevealSecret};
use std::cell::RefCell;

use crate::aliases::RootKey32;
use crate::consts::ROOT_KEY_LEN;
use crate::error::MediaCryptError;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, MediaCryptError>;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self, MediaCryptError> {
        RNG.with(|rng_cell| {
            let mut bytes = [0u8; N];
            rng_cell
                .borrow_mut()
                .try_fill_bytes(&mut bytes)
                .map_err(|e| MediaCryptError::KeyDerivation(format!("OS RNG failed: {e}")))?;
            Ok(Fixed::new(bytes))
        })
    }
}

/// Fresh 32-byte root key for a new upload.
pub fn generate_root_key() -> Result<RootKey32, MediaCryptError> {
    let key = RootKey32::random()?;
    debug_assert_eq!(key.expose_secret().len(), ROOT_KEY_LEN);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_keys_are_fresh() {
        let a = generate_root_key().unwrap();
        let b = generate_root_key().unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }
}
