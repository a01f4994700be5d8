// src/crypto/hmac.rs

//! Incremental HMAC-SHA256 over `iv ‖ ciphertext`, truncated to 10 bytes.
//!
//! The accumulator is an explicit two-state machine. Once the tag has been
//! produced or checked the accumulator is finalized, and any further update,
//! finalize, or verify is an error instead of silently producing a bogus tag.

use hmac::Mac;

use crate::aliases::{HmacSha256, MacTag10};
use crate::consts::{IV_LEN, MAC_KEY_LEN, MAC_TAG_LEN};
use crate::error::MediaCryptError;

enum MacState {
    Running(HmacSha256),
    Finalized,
}

pub struct MacAccumulator {
    state: MacState,
}

impl MacAccumulator {
    /// Key the HMAC with `mac_key` and absorb `iv`.
    pub fn new(mac_key: &[u8; MAC_KEY_LEN], iv: &[u8; IV_LEN]) -> Result<Self, MediaCryptError> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(mac_key)
            .map_err(|e| MediaCryptError::Cipher(format!("HMAC key rejected: {e}")))?;
        mac.update(iv);
        Ok(Self {
            state: MacState::Running(mac),
        })
    }

    /// Absorb ciphertext bytes. Never fed plaintext.
    pub fn update(&mut self, ciphertext: &[u8]) -> Result<(), MediaCryptError> {
        match &mut self.state {
            MacState::Running(mac) => {
                mac.update(ciphertext);
                Ok(())
            }
            MacState::Finalized => Err(already_finalized()),
        }
    }

    /// Finalize and return the first 10 bytes of the digest.
    pub fn finalize_tag(&mut self) -> Result<MacTag10, MediaCryptError> {
        let mac = self.running()?;
        self.state = MacState::Finalized;
        Ok(truncate(mac))
    }

    /// Finalize and compare against `expected` in constant time.
    pub fn verify(&mut self, expected: &[u8]) -> Result<(), MediaCryptError> {
        let mac = self.running()?;
        self.state = MacState::Finalized;
        if expected.len() != MAC_TAG_LEN {
            return Err(MediaCryptError::SignatureVerification);
        }
        mac.verify_truncated_left(expected)
            .map_err(|_| MediaCryptError::SignatureVerification)
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, MacState::Finalized)
    }

    fn running(&self) -> Result<HmacSha256, MediaCryptError> {
        match &self.state {
            MacState::Running(mac) => Ok(mac.clone()),
            MacState::Finalized => Err(already_finalized()),
        }
    }
}

fn truncate(mac: HmacSha256) -> MacTag10 {
    let digest = mac.finalize().into_bytes();
    let mut tag = [0u8; MAC_TAG_LEN];
    tag.copy_from_slice(&digest[..MAC_TAG_LEN]);
    tag
}

fn already_finalized() -> MediaCryptError {
    MediaCryptError::Cipher("MAC accumulator already finalized".into())
}
