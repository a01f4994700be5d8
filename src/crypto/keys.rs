//! src/crypto/keys.rs
//! Per-stream key material sliced out of the HKDF expansion.

use std::fmt;

use secure_gate::{RevealSecret, RevealSecretMut};

use crate::aliases::{Aes256Key32, ExpandedKey112, HmacKey32, Iv16, RefKey32, RootKey32};
use crate::consts::{CIPHER_KEY_LEN, EXPANDED_KEY_LEN, IV_LEN, MAC_KEY_LEN, REF_KEY_LEN};
use crate::crypto::kdf::hkdf::expand_media_key;
use crate::error::MediaCryptError;
use crate::media::MediaType;

const CIPHER_KEY_START: usize = IV_LEN;
const MAC_KEY_START: usize = CIPHER_KEY_START + CIPHER_KEY_LEN;
const REF_KEY_START: usize = MAC_KEY_START + MAC_KEY_LEN;

/// Immutable keys for one codec instance.
///
/// | field       | bytes of the expansion |
/// |-------------|------------------------|
/// | `iv`        | `[0, 16)`              |
/// | `cipherKey` | `[16, 48)`             |
/// | `macKey`    | `[48, 80)`             |
/// | `refKey`    | `[80, 112)`            |
///
/// `refKey` is derived for wire compatibility only; nothing in this crate uses it.
pub struct KeyMaterial {
    media_type: MediaType,
    iv: Iv16,
    cipher_key: Aes256Key32,
    mac_key: HmacKey32,
    ref_key: RefKey32,
}

impl KeyMaterial {
    /// Run HKDF-SHA256 over `root_key` with the label of `media_type`.
    pub fn derive(root_key: &RootKey32, media_type: MediaType) -> Result<Self, MediaCryptError> {
        let mut expanded = ExpandedKey112::new([0u8; EXPANDED_KEY_LEN]);
        expand_media_key(root_key, media_type, &mut expanded)?;
        let okm = expanded.expose_secret();

        let mut iv = Iv16::new([0u8; IV_LEN]);
        iv.expose_secret_mut()
            .copy_from_slice(&okm[..CIPHER_KEY_START]);

        let mut cipher_key = Aes256Key32::new([0u8; CIPHER_KEY_LEN]);
        cipher_key
            .expose_secret_mut()
            .copy_from_slice(&okm[CIPHER_KEY_START..MAC_KEY_START]);

        let mut mac_key = HmacKey32::new([0u8; MAC_KEY_LEN]);
        mac_key
            .expose_secret_mut()
            .copy_from_slice(&okm[MAC_KEY_START..REF_KEY_START]);

        let mut ref_key = RefKey32::new([0u8; REF_KEY_LEN]);
        ref_key
            .expose_secret_mut()
            .copy_from_slice(&okm[REF_KEY_START..EXPANDED_KEY_LEN]);

        Ok(Self {
            media_type,
            iv,
            cipher_key,
            mac_key,
            ref_key,
        })
    }

    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    #[must_use]
    pub fn iv(&self) -> &[u8; IV_LEN] {
        self.iv.expose_secret()
    }

    #[must_use]
    pub fn cipher_key(&self) -> &[u8; CIPHER_KEY_LEN] {
        self.cipher_key.expose_secret()
    }

    #[must_use]
    pub fn mac_key(&self) -> &[u8; MAC_KEY_LEN] {
        self.mac_key.expose_secret()
    }

    #[must_use]
    pub fn ref_key(&self) -> &[u8; REF_KEY_LEN] {
        self.ref_key.expose_secret()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("media_type", &self.media_type)
            .field("keys", &"[REDACTED]")
            .finish()
    }
}
