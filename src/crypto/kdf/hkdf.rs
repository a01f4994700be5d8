//! src/crypto/kdf/hkdf.rs

use crate::aliases::{ExpandedKey112, RootKey32};
use crate::error::MediaCryptError;
use crate::media::MediaType;

use hkdf::Hkdf;
use secure_gate::{RevealSecret, RevealSecretMut};
use sha2::Sha256;

/// Expand the root key into the 112-byte media key block.
///
/// HKDF-SHA256 with no salt and `info = media_type.label()`. The output is written
/// straight into the caller's secure buffer.
#[inline]
pub fn expand_media_key(
    root_key: &RootKey32,
    media_type: MediaType,
    out: &mut ExpandedKey112,
) -> Result<(), MediaCryptError> {
    let hk = Hkdf::<Sha256>::new(None, root_key.expose_secret());
    hk.expand(media_type.label().as_bytes(), out.expose_secret_mut())
        .map_err(|e| MediaCryptError::KeyDerivation(format!("HKDF expand failed: {e}")))
}
