//! src/decryptor/stream/trailer.rs
//! Trailer processing — tag extraction, MAC check, final block unpadding
//!
//! The tag is verified before any plaintext of the final pull is released.
//! Malformed shapes (shorter than the tag, ragged ciphertext, no blocks at all)
//! are still run through the MAC first, so a tampered blob reports a signature
//! failure rather than a shape error.

use tracing::{debug, warn};

use crate::consts::{BLOCK_SIZE, MAC_TAG_LEN};
use crate::decryptor::stream::DecryptStream;
use crate::error::MediaCryptError;
use crate::source::ByteSource;
use crate::state::StreamState;
use crate::utils::pkcs7_unpadded_len;

impl<S: ByteSource> DecryptStream<S> {
    /// The source is drained: everything in the window is `ciphertext ‖ tag`.
    pub(super) fn finish(&mut self) -> Result<(), MediaCryptError> {
        let mut ciphertext = self.window.take_all();
        if ciphertext.len() < MAC_TAG_LEN {
            warn!(len = ciphertext.len(), "encrypted blob shorter than its tag");
            return Err(MediaCryptError::SignatureVerification);
        }
        let tag = ciphertext.split_off(ciphertext.len() - MAC_TAG_LEN);

        if ciphertext.len() % BLOCK_SIZE != 0 {
            self.chain.absorb(&ciphertext)?;
            self.verify(&tag)?;
            return Err(MediaCryptError::Cipher(format!(
                "ciphertext is not a multiple of {BLOCK_SIZE} bytes"
            )));
        }

        let mut plaintext = self.decrypt_blocks(&ciphertext)?;
        self.verify(&tag)?;
        if self.chain.blocks() == 0 {
            return Err(MediaCryptError::Cipher("no ciphertext blocks".into()));
        }

        strip_padding(&mut plaintext);
        self.overflow.extend_from_slice(&plaintext);
        self.state = StreamState::Exhausted;
        debug!(
            media_type = %self.keys.media_type(),
            blocks = self.chain.blocks(),
            "decrypt stream verified"
        );
        Ok(())
    }

    fn verify(&mut self, tag: &[u8]) -> Result<(), MediaCryptError> {
        self.chain.verify_tag(tag).map_err(|err| {
            warn!(media_type = %self.keys.media_type(), "media tag mismatch");
            err
        })
    }
}

/// Remove PKCS#7 padding from the last block of `plaintext`.
///
/// Invalid padding is passed through unchanged. The MAC already covers the
/// ciphertext, so this is not an integrity check, but it is logged.
fn strip_padding(plaintext: &mut Vec<u8>) {
    if plaintext.len() < BLOCK_SIZE {
        return;
    }
    let last_start = plaintext.len() - BLOCK_SIZE;
    match pkcs7_unpadded_len(&plaintext[last_start..]) {
        Some(keep) => plaintext.truncate(last_start + keep),
        None => warn!("final block has invalid PKCS#7 padding; passing it through unchanged"),
    }
}
