//! src/decryptor/stream/context.rs
//! Look-ahead window and interior block decryption.
//!
//! The encrypted blob ends in `last ciphertext block ‖ 10-byte tag`. While the
//! source may still hold more bytes, the window never decrypts a block unless at
//! least one further block plus a tag's worth of bytes already sits behind it.
//! That is the only way to know the block is not the final, padded one. Once the
//! source reports exhaustion, the whole window goes to [`trailer`](super::trailer).

use tracing::trace;

use crate::consts::{BLOCK_SIZE, DEFAULT_CHUNK_SIZE, MAC_TAG_LEN};
use crate::decryptor::stream::DecryptStream;
use crate::error::MediaCryptError;
use crate::source::ByteSource;

/// Bytes kept back behind the last block that may be decrypted early.
const HOLD_BACK: usize = BLOCK_SIZE + MAC_TAG_LEN;

impl<S: ByteSource> DecryptStream<S> {
    /// Pull enough ciphertext to produce at least `needed` plaintext bytes (at
    /// most [`DEFAULT_CHUNK_SIZE`] per pull), or everything that is left.
    pub(super) fn pull(&mut self, needed: usize) -> Result<(), MediaCryptError> {
        let needed = needed.min(DEFAULT_CHUNK_SIZE);
        let target = needed.div_ceil(BLOCK_SIZE) * BLOCK_SIZE + HOLD_BACK;
        let want = target.saturating_sub(self.window.len());

        let mut chunk = vec![0u8; want];
        let got = self.source.read_chunk(&mut chunk)?;
        let exhausted = got < want || self.source.eof();
        self.window.extend_from_slice(&chunk[..got]);

        trace!(needed, want, got, exhausted, "decrypt pull");

        if exhausted {
            self.finish()
        } else {
            self.decrypt_interior()
        }
    }

    /// Decrypt every block that is provably not the final one.
    fn decrypt_interior(&mut self) -> Result<(), MediaCryptError> {
        let safe_blocks = self.window.len().saturating_sub(HOLD_BACK) / BLOCK_SIZE;
        if safe_blocks == 0 {
            return Ok(());
        }
        let ciphertext = self.window.take(safe_blocks * BLOCK_SIZE);
        let plaintext = self.decrypt_blocks(&ciphertext)?;
        self.overflow.extend_from_slice(&plaintext);
        Ok(())
    }

    /// Decrypt whole blocks in stream order; `ciphertext` must be block aligned.
    pub(super) fn decrypt_blocks(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>, MediaCryptError> {
        let mut plaintext = vec![0u8; ciphertext.len()];
        for (ct, pt) in ciphertext
            .chunks_exact(BLOCK_SIZE)
            .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
        {
            self.chain.decrypt_block(&self.cipher, ct, pt)?;
        }
        Ok(plaintext)
    }
}
