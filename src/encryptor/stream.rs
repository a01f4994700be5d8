//! src/encryptor/stream.rs
//! Pull-based encryption: plaintext in, `ciphertext ‖ tag` out.
//!
//! No look-ahead is needed: the tag is synthesized, not read. Plaintext that does
//! not yet fill a block waits in a carry buffer until more arrives or the source
//! ends, at which point it is PKCS#7 padded (a full padding block if the carry
//! is empty) and the 10-byte tag is appended.

use std::io::{self, Read};

use aes::cipher::KeyInit;
use aes::Aes256Enc;
use tracing::{debug, trace};

use crate::aliases::RootKey32;
use crate::buffer::OverflowBuffer;
use crate::consts::{BLOCK_SIZE, DEFAULT_CHUNK_SIZE, MAC_TAG_LEN};
use crate::crypto::chain::ChainState;
use crate::crypto::keys::KeyMaterial;
use crate::error::MediaCryptError;
use crate::media::MediaType;
use crate::source::ByteSource;
use crate::state::{Failure, StreamState};
use crate::stream::MediaStream;
use crate::utils::pkcs7_pad_block;

/// Streaming encryptor.
pub struct EncryptStream<S> {
    source: S,
    keys: KeyMaterial,
    cipher: Aes256Enc,
    chain: ChainState,
    /// Plaintext shorter than one block, waiting for more input.
    carry: OverflowBuffer,
    /// Ciphertext (and finally the tag) produced but not yet returned.
    overflow: OverflowBuffer,
    state: StreamState,
}

impl<S: ByteSource> EncryptStream<S> {
    pub fn new(
        source: S,
        root_key: &RootKey32,
        media_type: MediaType,
    ) -> Result<Self, MediaCryptError> {
        let keys = KeyMaterial::derive(root_key, media_type)?;
        Self::with_keys(source, keys)
    }

    pub fn with_keys(source: S, keys: KeyMaterial) -> Result<Self, MediaCryptError> {
        let cipher = Aes256Enc::new_from_slice(keys.cipher_key())
            .map_err(|e| MediaCryptError::Cipher(format!("AES key rejected: {e}")))?;
        let chain = ChainState::new(&keys)?;
        debug!(
            media_type = %keys.media_type(),
            source_len = ?source.size(),
            "encrypt stream ready"
        );
        Ok(Self {
            source,
            keys,
            cipher,
            chain,
            carry: OverflowBuffer::new(),
            overflow: OverflowBuffer::new(),
            state: StreamState::Init,
        })
    }

    pub fn read(&mut self, length: usize) -> Result<Vec<u8>, MediaCryptError> {
        if let StreamState::Failed(failure) = &self.state {
            return Err(failure.to_error());
        }

        let mut out = self.overflow.take(length);
        while out.len() < length && self.state != StreamState::Exhausted {
            let needed = length - out.len();
            if let Err(err) = self.pull(needed) {
                return Err(self.fail(err));
            }
            out.extend_from_slice(&self.overflow.take(needed));
        }

        if self.state == StreamState::Init && !out.is_empty() {
            self.state = StreamState::Streaming;
        }
        self.chain.advance(out.len());
        Ok(out)
    }

    /// `true` once the tag has been emitted and every byte returned.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.state == StreamState::Exhausted && self.overflow.is_empty()
    }

    #[must_use]
    pub fn tell(&self) -> u64 {
        self.chain.position()
    }

    /// Exact encrypted length: `(L / 16 + 1) * 16 + 10` for a source of length `L`.
    ///
    /// PKCS#7 always adds between 1 and 16 bytes, so a block-aligned plaintext
    /// gains a whole padding block.
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        self.source.size().map(encrypted_len)
    }

    pub fn rewind(&mut self) -> Result<(), MediaCryptError> {
        if let Err(err) = self.source.rewind() {
            return Err(self.fail(err.into()));
        }
        self.chain.reset(&self.keys)?;
        self.carry.clear();
        self.overflow.clear();
        self.state = StreamState::Init;
        debug!(media_type = %self.keys.media_type(), "encrypt stream rewound");
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.keys.media_type()
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Pull enough plaintext to produce at least `needed` ciphertext bytes (at
    /// most [`DEFAULT_CHUNK_SIZE`] per pull), or everything that is left.
    fn pull(&mut self, needed: usize) -> Result<(), MediaCryptError> {
        let needed = needed.min(DEFAULT_CHUNK_SIZE);
        // Whole blocks only: a partial block could not be encrypted yet anyway.
        let target = needed.div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
        let want = target.saturating_sub(self.carry.len());

        let mut chunk = vec![0u8; want];
        let got = self.source.read_chunk(&mut chunk)?;
        let exhausted = got < want || self.source.eof();
        self.carry.extend_from_slice(&chunk[..got]);

        trace!(needed, want, got, exhausted, "encrypt pull");

        let whole = self.carry.len() / BLOCK_SIZE * BLOCK_SIZE;
        let mut plaintext = self.carry.take(whole);
        if exhausted {
            let tail = self.carry.take_all();
            plaintext.extend_from_slice(&pkcs7_pad_block(&tail));
        }

        let mut ciphertext = vec![0u8; plaintext.len()];
        for (pt, ct) in plaintext
            .chunks_exact(BLOCK_SIZE)
            .zip(ciphertext.chunks_exact_mut(BLOCK_SIZE))
        {
            self.chain.encrypt_block(&self.cipher, pt, ct)?;
        }

        if exhausted {
            let tag = self.chain.finalize_tag()?;
            ciphertext.extend_from_slice(&tag);
            self.state = StreamState::Exhausted;
            debug!(
                media_type = %self.keys.media_type(),
                blocks = self.chain.blocks(),
                "encrypt stream sealed"
            );
        }

        self.overflow.extend_from_slice(&ciphertext);
        Ok(())
    }

    fn fail(&mut self, err: MediaCryptError) -> MediaCryptError {
        self.state = StreamState::Failed(Failure::from_error(&err));
        self.carry.clear();
        self.overflow.clear();
        err
    }
}

/// Length of `pad(plaintext) ‖ tag` for a plaintext of `plaintext_len` bytes.
#[must_use]
pub const fn encrypted_len(plaintext_len: u64) -> u64 {
    (plaintext_len / BLOCK_SIZE as u64 + 1) * BLOCK_SIZE as u64 + MAC_TAG_LEN as u64
}

impl<S: ByteSource> MediaStream for EncryptStream<S> {
    fn read(&mut self, length: usize) -> Result<Vec<u8>, MediaCryptError> {
        EncryptStream::read(self, length)
    }

    fn eof(&self) -> bool {
        EncryptStream::eof(self)
    }

    fn tell(&self) -> u64 {
        EncryptStream::tell(self)
    }

    fn rewind(&mut self) -> Result<(), MediaCryptError> {
        EncryptStream::rewind(self)
    }

    fn state(&self) -> &StreamState {
        EncryptStream::state(self)
    }

    fn size(&self) -> Option<u64> {
        EncryptStream::size(self)
    }
}

impl<S: ByteSource> Read for EncryptStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let chunk = EncryptStream::read(self, buf.len())?;
        buf[..chunk.len()].copy_from_slice(&chunk);
        Ok(chunk.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypted_len_always_pads() {
        assert_eq!(encrypted_len(0), 26);
        assert_eq!(encrypted_len(1), 26);
        assert_eq!(encrypted_len(15), 26);
        assert_eq!(encrypted_len(16), 42);
        assert_eq!(encrypted_len(17), 42);
    }
}
