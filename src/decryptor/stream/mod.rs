// src/decryptor/stream/mod.rs

//! Pull-based decryption of `ciphertext ‖ tag`.
//!
//! - [`context`] - look-ahead window and interior blocks
//! - [`trailer`] - final block, tag check, PKCS#7 removal

pub(crate) mod context;
pub(crate) mod trailer;

use std::io::{self, Read};

use aes::cipher::KeyInit;
use aes::Aes256Dec;
use tracing::debug;

use crate::aliases::RootKey32;
use crate::buffer::OverflowBuffer;
use crate::crypto::chain::ChainState;
use crate::crypto::keys::KeyMaterial;
use crate::error::MediaCryptError;
use crate::media::MediaType;
use crate::source::ByteSource;
use crate::state::{Failure, StreamState};
use crate::stream::MediaStream;

/// Streaming decryptor.
///
/// `read(n)` hands out plaintext in any chunk size. The tag is only checked once
/// the source is drained, so plaintext returned before [`eof`](Self::eof) is
/// reached without error has **not** been authenticated yet.
pub struct DecryptStream<S> {
    source: S,
    keys: KeyMaterial,
    cipher: Aes256Dec,
    chain: ChainState,
    /// Raw bytes pulled from the source but not yet decrypted.
    window: OverflowBuffer,
    /// Plaintext produced but not yet returned.
    overflow: OverflowBuffer,
    state: StreamState,
}

impl<S: ByteSource> DecryptStream<S> {
    pub fn new(
        source: S,
        root_key: &RootKey32,
        media_type: MediaType,
    ) -> Result<Self, MediaCryptError> {
        let keys = KeyMaterial::derive(root_key, media_type)?;
        Self::with_keys(source, keys)
    }

    pub fn with_keys(source: S, keys: KeyMaterial) -> Result<Self, MediaCryptError> {
        let cipher = Aes256Dec::new_from_slice(keys.cipher_key())
            .map_err(|e| MediaCryptError::Cipher(format!("AES key rejected: {e}")))?;
        let chain = ChainState::new(&keys)?;
        debug!(
            media_type = %keys.media_type(),
            source_len = ?source.size(),
            "decrypt stream ready"
        );
        Ok(Self {
            source,
            keys,
            cipher,
            chain,
            window: OverflowBuffer::new(),
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

    /// `true` once the tag has been validated and every plaintext byte returned.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.state == StreamState::Exhausted && self.overflow.is_empty()
    }

    #[must_use]
    pub fn tell(&self) -> u64 {
        self.chain.position()
    }

    pub fn rewind(&mut self) -> Result<(), MediaCryptError> {
        if let Err(err) = self.source.rewind() {
            return Err(self.fail(err.into()));
        }
        self.chain.reset(&self.keys)?;
        self.window.clear();
        self.overflow.clear();
        self.state = StreamState::Init;
        debug!(media_type = %self.keys.media_type(), "decrypt stream rewound");
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

    fn fail(&mut self, err: MediaCryptError) -> MediaCryptError {
        self.state = StreamState::Failed(Failure::from_error(&err));
        self.window.clear();
        self.overflow.clear();
        err
    }
}

impl<S: ByteSource> MediaStream for DecryptStream<S> {
    fn read(&mut self, length: usize) -> Result<Vec<u8>, MediaCryptError> {
        DecryptStream::read(self, length)
    }

    fn eof(&self) -> bool {
        DecryptStream::eof(self)
    }

    fn tell(&self) -> u64 {
        DecryptStream::tell(self)
    }

    fn rewind(&mut self) -> Result<(), MediaCryptError> {
        DecryptStream::rewind(self)
    }

    fn state(&self) -> &StreamState {
        DecryptStream::state(self)
    }
}

impl<S: ByteSource> Read for DecryptStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let chunk = DecryptStream::read(self, buf.len())?;
        buf[..chunk.len()].copy_from_slice(&chunk);
        Ok(chunk.len())
    }
}
