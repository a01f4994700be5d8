//! Operations shared by [`DecryptStream`](crate::DecryptStream) and
//! [`EncryptStream`](crate::EncryptStream).
//!
//! Both codecs are single-use forward cursors. They can be rewound to the start
//! but never seeked, and they are never writable.

use std::io::{SeekFrom, Write};

use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::MediaCryptError;
use crate::state::StreamState;

pub trait MediaStream {
    /// Return exactly `length` bytes, or fewer only once the content is exhausted.
    fn read(&mut self, length: usize) -> Result<Vec<u8>, MediaCryptError>;

    /// `true` once every byte has been produced and handed out.
    fn eof(&self) -> bool;

    /// Bytes returned since construction or the last rewind.
    fn tell(&self) -> u64;

    /// Rewind the source and reset the chaining state.
    fn rewind(&mut self) -> Result<(), MediaCryptError>;

    fn state(&self) -> &StreamState;

    /// Output length, when the source length is known.
    fn size(&self) -> Option<u64> {
        None
    }

    fn is_seekable(&self) -> bool {
        false
    }

    /// Only `SeekFrom::Start(0)` is accepted, as a rewind.
    fn seek(&mut self, pos: SeekFrom) -> Result<(), MediaCryptError> {
        match pos {
            SeekFrom::Start(0) => self.rewind(),
            _ => Err(MediaCryptError::UnsupportedOperation("seek")),
        }
    }

    fn is_writable(&self) -> bool {
        false
    }

    fn write(&mut self, _data: &[u8]) -> Result<usize, MediaCryptError> {
        Err(MediaCryptError::UnsupportedOperation("write"))
    }

    /// Everything from the current position to the end.
    fn read_to_end(&mut self) -> Result<Vec<u8>, MediaCryptError> {
        let mut out = Vec::new();
        loop {
            let chunk = self.read(DEFAULT_CHUNK_SIZE)?;
            if chunk.is_empty() {
                return Ok(out);
            }
            out.extend_from_slice(&chunk);
        }
    }

    /// Rewind, then read the whole content.
    fn read_all(&mut self) -> Result<Vec<u8>, MediaCryptError> {
        self.rewind()?;
        self.read_to_end()
    }
}

/// Drain `stream` into `output` in chunks of `chunk_size`, returning bytes written.
pub fn pump<M, W>(stream: &mut M, output: &mut W, chunk_size: usize) -> Result<u64, MediaCryptError>
where
    M: MediaStream + ?Sized,
    W: Write + ?Sized,
{
    let chunk_size = chunk_size.max(1);
    let mut written = 0u64;
    loop {
        let chunk = stream.read(chunk_size)?;
        if chunk.is_empty() {
            break;
        }
        output.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
    output.flush()?;
    Ok(written)
}
