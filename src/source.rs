//! # Byte Sources
//!
//! The codecs pull raw bytes through the narrow [`ByteSource`] capability and know
//! nothing about files, sockets, or HTTP bodies.
//!
//! - [`SeekSource`] wraps anything `Read + Seek` (files, `Cursor`): rewindable,
//!   with a known length.
//! - [`ReadSource`] wraps a plain `Read` (pipes, sockets): forward-only, length
//!   unknown.

use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// Capability the codecs require from the thing they read from.
pub trait ByteSource {
    /// Fill `buf` from the source.
    ///
    /// Returns fewer than `buf.len()` bytes only when the source is exhausted.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// `true` once every byte has been delivered.
    fn eof(&self) -> bool;

    /// Return to the first byte.
    fn rewind(&mut self) -> io::Result<()>;

    /// Total length in bytes, if known.
    fn size(&self) -> Option<u64> {
        None
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read_chunk(buf)
    }

    fn eof(&self) -> bool {
        (**self).eof()
    }

    fn rewind(&mut self) -> io::Result<()> {
        (**self).rewind()
    }

    fn size(&self) -> Option<u64> {
        (**self).size()
    }
}

/// Read until `buf` is full or the reader reports end of stream.
pub(crate) fn fill_buf<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Rewindable source over `Read + Seek`.
///
/// The length is measured once, from the reader's position at construction
/// (the origin) to its end. `rewind` seeks back to the origin.
#[derive(Debug)]
pub struct SeekSource<R> {
    inner: R,
    origin: u64,
    len: u64,
    consumed: u64,
}

impl<R: Read + Seek> SeekSource<R> {
    pub fn new(mut inner: R) -> io::Result<Self> {
        let origin = inner.stream_position()?;
        let end = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(origin))?;
        Ok(Self {
            inner,
            origin,
            len: end.saturating_sub(origin),
            consumed: 0,
        })
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<T: AsRef<[u8]>> SeekSource<Cursor<T>> {
    /// In-memory source over a byte buffer.
    pub fn from_bytes(bytes: T) -> Self {
        let len = bytes.as_ref().len() as u64;
        Self {
            inner: Cursor::new(bytes),
            origin: 0,
            len,
            consumed: 0,
        }
    }
}

impl<R: Read + Seek> ByteSource for SeekSource<R> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = fill_buf(&mut self.inner, buf)?;
        self.consumed += n as u64;
        if n < buf.len() {
            // shorter than measured: trust the reader
            self.len = self.consumed;
        }
        Ok(n)
    }

    fn eof(&self) -> bool {
        self.consumed >= self.len
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(self.origin))?;
        self.consumed = 0;
        Ok(())
    }

    fn size(&self) -> Option<u64> {
        Some(self.len)
    }
}

/// Forward-only source over a plain `Read`.
///
/// End of stream is only learned from a short read, and `rewind` fails with
/// [`io::ErrorKind::Unsupported`].
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    exhausted: bool,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            exhausted: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.exhausted {
            return Ok(0);
        }
        let n = fill_buf(&mut self.inner, buf)?;
        if n < buf.len() {
            self.exhausted = true;
        }
        Ok(n)
    }

    fn eof(&self) -> bool {
        self.exhausted
    }

    fn rewind(&mut self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "forward-only source cannot be rewound",
        ))
    }
}
