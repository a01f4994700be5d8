//! src/buffer.rs
//! FIFO byte buffer used for the overflow and for the decrypt look-ahead window.
//!
//! Invariant: the live bytes are `bytes[head..]`, in stream order. Bytes before
//! `head` have been handed out and are reclaimed lazily, once they make up at
//! least half of the allocation, so `take` never shifts the whole buffer per call.
//!
//! The codecs keep it small: internal pulls are sized from the caller's request,
//! so the overflow never holds more than one pull's surplus (under one block
//! past the request, plus the tag on the last pull of an encrypt stream).

#[derive(Debug, Default)]
pub struct OverflowBuffer {
    bytes: Vec<u8>,
    head: usize,
}

impl OverflowBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() - self.head
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.compact();
        self.bytes.extend_from_slice(data);
    }

    /// Pop up to `n` bytes from the front.
    pub fn take(&mut self, n: usize) -> Vec<u8> {
        let n = n.min(self.len());
        let out = self.bytes[self.head..self.head + n].to_vec();
        self.head += n;
        if self.head == self.bytes.len() {
            self.clear();
        }
        out
    }

    /// Pop everything.
    pub fn take_all(&mut self) -> Vec<u8> {
        let out = self.bytes.split_off(self.head);
        self.clear();
        out
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.head = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[self.head..]
    }

    fn compact(&mut self) {
        if self.head > 0 && self.head * 2 >= self.bytes.len() {
            self.bytes.drain(..self.head);
            self.head = 0;
        }
    }
}
