//! Codec lifecycle.
//!
//! ```text
//! INIT ──read──▶ STREAMING ──last pull──▶ EXHAUSTED
//!   │                │
//!   └──────error─────┴──────────▶ FAILED
//! ```
//!
//! `rewind()` returns any state to INIT. FAILED is sticky: every later `read()`
//! raises an equivalent error instead of resuming from a corrupted chain.

use std::io;

use crate::error::MediaCryptError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamState {
    /// Chain state at its reset values, nothing delivered yet.
    Init,
    /// At least one `read()` has made progress and the source has more.
    Streaming,
    /// Source drained and the tag validated (decrypt) or emitted (encrypt).
    /// Remaining buffered bytes can still be read.
    Exhausted,
    Failed(Failure),
}

/// What moved a codec to [`StreamState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    SignatureMismatch,
    Cipher(String),
    Io(io::ErrorKind, String),
}

impl Failure {
    pub(crate) fn from_error(err: &MediaCryptError) -> Self {
        match err {
            MediaCryptError::SignatureVerification => Failure::SignatureMismatch,
            MediaCryptError::Io(e) => Failure::Io(e.kind(), e.to_string()),
            other => Failure::Cipher(other.to_string()),
        }
    }

    /// Rebuild the error to raise again on the next `read()`.
    #[must_use]
    pub fn to_error(&self) -> MediaCryptError {
        match self {
            Failure::SignatureMismatch => MediaCryptError::SignatureVerification,
            Failure::Cipher(msg) => MediaCryptError::Cipher(msg.clone()),
            Failure::Io(kind, msg) => MediaCryptError::Io(io::Error::new(*kind, msg.clone())),
        }
    }
}
