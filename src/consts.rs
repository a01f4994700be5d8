//! # Constants
//!
//! This module defines the fixed parameters of the media blob construction:
//! AES block geometry, the truncated tag length, and the layout of the
//! HKDF-SHA256 expansion.

/// AES block size in bytes. Every ciphertext is a whole number of blocks.
pub const BLOCK_SIZE: usize = 16;

/// Length of the truncated HMAC-SHA256 tag appended to every encrypted blob.
pub const MAC_TAG_LEN: usize = 10;

/// Length of the root (media) key fed into HKDF.
pub const ROOT_KEY_LEN: usize = 32;

/// Total length of the HKDF-SHA256 expansion.
///
/// Sliced as `iv = [0, 16)`, `cipherKey = [16, 48)`, `macKey = [48, 80)`,
/// `refKey = [80, 112)`.
pub const EXPANDED_KEY_LEN: usize = 112;

pub const IV_LEN: usize = 16;
pub const CIPHER_KEY_LEN: usize = 32;
pub const MAC_KEY_LEN: usize = 32;
pub const REF_KEY_LEN: usize = 32;

/// Chunk size used by the one-shot helpers when pumping a codec into a writer.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
