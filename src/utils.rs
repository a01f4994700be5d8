// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by both CBC directions in [`ChainState`](crate::crypto::chain::ChainState).
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Callers only
/// pass whole blocks.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Pad the final partial block (0 to 15 bytes) to a full PKCS#7 block.
///
/// An empty tail becomes a whole block of `0x10`, so padding is never skipped.
///
/// # Panics
///
/// Panics if `tail` is 16 bytes or longer.
#[inline]
#[must_use]
pub fn pkcs7_pad_block(tail: &[u8]) -> [u8; BLOCK_SIZE] {
    assert!(tail.len() < BLOCK_SIZE, "PKCS#7 tail must be shorter than a block");
    let pad = (BLOCK_SIZE - tail.len()) as u8;
    let mut block = [pad; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block
}

/// Length of `block` with valid PKCS#7 padding removed.
///
/// Returns `None` when the padding is invalid: last byte outside `1..=16`, or
/// fewer than `P` trailing bytes equal to `P`.
#[inline]
#[must_use]
pub fn pkcs7_unpadded_len(block: &[u8]) -> Option<usize> {
    let &pad = block.last()?;
    let pad_len = pad as usize;
    if pad == 0 || pad_len > BLOCK_SIZE || pad_len > block.len() {
        return None;
    }
    let start = block.len() - pad_len;
    block[start..]
        .iter()
        .all(|&b| b == pad)
        .then_some(start)
}
