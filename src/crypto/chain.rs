//! src/crypto/chain.rs
//! Per-stream CBC chaining state, one block at a time.
//!
//! Whole-buffer AES-256-CBC with `IV = iv` is reproduced exactly, but block by
//! block, so the MAC and arbitrary read sizes can interleave with the cipher:
//!
//! - decrypt: `P = D(C) ^ prev`, then `prev = C`
//! - encrypt: `C = E(P ^ prev)`, then `prev = C`
//!
//! The MAC always covers exactly `iv` plus every ciphertext block processed so far.

use aes::cipher::{BlockDecrypt, BlockEncrypt};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};

use secure_gate::{RevealSecret, RevealSecretMut};

use crate::aliases::{Block16, MacTag10};
use crate::consts::BLOCK_SIZE;
use crate::crypto::hmac::MacAccumulator;
use crate::crypto::keys::KeyMaterial;
use crate::error::MediaCryptError;
use crate::utils::xor_blocks;

pub struct ChainState {
    prev_block: Block16,
    mac: MacAccumulator,
    position: u64,
    blocks: u64,
}

impl ChainState {
    /// Fresh state: `prev = iv`, MAC seeded with `iv`, position 0.
    pub fn new(keys: &KeyMaterial) -> Result<Self, MediaCryptError> {
        Ok(Self {
            prev_block: Block16::new(*keys.iv()),
            mac: MacAccumulator::new(keys.mac_key(), keys.iv())?,
            position: 0,
            blocks: 0,
        })
    }

    pub fn reset(&mut self, keys: &KeyMaterial) -> Result<(), MediaCryptError> {
        *self = Self::new(keys)?;
        Ok(())
    }

    /// Decrypt one ciphertext block into `plaintext_out`, feeding the MAC first.
    #[inline]
    pub fn decrypt_block(
        &mut self,
        cipher: &Aes256Dec,
        ciphertext: &[u8],
        plaintext_out: &mut [u8],
    ) -> Result<(), MediaCryptError> {
        check_block(ciphertext)?;
        self.mac.update(ciphertext)?;

        let mut aes_block = *AesBlock::from_slice(ciphertext);
        cipher.decrypt_block(&mut aes_block);
        xor_blocks(
            aes_block.as_slice(),
            self.prev_block.expose_secret(),
            plaintext_out,
        );

        self.prev_block.expose_secret_mut().copy_from_slice(ciphertext);
        self.blocks += 1;
        Ok(())
    }

    /// Encrypt one plaintext block into `ciphertext_out` and feed the result to the MAC.
    #[inline]
    pub fn encrypt_block(
        &mut self,
        cipher: &Aes256Enc,
        plaintext: &[u8],
        ciphertext_out: &mut [u8],
    ) -> Result<(), MediaCryptError> {
        check_block(plaintext)?;

        let mut xored = Block16::new([0u8; BLOCK_SIZE]);
        xor_blocks(
            plaintext,
            self.prev_block.expose_secret(),
            xored.expose_secret_mut(),
        );
        let mut aes_block = AesBlock::from(*xored.expose_secret());
        cipher.encrypt_block(&mut aes_block);

        self.mac.update(aes_block.as_slice())?;
        ciphertext_out[..BLOCK_SIZE].copy_from_slice(aes_block.as_slice());
        self.prev_block
            .expose_secret_mut()
            .copy_from_slice(aes_block.as_slice());
        self.blocks += 1;
        Ok(())
    }

    /// Feed raw bytes to the MAC without touching the cipher.
    ///
    /// Only used for a trailing ciphertext fragment that is not block aligned,
    /// so the tag can still be checked before the shape error is reported.
    pub fn absorb(&mut self, bytes: &[u8]) -> Result<(), MediaCryptError> {
        self.mac.update(bytes)
    }

    pub fn finalize_tag(&mut self) -> Result<MacTag10, MediaCryptError> {
        self.mac.finalize_tag()
    }

    pub fn verify_tag(&mut self, tag: &[u8]) -> Result<(), MediaCryptError> {
        self.mac.verify(tag)
    }

    /// Bytes delivered to the caller since the last reset.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn advance(&mut self, delivered: usize) {
        self.position += delivered as u64;
    }

    /// Ciphertext blocks processed since the last reset.
    #[must_use]
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.mac.is_finalized()
    }
}

#[inline]
fn check_block(block: &[u8]) -> Result<(), MediaCryptError> {
    if block.len() != BLOCK_SIZE {
        return Err(MediaCryptError::Cipher(format!(
            "expected a {BLOCK_SIZE}-byte block, got {}",
            block.len()
        )));
    }
    Ok(())
}
