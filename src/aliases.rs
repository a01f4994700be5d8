//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret buffers built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every alias zeroizes on drop and requires an explicit `.expose_secret()` or
//! `.expose_secret_mut()` to reach the bytes.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - keyed hash behind the truncated media tag
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - generic secure stack buffer for any size `N`
//!
//! ### Semantic Fixed-Size Types
//! - [`RootKey32`] - 32-byte media (root) key supplied by the caller
//! - [`ExpandedKey112`] - raw HKDF-SHA256 expansion
//! - [`Iv16`] - CBC initialization vector, also the MAC seed
//! - [`Aes256Key32`] - AES-256 cipher key
//! - [`HmacKey32`] - HMAC-SHA256 key
//! - [`RefKey32`] - reserved reference key (derived, never used by the codecs)
//! - [`Block16`] - one AES block (CBC feedback register)

use hmac::Hmac;
use sha2::Sha256;

use crate::consts::MAC_TAG_LEN;

pub type HmacSha256 = Hmac<Sha256>;

pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type RootKey32 = SpanBuffer<32>;
pub type ExpandedKey112 = SpanBuffer<112>;
pub type Iv16 = SpanBuffer<16>;
pub type Aes256Key32 = SpanBuffer<32>;
pub type HmacKey32 = SpanBuffer<32>;
pub type RefKey32 = SpanBuffer<32>;
pub type Block16 = SpanBuffer<16>; // one AES block

/// Truncated tag as it appears on the wire. Public data, not a secret.
pub type MacTag10 = [u8; MAC_TAG_LEN];
