//! Parallel batch encryption and decryption (feature `batch-ops`).
//!
//! Each pair is an independent stream; they share only the root key and media type.

use rayon::prelude::*;
use std::io::{Read, Write};

use crate::aliases::RootKey32;
use crate::media::MediaType;
use crate::{decrypt, encrypt, MediaCryptError};

pub fn encrypt_batch<R, W>(
    batch: &mut [(R, W)],
    root_key: &RootKey32,
    media_type: MediaType,
) -> Result<(), MediaCryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| encrypt(src, dst, root_key, media_type).map(|_| ()))
}

/// Stops at the first failure; outputs of other pairs may already hold
/// unauthenticated plaintext and must be discarded by the caller.
pub fn decrypt_batch<R, W>(
    batch: &mut [(R, W)],
    root_key: &RootKey32,
    media_type: MediaType,
) -> Result<(), MediaCryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst)| decrypt(src, dst, root_key, media_type).map(|_| ()))
}
