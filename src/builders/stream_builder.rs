//! src/builders/stream_builder.rs
//! Codec configuration: root key + media type

use std::fmt;

use crate::aliases::RootKey32;
use crate::consts::ROOT_KEY_LEN;
use crate::crypto::keys::KeyMaterial;
use crate::decryptor::DecryptStream;
use crate::encryptor::EncryptStream;
use crate::error::MediaCryptError;
use crate::media::MediaType;
use crate::source::ByteSource;

/// Configuration shared by every codec opened for one media object.
///
/// # Thread Safety
///
/// The builder holds no mutable state; codecs it opens are independent of each
/// other and of the builder.
///
/// # Example
///
/// ```
/// use wamedia_rs::{MediaType, SeekSource, StreamBuilder};
///
/// let builder = StreamBuilder::new([7u8; 32], MediaType::Document);
/// let mut encryptor = builder.encryptor(SeekSource::from_bytes(b"report.pdf bytes".to_vec()))?;
/// let blob = encryptor.read(1 << 20)?;
///
/// let mut decryptor = builder.decryptor(SeekSource::from_bytes(blob))?;
/// assert_eq!(decryptor.read(1 << 20)?, b"report.pdf bytes");
/// # Ok::<(), wamedia_rs::MediaCryptError>(())
/// ```
pub struct StreamBuilder {
    root_key: RootKey32,
    media_type: MediaType,
}

impl StreamBuilder {
    #[must_use]
    pub fn new(root_key: impl Into<[u8; ROOT_KEY_LEN]>, media_type: MediaType) -> Self {
        Self {
            root_key: RootKey32::new(root_key.into()),
            media_type,
        }
    }

    /// Build from a key of unchecked length, e.g. one decoded from a message.
    pub fn from_slice(root_key: &[u8], media_type: MediaType) -> Result<Self, MediaCryptError> {
        let key: [u8; ROOT_KEY_LEN] = root_key
            .try_into()
            .map_err(|_| MediaCryptError::InvalidKeyLength(root_key.len()))?;
        Ok(Self::new(key, media_type))
    }

    /// Fresh random root key, for uploading new media.
    #[cfg(feature = "rand")]
    pub fn random(media_type: MediaType) -> Result<Self, MediaCryptError> {
        Ok(Self {
            root_key: crate::crypto::rng::generate_root_key()?,
            media_type,
        })
    }

    #[must_use]
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    /// Set the media type from a label or short name.
    pub fn with_media_label(self, label: &str) -> Result<Self, MediaCryptError> {
        Ok(self.with_media_type(label.parse()?))
    }

    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// The root key, e.g. to hand to the recipient alongside the blob.
    #[must_use]
    pub fn root_key(&self) -> &RootKey32 {
        &self.root_key
    }

    pub fn key_material(&self) -> Result<KeyMaterial, MediaCryptError> {
        KeyMaterial::derive(&self.root_key, self.media_type)
    }

    pub fn encryptor<S: ByteSource>(&self, source: S) -> Result<EncryptStream<S>, MediaCryptError> {
        EncryptStream::with_keys(source, self.key_material()?)
    }

    pub fn decryptor<S: ByteSource>(&self, source: S) -> Result<DecryptStream<S>, MediaCryptError> {
        DecryptStream::with_keys(source, self.key_material()?)
    }
}

impl fmt::Debug for StreamBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamBuilder")
            .field("root_key", &"[REDACTED]")
            .field("media_type", &self.media_type)
            .finish()
    }
}
