//! Media types and their HKDF info labels.
//!
//! The label is the only thing that separates the keys of an image from the keys
//! of an audio clip derived from the same root key.

use std::fmt;
use std::str::FromStr;

use crate::error::MediaCryptError;

/// One of the four fixed key contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Image,
    Audio,
    Video,
    Document,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::Image,
        MediaType::Audio,
        MediaType::Video,
        MediaType::Document,
    ];

    /// HKDF `info` label for this media type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MediaType::Image => "WhatsApp Image Keys",
            MediaType::Audio => "WhatsApp Audio Keys",
            MediaType::Video => "WhatsApp Video Keys",
            MediaType::Document => "WhatsApp Document Keys",
        }
    }

    /// Short lowercase name (`image`, `audio`, `video`, `document`).
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
            MediaType::Document => "document",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MediaType {
    type Err = MediaCryptError;

    /// Accepts the exact HKDF label or the short name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|mt| s == mt.label() || s.eq_ignore_ascii_case(mt.short_name()))
            .ok_or_else(|| MediaCryptError::InvalidMediaType(s.to_string()))
    }
}

impl TryFrom<&str> for MediaType {
    type Error = MediaCryptError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
