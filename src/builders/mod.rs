//! # Builders
//!
//! Builder patterns for configuring codecs.
//!
//! ## Modules
//!
//! - [`stream_builder`] - root key + media type, producing encryptors, decryptors, and key material
//!
//! ## Usage
//!
//! A builder validates its inputs once and can then open any number of codecs
//! over different sources with the same configuration.

pub mod stream_builder;
