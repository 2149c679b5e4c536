//! Error types for the fallible edges of the casemark API.
//!
//! The core transformation is total: [`crate::encode`] and [`crate::decode`]
//! cannot fail on any input. Errors only surface when constructing a
//! [`crate::WordTokenizer`] from a custom pattern, or when strict decoding
//! refuses to drop a dangling marker.

use thiserror::Error;

/// Errors produced by tokenizer construction or strict decoding.
#[derive(Error, Debug)]
pub enum CasemarkError {
    /// A custom token pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Strict decoding found a marker at the end of the stream with no token
    /// to apply it to. Tolerant [`crate::decode`] drops these silently.
    #[error("dangling casing marker {marker:?} at end of stream")]
    DanglingMarker {
        /// The reserved glyph that was left pending.
        marker: &'static str,
    },
}

/// Convenience alias used throughout casemark-core.
pub type Result<T> = std::result::Result<T, CasemarkError>;
