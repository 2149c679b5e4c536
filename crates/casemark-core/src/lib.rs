//! # casemark-core
//!
//! Reversible casing normalization for lowercase-token NLP pipelines.
//!
//! Text models are usually trained on lowercase tokens, but throwing casing
//! away loses information the output side often needs back. casemark encodes
//! casing as explicit in-stream marker tokens (`⇧` for all-caps, `↑` for
//! capitalized) placed immediately before the lowercased word they govern, so
//! a model sees a pure lowercase stream while the original casing stays
//! recoverable.
//!
//! ## Quick start
//!
//! ```rust
//! use casemark_core::{encode, decode};
//!
//! let marked = encode("Hello WORLD");
//! assert_eq!(marked, "↑ hello ⇧ world");
//!
//! // Markers decode back onto the next real token.
//! assert_eq!(decode(&marked), "Hello WORLD");
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — text → marked lowercase stream
//! - [`decoder`] — marked stream → text with casing restored
//! - [`casing`] — per-token casing classification
//! - [`marker`] — the reserved marker glyphs
//! - [`tokenizer`] — the word-tokenizer seam ([`Tokenize`] + [`WordTokenizer`])
//! - [`error`] — error types for the fallible edges (strict decoding, custom
//!   token patterns)

pub mod casing;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod marker;
pub mod tokenizer;

pub use casing::Casing;
pub use decoder::{decode, decode_strict};
pub use encoder::{encode, encode_with};
pub use error::CasemarkError;
pub use tokenizer::{Tokenize, WordTokenizer};
