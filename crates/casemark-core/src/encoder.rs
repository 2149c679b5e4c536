//! Encoder — text in, marked lowercase stream out.
//!
//! Each alphabetic token is classified by [`Casing::of`] and emitted as its
//! lowercase form, preceded by a marker when the casing was not already
//! lowercase:
//!
//! - `hello` → `hello`
//! - `HELLO` → `⇧ hello`
//! - `Hello` → `↑ hello`
//! - `McDonald` → `↑ mcdonald` (interior capitals collapse; see [`crate::marker`])
//! - `3.14`, `don't`, `!` → lowercased passthrough, no marker
//!
//! The output is the token/marker sequence joined with single ASCII spaces.
//!
//! # Example
//! ```
//! use casemark_core::encode;
//!
//! assert_eq!(encode("McDonald had FUN"), "↑ mcdonald had ⇧ fun");
//! assert_eq!(encode("already lowercase"), "already lowercase");
//! ```

use crate::casing::Casing;
use crate::marker;
use crate::tokenizer::{Tokenize, WordTokenizer};

/// Encode `text` into a marked lowercase stream using the default
/// [`WordTokenizer`].
///
/// Pure and total: no input can make this fail.
pub fn encode(text: &str) -> String {
    encode_with(&WordTokenizer::new(), text)
}

/// Encode `text` using any [`Tokenize`] implementation.
///
/// The tokenizer decides what a token is; this function only decides how
/// each token's casing is recorded. Tokens must not contain spaces, or the
/// decoder's space-split will see them as several words.
pub fn encode_with<T: Tokenize + ?Sized>(tokenizer: &T, text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for token in tokenizer.tokenize(text) {
        match Casing::of(&token) {
            // Lowercased verbatim, regardless of its own casing. "ABC123"
            // comes out "abc123" with no marker: non-letter content makes a
            // token opaque to the casing protocol.
            Casing::NonAlphabetic => out.push(token.to_lowercase()),
            Casing::Lower => out.push(token),
            Casing::AllCaps => {
                out.push(marker::ALL_CAPS.to_string());
                out.push(token.to_lowercase());
            }
            Casing::Capitalized | Casing::Mixed => {
                out.push(marker::CAPITALIZED.to_string());
                out.push(token.to_lowercase());
            }
        }
    }
    out.join(" ")
}
