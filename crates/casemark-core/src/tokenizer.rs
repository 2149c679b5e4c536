//! The word-tokenizer seam.
//!
//! Tokenization is an external collaborator, not part of the casing
//! transformation itself. The encoder only needs something function-shaped
//! that turns text into an ordered sequence of token strings, so the seam is
//! a one-method trait with a blanket impl for plain closures. The shipped
//! [`WordTokenizer`] is a regex-backed default that behaves like conventional
//! NLP word tokenizers: words and punctuation become separate tokens, while
//! interior `.`/`'`/`-` keep a token whole (`3.14`, `U.S.A`, `don't`).

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default token pattern: runs of word characters, optionally joined by an
/// interior dot, apostrophe, or hyphen, or else runs of other symbols.
const DEFAULT_PATTERN: &str = r"\w+(?:[.'\-]\w+)*|[^\w\s]+";

static DEFAULT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default token pattern compiles"));

/// Anything that splits text into an ordered sequence of tokens.
///
/// Implementations are assumed deterministic: the same input must always
/// produce the same token sequence, or the encode/decode pair loses its
/// round-trip property.
pub trait Tokenize {
    /// Split `text` into tokens, in order of appearance.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Plain functions are tokenizers too.
///
/// ```rust
/// use casemark_core::encode_with;
///
/// let whitespace = |text: &str| -> Vec<String> {
///     text.split_whitespace().map(str::to_string).collect()
/// };
/// assert_eq!(encode_with(&whitespace, "GOOD morning"), "⇧ good morning");
/// ```
impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// The default regex-backed word tokenizer.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    /// Tokenizer with the default word pattern.
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_REGEX.clone(),
        }
    }

    /// Tokenizer with a custom token pattern.
    ///
    /// Tokens are the non-overlapping matches of the pattern; everything
    /// between matches (typically whitespace) is discarded.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
