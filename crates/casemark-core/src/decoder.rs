//! Decoder — marked lowercase stream in, text with casing restored.
//!
//! The decoder splits on single spaces and runs a two-flag state machine:
//! marker tokens set a pending flag and emit nothing; the next real token
//! consumes whatever is pending and both flags reset. `⇧` wins when both are
//! set. Markers with no following token are dropped by [`decode`] (defined
//! behavior, not an error), while [`decode_strict`] reports them.
//!
//! # Example
//! ```
//! use casemark_core::decode;
//!
//! assert_eq!(decode("↑ hello ⇧ world"), "Hello WORLD");
//! assert_eq!(decode("hello ↑"), "hello");
//! ```

use crate::error::{CasemarkError, Result};
use crate::marker;

/// Decode a marked stream, restoring casing on the tokens that follow
/// markers.
///
/// Total: stray or dangling markers degrade gracefully (dropped), and any
/// input that contains no markers passes through unchanged.
pub fn decode(text: &str) -> String {
    run(text).0
}

/// Decode a marked stream, failing on a marker left pending at end of
/// stream.
///
/// Useful when the input is supposed to be well-formed encoder output and a
/// dangling marker indicates upstream truncation.
pub fn decode_strict(text: &str) -> Result<String> {
    match run(text) {
        (out, None) => Ok(out),
        (_, Some(pending)) => Err(CasemarkError::DanglingMarker { marker: pending }),
    }
}

/// The shared flag machine. Returns the decoded text and the marker still
/// pending when the stream ended, if any.
fn run(text: &str) -> (String, Option<&'static str>) {
    let mut out: Vec<String> = Vec::new();
    let mut all_caps = false;
    let mut capitalized = false;

    for word in text.split(' ') {
        match word {
            marker::ALL_CAPS => all_caps = true,
            marker::CAPITALIZED => capitalized = true,
            _ => {
                out.push(apply(word, all_caps, capitalized));
                all_caps = false;
                capitalized = false;
            }
        }
    }

    let pending = if all_caps {
        Some(marker::ALL_CAPS)
    } else if capitalized {
        Some(marker::CAPITALIZED)
    } else {
        None
    };
    (out.join(" "), pending)
}

/// Apply pending casing flags to a single word.
fn apply(word: &str, all_caps: bool, capitalized: bool) -> String {
    if all_caps {
        word.to_uppercase()
    } else if capitalized {
        capitalize(word)
    } else {
        word.to_string()
    }
}

/// Uppercase the first character, leave the rest as-is. Words of one char or
/// fewer are uppercased entirely (at that length the two markers mean the
/// same thing).
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let rest = chars.as_str();
            if rest.is_empty() {
                word.to_uppercase()
            } else {
                let mut out = String::with_capacity(word.len());
                out.extend(first.to_uppercase());
                out.push_str(rest);
                out
            }
        }
    }
}
