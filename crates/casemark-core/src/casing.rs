//! Per-token casing classification.
//!
//! Classification drives the encoder's marker emission. The rules mirror the
//! usual string-casing predicates: a token is "lowercase" or "uppercase" when
//! it has at least one cased character and every cased character agrees;
//! caseless-but-alphabetic tokens (CJK scripts, for example) are neither, and
//! fall through to [`Casing::Mixed`].

/// The casing shape of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Every cased character is lowercase ("hello").
    Lower,
    /// Every cased character is uppercase ("HELLO", and single letters like "A").
    AllCaps,
    /// First character uppercase, remainder lowercase ("Hello").
    Capitalized,
    /// Any other pattern: interior capitals ("McDonald") or no cased
    /// characters at all. Encodes with the same marker as [`Casing::Capitalized`].
    Mixed,
    /// Contains at least one non-letter character ("3.14", "don't", "!"),
    /// or is empty. Passes through the encoder lowercased, with no marker.
    NonAlphabetic,
}

impl Casing {
    /// Classify a token.
    ///
    /// ```rust
    /// use casemark_core::Casing;
    ///
    /// assert_eq!(Casing::of("hello"), Casing::Lower);
    /// assert_eq!(Casing::of("HELLO"), Casing::AllCaps);
    /// assert_eq!(Casing::of("Hello"), Casing::Capitalized);
    /// assert_eq!(Casing::of("McDonald"), Casing::Mixed);
    /// assert_eq!(Casing::of("3.14"), Casing::NonAlphabetic);
    /// ```
    pub fn of(token: &str) -> Casing {
        if token.is_empty() || !token.chars().all(char::is_alphabetic) {
            return Casing::NonAlphabetic;
        }
        if is_all_lower(token) {
            return Casing::Lower;
        }
        if is_all_upper(token) {
            return Casing::AllCaps;
        }
        // Char-iterator based: a one-letter token never reaches here (it is
        // either Lower or AllCaps), and the remainder probe cannot go out of
        // bounds on anything shorter than two chars.
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            if first.is_uppercase() && is_all_lower(chars.as_str()) {
                return Casing::Capitalized;
            }
        }
        Casing::Mixed
    }
}

/// At least one cased character, and no uppercase ones.
fn is_all_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}

/// At least one cased character, and no lowercase ones.
fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}
