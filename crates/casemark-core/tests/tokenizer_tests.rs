//! Tests for the default word tokenizer and the `Tokenize` seam.

use casemark_core::{Tokenize, WordTokenizer};

fn tokens(text: &str) -> Vec<String> {
    WordTokenizer::new().tokenize(text)
}

// ============================================================================
// Default pattern
// ============================================================================

#[test]
fn splits_words_on_whitespace() {
    assert_eq!(tokens("hello brave world"), ["hello", "brave", "world"]);
}

#[test]
fn separates_trailing_punctuation() {
    assert_eq!(tokens("Hi!"), ["Hi", "!"]);
}

#[test]
fn groups_punctuation_runs() {
    assert_eq!(tokens("what?!"), ["what", "?!"]);
}

#[test]
fn keeps_decimal_numbers_whole() {
    assert_eq!(tokens("pi is 3.14"), ["pi", "is", "3.14"]);
}

#[test]
fn keeps_dotted_abbreviations_whole() {
    assert_eq!(tokens("U.S.A"), ["U.S.A"]);
}

#[test]
fn keeps_contractions_whole() {
    assert_eq!(tokens("don't stop"), ["don't", "stop"]);
}

#[test]
fn keeps_hyphenated_words_whole() {
    assert_eq!(tokens("well-known fact"), ["well-known", "fact"]);
}

#[test]
fn sentence_final_period_is_separate() {
    // The joining characters only glue word characters on both sides.
    assert_eq!(tokens("the end."), ["the", "end", "."]);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert_eq!(tokens(""), Vec::<String>::new());
}

#[test]
fn whitespace_only_yields_no_tokens() {
    assert_eq!(tokens(" \t\n "), Vec::<String>::new());
}

#[test]
fn unicode_words() {
    assert_eq!(tokens("École à Paris"), ["École", "à", "Paris"]);
}

// ============================================================================
// Custom patterns and the closure impl
// ============================================================================

#[test]
fn custom_pattern_letters_only() {
    let tok = WordTokenizer::with_pattern(r"\p{L}+").unwrap();
    assert_eq!(tok.tokenize("a1b2c3"), ["a", "b", "c"]);
}

#[test]
fn invalid_pattern_is_an_error() {
    let err = WordTokenizer::with_pattern("[").unwrap_err();
    assert!(err.to_string().contains("invalid token pattern"), "got: {err}");
}

#[test]
fn closures_implement_tokenize() {
    let splitter = |text: &str| -> Vec<String> {
        text.split(',').map(str::to_string).collect()
    };
    assert_eq!(splitter.tokenize("a,b,c"), ["a", "b", "c"]);
}

#[test]
fn default_is_the_standard_pattern() {
    let a = WordTokenizer::default().tokenize("Hello, world!");
    let b = tokens("Hello, world!");
    assert_eq!(a, b);
}
