//! Text normalization and tokenization.
//!
//! One tokenizer for everything: entry fields and user queries go through the
//! same function, so a query token can only ever miss if the text genuinely
//! lacks it. The function is pure and total; unsupported characters are just
//! separators.
//!
//! Rules: case-fold to lowercase, split on any run of non-alphanumeric
//! characters (`_` included, it is not alphanumeric), discard zero-length
//! tokens, preserve order and repetition. Repetition encodes term frequency.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// A normalized word unit with its byte range in the raw text.
///
/// `text` is the normalized form used for matching; `start..end` addresses
/// the original, un-normalized field value so the snippet builder can slice
/// raw text around a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Word boundary detection: checks if character is a separator.
#[inline]
fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Normalize a string for matching: lowercase, strip diacritics, collapse
/// whitespace.
///
/// This lets ASCII queries hit accented text: "café" → "cafe",
/// "naïve" → "naive".
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Tokenize a field value into normalized tokens with raw byte ranges.
///
/// Never fails. A word whose normalized form is empty (pure combining
/// marks) is discarded like any other zero-length token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    let mut byte_offset = 0;

    while i < chars.len() {
        // Skip separators
        while i < chars.len() && is_separator(chars[i]) {
            byte_offset += chars[i].len_utf8();
            i += 1;
        }

        if i >= chars.len() {
            break;
        }

        let word_start = byte_offset;
        let word_char_start = i;

        while i < chars.len() && !is_separator(chars[i]) {
            byte_offset += chars[i].len_utf8();
            i += 1;
        }

        let word: String = chars[word_char_start..i].iter().collect();
        let normalized = normalize(&word);

        if !normalized.is_empty() {
            tokens.push(Token {
                text: normalized,
                start: word_start,
                end: byte_offset,
            });
        }
    }

    tokens
}

/// Tokenize and keep only the normalized strings. Query-side convenience.
pub fn tokenize_terms(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}
