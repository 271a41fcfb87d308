//! Snippet extraction: the matched context shown under each result.
//!
//! The builder finds the first query-token occurrence in the entry's body,
//! cuts a character-bounded window of *raw* (un-normalized) text around it,
//! and reports match positions as byte ranges into the returned window.
//! Rendering is the caller's problem; no markup is embedded here, so the
//! same snippet works for a terminal, HTML, or anything else.
//!
//! Extraction never fails: no match degrades to a window at the start of
//! the text, and empty text yields an empty snippet.

use crate::tokenize::{tokenize, Token};
use crate::types::IndexEntry;

/// Marker prepended/appended when the window is truncated.
pub const ELLIPSIS: &str = "…";

/// A bounded excerpt of an entry's body with highlight ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Raw text window, possibly wrapped in [`ELLIPSIS`] markers.
    pub text: String,
    /// Byte ranges `(start, end)` into `text` covering matched tokens.
    pub highlights: Vec<(usize, usize)>,
}

impl Snippet {
    pub fn empty() -> Self {
        Snippet {
            text: String::new(),
            highlights: Vec::new(),
        }
    }
}

/// Extract a snippet of at most `max_len` characters from `entry.text`.
///
/// `query_terms` are normalized query tokens (the same ones the engine
/// matched on); a body token matches if it equals a term or starts with it.
/// The window is centered on the first matched token, or anchored at the
/// start of the text when nothing matches. Ellipsis markers are added on
/// top of the `max_len` budget when the window is truncated.
pub fn snippet(entry: &IndexEntry, query_terms: &[String], max_len: usize) -> Snippet {
    let raw = entry.text.as_str();
    if raw.is_empty() || max_len == 0 {
        return Snippet::empty();
    }

    // Char boundary table: boundaries[i] is the byte offset of char i.
    let mut boundaries: Vec<usize> = raw.char_indices().map(|(i, _)| i).collect();
    boundaries.push(raw.len());
    let total_chars = boundaries.len() - 1;

    let tokens = tokenize(raw);
    let matched: Vec<&Token> = tokens
        .iter()
        .filter(|t| {
            query_terms
                .iter()
                .any(|q| t.text == *q || t.text.starts_with(q.as_str()))
        })
        .collect();

    // Anchor on the first match; fall back to the start of the text.
    let window_start_char = match matched.first() {
        Some(first) => {
            let anchor_char = char_of_byte(&boundaries, first.start);
            let centered = anchor_char.saturating_sub(max_len / 2);
            centered.min(total_chars.saturating_sub(max_len))
        }
        None => 0,
    };
    let window_end_char = (window_start_char + max_len).min(total_chars);

    let win_start = boundaries[window_start_char];
    let win_end = boundaries[window_end_char];

    let leading = window_start_char > 0;
    let trailing = window_end_char < total_chars;

    let mut text = String::with_capacity(win_end - win_start + 2 * ELLIPSIS.len());
    if leading {
        text.push_str(ELLIPSIS);
    }
    text.push_str(&raw[win_start..win_end]);
    if trailing {
        text.push_str(ELLIPSIS);
    }

    let offset = if leading { ELLIPSIS.len() } else { 0 };
    let highlights: Vec<(usize, usize)> = matched
        .iter()
        .filter(|t| t.start >= win_start && t.end <= win_end)
        .map(|t| (offset + t.start - win_start, offset + t.end - win_start))
        .collect();

    Snippet { text, highlights }
}

fn char_of_byte(boundaries: &[usize], byte: usize) -> usize {
    boundaries.partition_point(|&b| b <= byte) - 1
}
