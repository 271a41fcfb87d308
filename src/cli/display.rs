//! Terminal display utilities for the docdex CLI.
//!
//! Plain ANSI, no palettes: bold for matched terms, dim for locations and
//! snippets. Respects `NO_COLOR` and non-TTY pipelines, in which case the
//! output is the bare text and highlight ranges are simply not rendered.

use docdex::{Category, IndexEntry, SearchIndex, SearchResult, Snippet};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if colors should be used (TTY detection).
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text.
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Render a snippet with its highlight ranges emboldened.
///
/// Ranges are byte offsets into the snippet text and never overlap, so a
/// single left-to-right pass suffices.
pub fn render_snippet(snippet: &Snippet) -> String {
    if !use_colors() || snippet.highlights.is_empty() {
        return snippet.text.clone();
    }

    let mut out = String::with_capacity(snippet.text.len() + 8 * snippet.highlights.len());
    let mut cursor = 0;
    for &(start, end) in &snippet.highlights {
        out.push_str(&snippet.text[cursor..start]);
        out.push_str(BOLD);
        out.push_str(&snippet.text[start..end]);
        out.push_str(RESET);
        cursor = end;
    }
    out.push_str(&snippet.text[cursor..]);
    out
}

fn category_badge(category: &Category) -> String {
    let tag = category.as_str();
    if tag.is_empty() {
        String::new()
    } else {
        format!(" {}", color(YELLOW, &format!("[{}]", tag)))
    }
}

/// Print one ranked result with its snippet.
pub fn print_result(rank: usize, entry: &IndexEntry, result: &SearchResult, snippet: &Snippet) {
    println!(
        "{:>3}. {}{}  {}",
        rank,
        color(BOLD, &entry.title),
        category_badge(&entry.category),
        color(DIM, &format!("({:.1})", result.score)),
    );
    println!("     {}", color(CYAN, &entry.location));
    if !snippet.text.is_empty() {
        println!("     {}", render_snippet(snippet));
    }
}

/// Print corpus statistics for `inspect`.
pub fn print_stats(index: &SearchIndex) {
    let postings: usize = index
        .inverted()
        .terms
        .values()
        .map(|list| list.postings.len())
        .sum();

    println!("{}", color(BOLD, "Index statistics"));
    println!("  entries:    {}", index.len());
    println!("  vocabulary: {}", index.vocabulary().len());
    println!("  postings:   {}", postings);

    let mut by_category: Vec<(String, usize)> = {
        let mut counts = std::collections::HashMap::new();
        for entry in index.entries() {
            *counts
                .entry(entry.category.as_str().to_string())
                .or_insert(0usize) += 1;
        }
        counts.into_iter().collect()
    };
    by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!("  categories:");
    for (tag, count) in by_category {
        let label = if tag.is_empty() {
            "(uncategorized)"
        } else {
            tag.as_str()
        };
        println!("    {:<16} {}", label, count);
    }
}
