//! In-memory search engine for static documentation site indexes.
//!
//! A documentation generator emits one searchable record per documentable
//! location (page, section, function, type, ...). This crate loads that
//! record sequence, validates it, builds an inverted index over it once,
//! and answers ranked queries with snippet extraction, all in memory and
//! read-only after load.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  types.rs  │────▶│  index.rs    │────▶│  search.rs  │────▶│ snippet.rs  │
//! │ (IndexEntry│     │ (load,       │     │ (ranked     │     │ (windows +  │
//! │  Posting)  │     │  validate)   │     │  results)   │     │  highlights)│
//! └────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        │                  │                    │
//!        ▼                  ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            tokenize.rs / inverted.rs / scoring.rs    │
//! │  (one normalizer for fields and queries; postings    │
//! │   per (token, field); Title > Category > Page > Text)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The index is built once at load and never mutated, so a `SearchIndex`
//! can be shared across any number of concurrent readers without locks.
//!
//! # Usage
//!
//! ```
//! use docdex::{search, snippet, SearchIndex};
//!
//! let payload = r#"{"docs": [
//!     {"location": "colors.html#colormap", "page": "Colormaps",
//!      "title": "colormap", "category": "function",
//!      "text": "Returns a predefined sequential colormap."}
//! ]}"#;
//!
//! let index = SearchIndex::from_json(payload)?;
//! let results = search(&index, "color", 10);
//! assert_eq!(results.len(), 1);
//!
//! let entry = index.entry(results[0].entry);
//! let excerpt = snippet(entry, &docdex::tokenize_terms("color"), 80);
//! assert!(excerpt.text.contains("colormap"));
//! # Ok::<(), docdex::MalformedIndex>(())
//! ```

mod error;
mod index;
mod inverted;
mod scoring;
mod search;
mod snippet;
pub mod testing;
mod tokenize;
mod types;
pub mod viewport;

// Re-exports for public API
pub use error::MalformedIndex;
pub use index::parse_raw_entries;
pub use inverted::{build_inverted_index, build_inverted_index_parallel};
pub use scoring::{
    contribution, field_weight, MatchKind, CATEGORY_WEIGHT, PAGE_WEIGHT, PREFIX_MULTIPLIER,
    TEXT_WEIGHT, TITLE_WEIGHT,
};
pub use search::search;
pub use snippet::{snippet, Snippet, ELLIPSIS};
pub use tokenize::{normalize, tokenize, tokenize_terms, Token};
pub use types::{
    Category, Field, IndexEntry, InvertedIndex, Posting, PostingList, RawEntry, SearchIndex,
    SearchResult,
};
