//! The building blocks of a documentation search index.
//!
//! These types define how raw index records, validated entries, and posting
//! lists fit together. The index is an *ordered* sequence: entry position is
//! the deterministic tie-break for equal-ranked results, so nothing here may
//! reorder entries after load.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **IndexEntry**: `location` is unique across the index. `page`, `title`,
//!   and `category` are always present (`category` may be the empty string,
//!   which means "uncategorized" and is distinct from absent).
//! - **Posting**: `entry < total_entries ∧ freq ≥ 1`.
//! - **PostingList**: postings sorted by `(entry, field)`, one posting per
//!   (entry, field) pair, `entry_freq` = number of unique entries.
//! - **SearchIndex**: immutable after [`load`](crate::SearchIndex::load);
//!   safe to share across concurrent readers without synchronization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// RAW INPUT
// =============================================================================

/// One record of the raw index file, before validation.
///
/// Required fields are `Option` so that [`load`](crate::SearchIndex::load)
/// can report *which* field is missing instead of failing inside serde.
/// `text` defaults to empty: pure navigation/anchor entries carry no body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub text: String,
}

// =============================================================================
// ENTRY TYPES
// =============================================================================

/// What kind of documentation location an entry points at.
///
/// The generator's vocabulary is open-ended: `page`, `section`, `function`,
/// `type`, ... coexist without a declared exhaustive list, so unknown tags
/// are preserved in [`Category::Other`] rather than rejected. The empty
/// string is a valid tag meaning "uncategorized".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Page,
    Section,
    Function,
    Type,
    Module,
    Macro,
    Constant,
    Keyword,
    /// Any tag not in the known set, preserved verbatim.
    Other(String),
}

impl Category {
    /// Parse a raw category tag. Never fails; unknown tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "page" => Category::Page,
            "section" => Category::Section,
            "function" => Category::Function,
            "type" => Category::Type,
            "module" => Category::Module,
            "macro" => Category::Macro,
            "constant" => Category::Constant,
            "keyword" => Category::Keyword,
            other => Category::Other(other.to_string()),
        }
    }

    /// The original tag string, round-tripping what the generator emitted.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Function => "function",
            Category::Type => "type",
            Category::Module => "module",
            Category::Macro => "macro",
            Category::Constant => "constant",
            Category::Keyword => "keyword",
            Category::Other(tag) => tag,
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Category::from_tag(&tag)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Which entry field a token came from.
///
/// Field determines scoring weight (see [`crate::scoring::field_weight`]):
/// title matches beat category matches beat page matches beat body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Category,
    Page,
    Text,
}

impl Field {
    /// All fields, in scoring-weight order.
    pub const ALL: [Field; 4] = [Field::Title, Field::Category, Field::Page, Field::Text];

    /// Lowercase string form, matching the serde convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Category => "category",
            Field::Page => "page",
            Field::Text => "text",
        }
    }
}

/// One validated, documentable location on the site.
///
/// `location` is an opaque locator (page path plus optional fragment); it is
/// only ever used for result linking, never parsed by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: Category,
    pub text: String,
}

impl IndexEntry {
    /// The raw value of one of the four searchable fields.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Category => self.category.as_str(),
            Field::Page => &self.page,
            Field::Text => &self.text,
        }
    }
}

// =============================================================================
// INVERTED INDEX TYPES
// =============================================================================

/// All occurrences of a token within one field of one entry.
///
/// Multiplicity is collapsed into `freq` (term frequency drives scoring);
/// positions live only in the raw text and are recovered by the snippet
/// builder when needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Index of the entry in the original load order.
    pub entry: usize,
    /// Field the token occurred in.
    pub field: Field,
    /// Number of occurrences in that field. Always ≥ 1.
    pub freq: u32,
}

/// All postings for a single token across the corpus.
///
/// Sorted by `(entry, field)` so contributing entries appear in index order,
/// not in discovery order. `entry_freq` caches the unique-entry count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingList {
    pub postings: Vec<Posting>,
    /// Number of unique entries containing this token.
    pub entry_freq: usize,
}

/// The inverted index: token → posting list.
///
/// O(1) exact token lookup via HashMap. Prefix lookup goes through the
/// sorted vocabulary on [`SearchIndex`] instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvertedIndex {
    pub terms: HashMap<String, PostingList>,
    pub total_entries: usize,
}

// =============================================================================
// THE INDEX
// =============================================================================

/// The complete, validated search index.
///
/// Built once by [`SearchIndex::load`](crate::SearchIndex::load), immutable
/// thereafter. Holds the ordered entry sequence, the derived inverted index,
/// and the sorted token vocabulary used for prefix candidate lookup.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    pub(crate) entries: Vec<IndexEntry>,
    pub(crate) inverted: InvertedIndex,
    pub(crate) vocabulary: Vec<String>,
}

impl SearchIndex {
    /// The entries, in original load order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Entry by position. Panics on out-of-range ids, which only search
    /// itself produces.
    pub fn entry(&self, id: usize) -> &IndexEntry {
        &self.entries[id]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The derived token → postings mapping.
    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    /// Every distinct token in the index, lexicographically sorted.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A ranked search hit.
///
/// `entry` indexes into [`SearchIndex::entries`]. Results come back in
/// descending score order; ties keep original index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub entry: usize,
    /// Accumulated relevance. Non-negative; zero-score entries are never
    /// returned.
    pub score: f64,
}
