//! Index loading and validation.
//!
//! `load` is the single entry point into a usable [`SearchIndex`]: it
//! validates the raw records, preserves their order exactly, and eagerly
//! builds the inverted index and vocabulary. After this the index is never
//! mutated again, so readers need no synchronization.
//!
//! The sibling `from_json` parser also accepts the generator's JS-assignment
//! form (`var documenterSearchIndex = {"docs": [...]};`), which is the shape
//! the index actually ships in next to the site's pages.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::MalformedIndex;
use crate::inverted::{build_inverted_index, build_inverted_index_parallel};
use crate::types::{Category, IndexEntry, RawEntry, SearchIndex};

/// Entry count above which the parallel map/reduce build pays off.
const PARALLEL_BUILD_MIN_ENTRIES: usize = 256;

/// Wrapper object form of the raw payload.
#[derive(Deserialize)]
struct Payload {
    docs: Vec<RawEntry>,
}

impl SearchIndex {
    /// Validate raw records and build the complete index.
    ///
    /// Fails with [`MalformedIndex`] on a duplicate `location` or a missing
    /// required field; an entry with empty `text` is valid. Input order is
    /// preserved end-to-end: it is the deterministic tie-break for
    /// equal-ranked results.
    pub fn load(raw: Vec<RawEntry>) -> Result<SearchIndex, MalformedIndex> {
        let entries = validate(raw)?;

        let inverted = if entries.len() >= PARALLEL_BUILD_MIN_ENTRIES {
            build_inverted_index_parallel(&entries)
        } else {
            build_inverted_index(&entries)
        };

        #[cfg(debug_assertions)]
        debug_assert!(crate::inverted::check_inverted_index_well_formed(
            &inverted
        ));

        let mut vocabulary: Vec<String> = inverted.terms.keys().cloned().collect();
        vocabulary.sort_unstable();

        Ok(SearchIndex {
            entries,
            inverted,
            vocabulary,
        })
    }

    /// Parse a raw index payload and load it.
    ///
    /// Accepts a JSON array of records, an object with a `docs` array, or
    /// the JS-assignment wrapper emitted by the documentation generator.
    pub fn from_json(payload: &str) -> Result<SearchIndex, MalformedIndex> {
        SearchIndex::load(parse_raw_entries(payload)?)
    }
}

fn validate(raw: Vec<RawEntry>) -> Result<Vec<IndexEntry>, MalformedIndex> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(raw.len());
    let mut entries = Vec::with_capacity(raw.len());

    for (id, record) in raw.into_iter().enumerate() {
        let location = require(record.location, id, "location")?;
        let page = require(record.page, id, "page")?;
        let title = require(record.title, id, "title")?;
        let category = require(record.category, id, "category")?;

        if let Some(&first) = seen.get(&location) {
            return Err(MalformedIndex::DuplicateLocation {
                location,
                first,
                second: id,
            });
        }
        seen.insert(location.clone(), id);

        entries.push(IndexEntry {
            location,
            page,
            title,
            category: Category::from_tag(&category),
            text: record.text,
        });
    }

    Ok(entries)
}

fn require(
    value: Option<String>,
    entry: usize,
    field: &'static str,
) -> Result<String, MalformedIndex> {
    value.ok_or(MalformedIndex::MissingField { entry, field })
}

/// Parse raw records out of any of the supported payload shapes.
pub fn parse_raw_entries(payload: &str) -> Result<Vec<RawEntry>, MalformedIndex> {
    let json = strip_js_assignment(payload);
    if json.trim_start().starts_with('[') {
        Ok(serde_json::from_str(json)?)
    } else {
        let payload: Payload = serde_json::from_str(json)?;
        Ok(payload.docs)
    }
}

/// Strip a leading `var <ident> =` (or `const`/`let`) and a trailing `;`
/// so the generator's `search_index.js` parses as plain JSON.
fn strip_js_assignment(payload: &str) -> &str {
    let trimmed = payload.trim();
    let rest = trimmed
        .strip_prefix("var ")
        .or_else(|| trimmed.strip_prefix("const "))
        .or_else(|| trimmed.strip_prefix("let "));

    if let Some(rest) = rest {
        if let Some(eq) = rest.find('=') {
            let ident = rest[..eq].trim();
            let is_ident = !ident.is_empty()
                && ident
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
            if is_ident {
                return rest[eq + 1..].trim().trim_end_matches(';').trim_end();
            }
        }
    }

    trimmed
}
