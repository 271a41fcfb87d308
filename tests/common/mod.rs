//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docdex::SearchIndex;

// Re-export canonical test utilities from docdex::testing
pub use docdex::testing::{colors_fixture, make_entry, make_raw, synthetic_corpus};

/// A Documenter-style index payload, exactly as it ships next to the site's
/// pages: a JS assignment wrapping the record array.
pub const DOCS_PAYLOAD: &str = r#"var documenterSearchIndex = {"docs": [

{
    "location": "index.html#",
    "page": "Introduction",
    "title": "Introduction",
    "category": "page",
    "text": ""
},

{
    "location": "index.html#Introduction-1",
    "page": "Introduction",
    "title": "Introduction",
    "category": "section",
    "text": "This library provides a wide array of functions for dealing with color. Support is provided for color differences, white balance, and colormaps."
},

{
    "location": "colorspaces.html#Converting-colors-1",
    "page": "Colorspaces",
    "title": "Converting colors",
    "category": "section",
    "text": "Depending on the source and destination colorspace, conversion may be lossy."
},

{
    "location": "colordifferences.html#Colors.colordiff",
    "page": "Color Differences",
    "title": "Colors.colordiff",
    "category": "function",
    "text": "colordiff(a::Color, b::Color) Evaluate the CIEDE2000 color difference formula."
},

{
    "location": "colormaps.html#Colors.colormap",
    "page": "Colormaps",
    "title": "Colors.colormap",
    "category": "function",
    "text": "colormap(cname::String [, N::Int=100]) Returns a predefined sequential or diverging colormap computed using the colormap generation function."
},

{
    "location": "colormaps.html#Colors.whitebalance",
    "page": "Colormaps",
    "title": "Colors.whitebalance",
    "category": "function",
    "text": "whitebalance(c::Color, src_white::Color, ref_white::Color) Whitebalance a color by adjusting its white point."
}

]};"#;

/// Load the Documenter-style fixture payload.
pub fn docs_index() -> SearchIndex {
    SearchIndex::from_json(DOCS_PAYLOAD).expect("fixture payload is valid")
}

/// Locations of the search hits for `query`, in rank order.
pub fn hit_locations(index: &SearchIndex, query: &str, limit: usize) -> Vec<String> {
    docdex::search(index, query, limit)
        .iter()
        .map(|r| index.entry(r.entry).location.clone())
        .collect()
}
