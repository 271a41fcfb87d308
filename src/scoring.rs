//! Scoring functions for search results.
//!
//! # INVARIANT: FIELD_WEIGHT_DOMINANCE
//!
//! The weights must satisfy `Title > Category > Page > Text`, and the prefix
//! multiplier must stay within `(0, 1)` so a prefix match never outranks an
//! exact match in the same field.
//!
//! The 8:4:2:1 ratios and the 0.5 prefix discount are tunable design
//! parameters, not a compatibility contract. Tests assert the ordering
//! properties, not the exact constants, so retuning only requires the
//! hierarchy to survive.

use crate::types::Field;

/// Weight of a title-field match.
pub const TITLE_WEIGHT: f64 = 8.0;
/// Weight of a category-field match.
pub const CATEGORY_WEIGHT: f64 = 4.0;
/// Weight of a page-name match.
pub const PAGE_WEIGHT: f64 = 2.0;
/// Weight of a body-text match.
pub const TEXT_WEIGHT: f64 = 1.0;

/// Discount applied when the index token merely starts with the query token.
pub const PREFIX_MULTIPLIER: f64 = 0.5;

/// How a query token matched an index token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Index token equals the query token.
    Exact,
    /// Index token starts with the query token but is longer.
    Prefix,
}

impl MatchKind {
    pub fn multiplier(self) -> f64 {
        match self {
            MatchKind::Exact => 1.0,
            MatchKind::Prefix => PREFIX_MULTIPLIER,
        }
    }
}

/// Base weight for a field.
///
/// Hierarchy: Title (8) > Category (4) > Page (2) > Text (1). Symbol-name
/// and categorical matches are privileged over incidental body-text hits.
pub fn field_weight(field: Field) -> f64 {
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Category => CATEGORY_WEIGHT,
        Field::Page => PAGE_WEIGHT,
        Field::Text => TEXT_WEIGHT,
    }
}

/// Score contribution of one posting for one matched query token:
/// `weight(field) × matchKind × frequency`.
pub fn contribution(field: Field, kind: MatchKind, freq: u32) -> f64 {
    field_weight(field) * kind.multiplier() * f64::from(freq)
}
