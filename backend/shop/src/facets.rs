//! Facet Index Builder.
//!
//! Facets derive from the raw, unfiltered snapshot. Deriving them from the
//! display list instead would starve the controls: checking one breed would
//! shrink every other facet's option list.

use std::collections::BTreeSet;

use listings::{FacetField, Listing, FACET_FIELDS};
use serde::Serialize;

/// The category sentinel rendered as "All".
pub const ALL_CATEGORIES: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub field: FacetField,
    /// Distinct non-empty values, lexicographically sorted.
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FacetIndex {
    /// Always non-empty: the "All" sentinel first, then sorted distinct
    /// observed categories.
    pub categories: Vec<String>,
    /// Facets with zero observed values are omitted, never rendered with a
    /// lone "N/A" option.
    pub facets: Vec<Facet>,
}

pub fn build_facets(catalog: &[Listing]) -> FacetIndex {
    let mut categories: Vec<String> = catalog
        .iter()
        .map(|listing| listing.category.clone())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    categories.insert(0, ALL_CATEGORIES.to_string());

    let facets = FACET_FIELDS
        .iter()
        .filter_map(|&field| {
            let values: Vec<String> = catalog
                .iter()
                .map(|listing| listing.facet_value(field))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            (!values.is_empty()).then_some(Facet { field, values })
        })
        .collect();

    FacetIndex { categories, facets }
}
