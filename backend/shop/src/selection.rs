//! Selection State: the user's current category, facet, search, and sort
//! choices. Updates go through [`SelectionState::reduced`], a pure reducer,
//! so the store stays the single writer.

use std::collections::{BTreeMap, BTreeSet};

use listings::FacetField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// No comparator; preserves filtered order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    AgeAsc,
    Newest,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    /// Single-select; `None` is the "All" sentinel.
    pub category: Option<String>,
    /// Multi-select per facet. Invariant: no empty value sets — a facet
    /// whose last option is unchecked is removed from the map entirely.
    pub facets: BTreeMap<FacetField, BTreeSet<String>>,
    pub search: String,
    pub sort: SortKey,
}

#[derive(Debug, Clone)]
pub enum SelectionPatch {
    /// `None` or the empty string selects "All".
    SetCategory(Option<String>),
    ToggleFacetOption { field: FacetField, value: String },
    SetSearch(String),
    SetSort(SortKey),
    ClearAll,
}

impl SelectionState {
    /// The next state after applying one patch. Pure; `self` is untouched.
    pub fn reduced(&self, patch: SelectionPatch) -> SelectionState {
        let mut next = self.clone();

        match patch {
            SelectionPatch::SetCategory(category) => {
                next.category = category.filter(|c| !c.is_empty());
            }
            SelectionPatch::ToggleFacetOption { field, value } => {
                let options = next.facets.entry(field).or_default();
                if !options.remove(&value) {
                    options.insert(value);
                }
                if options.is_empty() {
                    next.facets.remove(&field);
                }
            }
            SelectionPatch::SetSearch(search) => {
                next.search = search;
            }
            SelectionPatch::SetSort(sort) => {
                next.sort = sort;
            }
            SelectionPatch::ClearAll => {
                next = SelectionState::default();
            }
        }

        next
    }

    /// True when no filter constrains the catalog (sort key is not a
    /// filter).
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.facets.is_empty() && self.search.trim().is_empty()
    }
}
