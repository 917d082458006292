//! Filter/Sort/Search Pipeline.
//!
//! A pure function from (catalog, selection) to an ordered display list of
//! snapshot indices. One linear pass with a short-circuit predicate per
//! item, a stable sort, and a stable availability partition. Rebuilt from
//! scratch on every invocation; nothing is memoized.

use std::cmp::Ordering;

use listings::{Listing, ListingKind};

use crate::selection::{SelectionState, SortKey};

/// The full pipeline: filter, sort, then partition Available items ahead of
/// everything else. Returned indices point into `catalog`.
pub fn display_list(catalog: &[Listing], selection: &SelectionState) -> Vec<usize> {
    let mut kept = filtered(catalog, selection);

    if selection.sort != SortKey::Relevance {
        kept.sort_by(|&a, &b| compare(&catalog[a], &catalog[b], selection.sort));
    }

    let (mut available, unavailable): (Vec<usize>, Vec<usize>) = kept
        .into_iter()
        .partition(|&index| catalog[index].status.is_available());
    available.extend(unavailable);

    available
}

/// Filter steps only, in fixed order: category, facets, search. Exposed so
/// callers can observe the pre-sort, pre-partition result.
pub fn filtered(catalog: &[Listing], selection: &SelectionState) -> Vec<usize> {
    let needle = selection.search.trim().to_lowercase();

    catalog
        .iter()
        .enumerate()
        .filter(|(_, listing)| {
            matches_category(listing, selection)
                && matches_facets(listing, selection)
                && matches_search(listing, &needle)
        })
        .map(|(index, _)| index)
        .collect()
}

// Case-sensitive exact equality; no normalization.
fn matches_category(listing: &Listing, selection: &SelectionState) -> bool {
    match &selection.category {
        Some(category) => listing.category == *category,
        None => true,
    }
}

// AND across facets, OR within one facet's options. Facets absent from the
// map impose no constraint; the reducer guarantees no empty sets exist.
fn matches_facets(listing: &Listing, selection: &SelectionState) -> bool {
    selection
        .facets
        .iter()
        .all(|(&field, options)| options.contains(listing.facet_value(field)))
}

// Blank queries match everything. `needle` arrives trimmed and case-folded.
fn matches_search(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    search_fields(listing)
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// The searchable fields per listing kind: mating listings expose their
/// descriptive fields plus the breeder name; sale listings expose every
/// scalar field, including age and the decimal price.
fn search_fields(listing: &Listing) -> Vec<String> {
    let mut fields = vec![
        listing.breed.clone(),
        listing.category.clone(),
        listing.gender.clone(),
        listing.quality.clone(),
        listing.location.clone(),
    ];

    match listing.kind {
        ListingKind::Mating => {
            if let Some(breeder) = &listing.breeder {
                fields.push(breeder.clone());
            }
        }
        ListingKind::Sale => {
            fields.push(listing.age.clone());
            if let Some(price) = listing.price {
                fields.push(price.to_string());
            }
        }
    }

    fields
}

fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Relevance => Ordering::Equal,
        SortKey::PriceAsc => compare_price(a, b),
        SortKey::PriceDesc => compare_price(b, a),
        SortKey::AgeAsc => compare_age(a, b),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
    }
}

// Listings without a price (mating) take the neutral key zero. Key-based,
// so the comparator stays a total order and the stable sort keeps equal
// keys in their filtered order.
fn compare_price(a: &Listing, b: &Listing) -> Ordering {
    a.price.unwrap_or(0).cmp(&b.price.unwrap_or(0))
}

// Unparseable ages never error; they take the neutral key zero and keep
// their relative positions among each other.
fn compare_age(a: &Listing, b: &Listing) -> Ordering {
    let a = leading_number(&a.age).unwrap_or(0.0);
    let b = leading_number(&b.age).unwrap_or(0.0);

    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Leading float of a possibly unit-suffixed string: "2 years" is 2.0,
/// "1.5 yrs" is 1.5, "unknown" is `None`.
fn leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .char_indices()
        .take_while(|&(_, c)| c.is_ascii_digit() || c == '.')
        .last()
        .map(|(index, c)| index + c.len_utf8())?;

    trimmed[..end].parse().ok()
}
