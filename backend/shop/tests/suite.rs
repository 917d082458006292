//! End-to-end properties of the shop core, exercised through the store the
//! way a view would drive it.

use chrono::{TimeZone, Utc};
use listings::{FacetField, Listing, ListingKind, ListingStatus};
use pretty_assertions::assert_eq;
use shop::{
    display_list, pipeline, LoadPhase, SelectionPatch, SelectionState, ShopStore, SortKey,
};

fn sale(id: &str, breed: &str, age: &str, price: u64, status: ListingStatus) -> Listing {
    Listing {
        id: id.to_string(),
        kind: ListingKind::Sale,
        category: "Dog".to_string(),
        breed: breed.to_string(),
        gender: "Male".to_string(),
        age: age.to_string(),
        quality: "Pet".to_string(),
        location: "Austin".to_string(),
        price: Some(price),
        breeder: None,
        status,
        photos: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn mating(id: &str, breed: &str, breeder: &str) -> Listing {
    Listing {
        id: id.to_string(),
        kind: ListingKind::Mating,
        category: "Dog".to_string(),
        breed: breed.to_string(),
        gender: "Female".to_string(),
        age: "3 years".to_string(),
        quality: "Show".to_string(),
        location: "Boston".to_string(),
        price: None,
        breeder: Some(breeder.to_string()),
        status: ListingStatus::Available,
        photos: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
    }
}

fn fixture() -> Vec<Listing> {
    vec![
        sale("lab", "Labrador", "2 years", 20000, ListingStatus::Available),
        sale("pug", "Pug", "1 years", 15000, ListingStatus::Available),
        sale("husky", "Husky", "unknown", 30000, ListingStatus::Sold),
        sale("beagle", "Beagle", "4 years", 12000, ListingStatus::Pending),
        mating("dam", "Labrador", "Hillside Kennels"),
    ]
}

fn ids<'a>(catalog: &'a [Listing], display: &[usize]) -> Vec<&'a str> {
    display.iter().map(|&i| catalog[i].id.as_str()).collect()
}

#[test]
fn pipeline_is_idempotent() {
    let catalog = fixture();
    let selection = SelectionState::default()
        .reduced(SelectionPatch::SetSearch("lab".to_string()))
        .reduced(SelectionPatch::SetSort(SortKey::PriceAsc));

    assert_eq!(
        display_list(&catalog, &selection),
        display_list(&catalog, &selection)
    );
}

#[test]
fn facets_ignore_the_selection_entirely() {
    let mut store = ShopStore::new();
    store.load(fixture());

    let unfiltered = store.facets().clone();

    store.apply(SelectionPatch::SetCategory(Some("Dog".to_string())));
    store.apply(SelectionPatch::ToggleFacetOption {
        field: FacetField::Breed,
        value: "Pug".to_string(),
    });
    store.apply(SelectionPatch::SetSearch("pug".to_string()));

    assert_eq!(store.facets(), &unfiltered);
}

#[test]
fn display_list_is_a_subset_satisfying_every_predicate() {
    let catalog = fixture();
    let selection = SelectionState::default()
        .reduced(SelectionPatch::ToggleFacetOption {
            field: FacetField::Breed,
            value: "Labrador".to_string(),
        })
        .reduced(SelectionPatch::SetCategory(Some("Dog".to_string())));

    let display = display_list(&catalog, &selection);

    assert!(!display.is_empty());
    for &index in &display {
        let listing = &catalog[index];
        assert_eq!(listing.category, "Dog");
        assert_eq!(listing.breed, "Labrador");
    }
}

#[test]
fn no_unavailable_item_precedes_an_available_one() {
    let catalog = fixture();
    let display = display_list(&catalog, &SelectionState::default());

    let first_unavailable = display
        .iter()
        .position(|&i| !catalog[i].status.is_available());
    let last_available = display
        .iter()
        .rposition(|&i| catalog[i].status.is_available());

    if let (Some(first), Some(last)) = (first_unavailable, last_available) {
        assert!(first > last);
    }
}

#[test]
fn empty_selection_filters_nothing() {
    let catalog = fixture();

    let kept = pipeline::filtered(&catalog, &SelectionState::default());

    assert_eq!(kept, (0..catalog.len()).collect::<Vec<_>>());
}

#[test]
fn price_sort_orders_cheapest_first() {
    let catalog = vec![
        sale("lab", "Labrador", "2 years", 20000, ListingStatus::Available),
        sale("pug", "Pug", "1 years", 15000, ListingStatus::Available),
    ];
    let selection = SelectionState::default().reduced(SelectionPatch::SetSort(SortKey::PriceAsc));

    assert_eq!(ids(&catalog, &display_list(&catalog, &selection)), vec!["pug", "lab"]);
}

#[test]
fn breed_facet_keeps_only_selected_breeds() {
    let catalog = vec![
        sale("lab", "Labrador", "2 years", 20000, ListingStatus::Available),
        sale("pug", "Pug", "1 years", 15000, ListingStatus::Available),
    ];
    let selection = SelectionState::default().reduced(SelectionPatch::ToggleFacetOption {
        field: FacetField::Breed,
        value: "Pug".to_string(),
    });

    assert_eq!(ids(&catalog, &display_list(&catalog, &selection)), vec!["pug"]);
}

#[test]
fn search_matches_case_insensitively() {
    let catalog = vec![
        sale("lab", "Labrador", "2 years", 20000, ListingStatus::Available),
        sale("pug", "Pug", "1 years", 15000, ListingStatus::Available),
    ];
    let selection = SelectionState::default().reduced(SelectionPatch::SetSearch("lab".to_string()));

    assert_eq!(ids(&catalog, &display_list(&catalog, &selection)), vec!["lab"]);
}

#[test]
fn unchecking_the_last_option_drops_the_facet_key() {
    let mut store = ShopStore::new();
    store.load(fixture());

    store.apply(SelectionPatch::ToggleFacetOption {
        field: FacetField::Breed,
        value: "Pug".to_string(),
    });
    assert!(store.selection().facets.contains_key(&FacetField::Breed));

    store.apply(SelectionPatch::ToggleFacetOption {
        field: FacetField::Breed,
        value: "Pug".to_string(),
    });

    assert!(!store.selection().facets.contains_key(&FacetField::Breed));
    assert_eq!(store.display_indices().len(), store.listings().len());
}

#[test]
fn age_sort_tolerates_unparseable_values() {
    let catalog = fixture();
    let selection = SelectionState::default().reduced(SelectionPatch::SetSort(SortKey::AgeAsc));

    let display = display_list(&catalog, &selection);

    // Age keys: pug 1, lab 2, dam 3, husky 0 (unparseable), beagle 4.
    // Available partition first, then the sold/pending tail in age order.
    assert_eq!(
        ids(&catalog, &display),
        vec!["pug", "lab", "dam", "husky", "beagle"]
    );
}

#[test]
fn mating_listings_search_the_breeder_name() {
    let catalog = fixture();
    let selection =
        SelectionState::default().reduced(SelectionPatch::SetSearch("hillside".to_string()));

    assert_eq!(ids(&catalog, &display_list(&catalog, &selection)), vec!["dam"]);
}

#[test]
fn newest_sort_is_most_recent_first() {
    let catalog = fixture();
    let selection = SelectionState::default().reduced(SelectionPatch::SetSort(SortKey::Newest));

    // The mating listing is the newest and Available, so it leads.
    assert_eq!(ids(&catalog, &display_list(&catalog, &selection))[0], "dam");
}

#[test]
fn full_browse_flow_through_the_store() {
    let mut store = ShopStore::new();
    assert_eq!(store.phase(), LoadPhase::Idle);

    store.begin_load();
    store.load(fixture());

    store.apply(SelectionPatch::SetCategory(Some("Dog".to_string())));
    store.apply(SelectionPatch::SetSort(SortKey::PriceAsc));

    let shown: Vec<&str> = store.display().map(|l| l.id.as_str()).collect();
    // Priceless mating listing takes the neutral key zero, then ascending
    // prices, then the unavailable partition.
    assert_eq!(shown, vec!["dam", "pug", "lab", "beagle", "husky"]);

    store.apply(SelectionPatch::ClearAll);
    assert_eq!(store.selection(), &SelectionState::default());
    assert_eq!(store.display_indices().len(), store.listings().len());
}
