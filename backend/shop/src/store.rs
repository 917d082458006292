//! Catalog Store: single writer for the snapshot, the user's selections,
//! and everything derived from them.
//!
//! The store is an explicit container handed to whoever renders it; there
//! is no global instance. Every mutation ends in recompute-and-notify:
//! facets are rebuilt only when the snapshot changes, the display list on
//! every change, and subscribers run afterwards with a shared borrow of the
//! store.

use listings::Listing;
use tracing::debug;

use crate::facets::{build_facets, FacetIndex};
use crate::pipeline::display_list;
use crate::selection::{SelectionPatch, SelectionState};

/// View loading lifecycle. Re-fetch re-enters `Loading` from either
/// terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

type Subscriber = Box<dyn FnMut(&ShopStore) + Send>;

#[derive(Default)]
pub struct ShopStore {
    listings: Vec<Listing>,
    facet_index: FacetIndex,
    selection: SelectionState,
    display: Vec<usize>,
    phase: LoadPhase,
    error: Option<String>,
    subscribers: Vec<Subscriber>,
}

impl ShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch in flight. The last-good snapshot stays visible until
    /// `load` or `fail` resolves it.
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.notify();
    }

    /// Replaces the raw snapshot: facets rebuild from the unfiltered
    /// listings, then the display list recomputes under the current
    /// selection.
    pub fn load(&mut self, listings: Vec<Listing>) {
        debug!(count = listings.len(), "catalog snapshot replaced");

        self.listings = listings;
        self.facet_index = build_facets(&self.listings);
        self.phase = LoadPhase::Loaded;
        self.error = None;
        self.recompute();
    }

    /// Fetch failure. Non-fatal: the last-good snapshot is preserved (empty
    /// on a first-load failure), and recovery is a user-triggered re-fetch.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Errored;
        self.error = Some(message.into());
        self.notify();
    }

    /// Reduces the selection and recomputes the display list.
    pub fn apply(&mut self, patch: SelectionPatch) {
        self.selection = self.selection.reduced(patch);
        self.recompute();
    }

    /// Registers a callback invoked after every recompute or phase change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ShopStore) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facet_index
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Display list as indices into [`Self::listings`].
    pub fn display_indices(&self) -> &[usize] {
        &self.display
    }

    /// Display list resolved to listings, in display order.
    pub fn display(&self) -> impl Iterator<Item = &Listing> {
        self.display.iter().map(|&index| &self.listings[index])
    }

    /// An empty display list over a non-empty snapshot is the "no results"
    /// view state, not an error.
    pub fn is_empty_result(&self) -> bool {
        self.display.is_empty() && !self.listings.is_empty()
    }

    fn recompute(&mut self) {
        self.display = display_list(&self.listings, &self.selection);
        self.notify();
    }

    fn notify(&mut self) {
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for subscriber in &mut subscribers {
            subscriber(self);
        }
        self.subscribers = subscribers;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use chrono::Utc;
    use listings::{FacetField, ListingKind, ListingStatus};
    use pretty_assertions::assert_eq;

    use super::*;

    fn dog(id: &str, breed: &str) -> Listing {
        Listing {
            id: id.to_string(),
            kind: ListingKind::Sale,
            category: "Dog".to_string(),
            breed: breed.to_string(),
            gender: "Male".to_string(),
            age: "1 years".to_string(),
            quality: "Pet".to_string(),
            location: "Austin".to_string(),
            price: Some(100),
            breeder: None,
            status: ListingStatus::Available,
            photos: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn lifecycle_runs_idle_loading_loaded() {
        let mut store = ShopStore::new();
        assert_eq!(store.phase(), LoadPhase::Idle);

        store.begin_load();
        assert_eq!(store.phase(), LoadPhase::Loading);

        store.load(vec![dog("1", "Pug")]);
        assert_eq!(store.phase(), LoadPhase::Loaded);
        assert_eq!(store.display_indices(), &[0]);
    }

    #[test]
    fn first_load_failure_leaves_the_snapshot_empty() {
        let mut store = ShopStore::new();

        store.begin_load();
        store.fail("connection refused");

        assert_eq!(store.phase(), LoadPhase::Errored);
        assert_eq!(store.error(), Some("connection refused"));
        assert!(store.listings().is_empty());
    }

    #[test]
    fn refetch_failure_preserves_the_last_good_snapshot() {
        let mut store = ShopStore::new();
        store.load(vec![dog("1", "Pug")]);

        store.begin_load();
        store.fail("timed out");

        assert_eq!(store.phase(), LoadPhase::Errored);
        assert_eq!(store.listings().len(), 1);
        assert_eq!(store.display_indices(), &[0]);
    }

    #[test]
    fn retrigger_clears_the_error_and_reenters_loading() {
        let mut store = ShopStore::new();
        store.fail("boom");

        store.begin_load();

        assert_eq!(store.phase(), LoadPhase::Loading);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn facets_come_from_the_raw_snapshot_not_the_display_list() {
        let mut store = ShopStore::new();
        store.load(vec![dog("1", "Pug"), dog("2", "Labrador")]);

        let before = store.facets().clone();

        store.apply(SelectionPatch::ToggleFacetOption {
            field: FacetField::Breed,
            value: "Pug".to_string(),
        });

        assert_eq!(store.display_indices(), &[0]);
        assert_eq!(store.facets(), &before);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut store = ShopStore::new();
        store.load(vec![dog("1", "Pug"), dog("2", "Labrador")]);

        store.apply(SelectionPatch::SetSearch("pug".to_string()));
        let first = store.display_indices().to_vec();

        // A no-op patch recomputes the whole pipeline.
        store.apply(SelectionPatch::SetSearch("pug".to_string()));

        assert_eq!(store.display_indices(), first.as_slice());
    }

    #[test]
    fn subscribers_observe_every_update() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();

        let mut store = ShopStore::new();
        store.subscribe(move |_store| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.begin_load();
        store.load(vec![dog("1", "Pug")]);
        store.apply(SelectionPatch::SetSearch("p".to_string()));

        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn empty_result_is_a_view_state_not_an_error() {
        let mut store = ShopStore::new();
        store.load(vec![dog("1", "Pug")]);

        store.apply(SelectionPatch::SetSearch("zebra".to_string()));

        assert!(store.is_empty_result());
        assert_eq!(store.phase(), LoadPhase::Loaded);
        assert_eq!(store.error(), None);
    }
}
