//! # Shop
//!
//! Headless client core for the pawmart marketplace. Everything the browsing
//! views need, minus the rendering:
//!
//! - [`store::ShopStore`]: the catalog snapshot, the user's current
//!   selections, the derived facet index and display list, and the load
//!   lifecycle. Views subscribe; the store recomputes and notifies.
//! - [`facets`]: derives the filter controls from the raw snapshot. Always
//!   the raw snapshot, never the filtered list, so option lists do not
//!   shrink as other filters are applied.
//! - [`pipeline`]: the pure filter/sort/search function. Rebuilt from
//!   scratch on every change; at catalog scale that is cheaper than any
//!   incremental scheme would be to get right.
//! - [`client`]: HTTP client for the backend plus the [`client::Shop`]
//!   driver that wires store, client, and the debounced reload together.
//!
//! The store is plain data owned by the caller. There is no global
//! singleton and no framework reactivity; subscriptions are explicit.

pub mod client;
pub mod debounce;
pub mod error;
pub mod facets;
pub mod pipeline;
pub mod selection;
pub mod store;

pub use client::{Shop, ShopClient, UserState};
pub use debounce::Debouncer;
pub use error::ShopError;
pub use facets::{Facet, FacetIndex, ALL_CATEGORIES};
pub use pipeline::display_list;
pub use selection::{SelectionPatch, SelectionState, SortKey};
pub use store::{LoadPhase, ShopStore};
