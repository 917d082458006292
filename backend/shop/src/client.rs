//! HTTP client for the backend, plus the [`Shop`] driver that owns the
//! store and drives the load lifecycle.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use listings::payloads::{
    CreateOrder, OrderCreated, VerifyOrder, WishlistStatus, WishlistToggle,
};
use listings::Listing;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::warn;

use crate::debounce::Debouncer;
use crate::error::ShopError;
use crate::store::ShopStore;

/// Delay before a bulk catalog re-fetch actually fires.
pub const RELOAD_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Clone)]
pub struct ShopClient {
    http: Client,
    base_url: String,
}

/// Per-user state fetched alongside the catalog: wishlist membership and
/// payment-unlocked listing ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub wishlist: BTreeSet<String>,
    pub payments: BTreeSet<String>,
}

impl ShopClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    pub async fn fetch_catalog(&self) -> Result<Vec<Listing>, ShopError> {
        let listings = self
            .http
            .get(self.url("/catalog"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(listings)
    }

    pub async fn fetch_wishlist(&self, user_id: &str) -> Result<BTreeSet<String>, ShopError> {
        let ids = self
            .http
            .get(self.url(&format!("/wishlist/{user_id}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(ids)
    }

    /// Flips one listing in the user's wishlist; returns the new
    /// membership.
    pub async fn toggle_wishlist(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> Result<bool, ShopError> {
        let status: WishlistStatus = self
            .http
            .put(self.url("/wishlist"))
            .json(&WishlistToggle {
                user_id: user_id.to_string(),
                listing_id: listing_id.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(status.wishlisted)
    }

    pub async fn fetch_payments(&self, user_id: &str) -> Result<BTreeSet<String>, ShopError> {
        let ids = self
            .http
            .get(self.url(&format!("/payments/{user_id}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(ids)
    }

    pub async fn create_order(
        &self,
        user_id: &str,
        listing_id: &str,
    ) -> Result<String, ShopError> {
        let created: OrderCreated = self
            .http
            .post(self.url("/payments/create"))
            .json(&CreateOrder {
                user_id: user_id.to_string(),
                listing_id: listing_id.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(created.order_id)
    }

    /// Forwards the gateway callback. The gateway itself is opaque here;
    /// only the success/failure outcome matters.
    pub async fn verify_order(&self, verification: &VerifyOrder) -> Result<(), ShopError> {
        let response = self
            .http
            .post(self.url("/payments/verify"))
            .json(verification)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(ShopError::Rejected(message))
    }
}

/// Store + client + debounced reload, wired by ownership rather than
/// globals. The store lives behind a mutex only so the scheduled reload
/// task can reach it; all mutation still funnels through store methods.
pub struct Shop {
    store: Arc<Mutex<ShopStore>>,
    client: Arc<ShopClient>,
    reload: Debouncer,
}

impl Shop {
    pub fn new(client: ShopClient) -> Self {
        Self {
            store: Arc::new(Mutex::new(ShopStore::new())),
            client: Arc::new(client),
            reload: Debouncer::new(RELOAD_DEBOUNCE),
        }
    }

    pub fn store(&self) -> Arc<Mutex<ShopStore>> {
        self.store.clone()
    }

    /// Fetches the catalog and resolves the store's loading lifecycle.
    pub async fn refresh(&self) {
        refresh(self.store.clone(), self.client.clone()).await;
    }

    /// Debounced bulk reload: rapid re-triggers collapse into one fetch,
    /// and a superseded trigger's task is aborted before it can deliver.
    pub fn request_reload(&mut self) {
        let store = self.store.clone();
        let client = self.client.clone();
        self.reload.schedule(refresh(store, client));
    }

    /// Wishlist and payment state fan out concurrently; neither blocks the
    /// catalog, and the display computation depends on neither.
    pub async fn fetch_user_state(&self, user_id: &str) -> Result<UserState, ShopError> {
        let (wishlist, payments) = tokio::join!(
            self.client.fetch_wishlist(user_id),
            self.client.fetch_payments(user_id),
        );

        Ok(UserState {
            wishlist: wishlist?,
            payments: payments?,
        })
    }

    pub fn client(&self) -> &ShopClient {
        &self.client
    }
}

async fn refresh(store: Arc<Mutex<ShopStore>>, client: Arc<ShopClient>) {
    store.lock().await.begin_load();

    match client.fetch_catalog().await {
        Ok(listings) => store.lock().await.load(listings),
        Err(error) => {
            warn!(%error, "catalog fetch failed");
            store.lock().await.fail(error.to_string());
        }
    }
}
