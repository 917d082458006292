//! Wire payloads shared between the server and the shop client.

use serde::{Deserialize, Serialize};

use crate::{Listing, ListingKind};

/// Seller-side submission for `POST /catalog`. The server assigns the id,
/// status, and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub kind: ListingKind,
    pub category: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub quality: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeder: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingCreated {
    pub listing: Listing,
}

/// `PUT /wishlist` body: flips one listing id in the user's set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistToggle {
    pub user_id: String,
    pub listing_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistStatus {
    pub wishlisted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    pub user_id: String,
    pub listing_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: String,
}

/// Gateway callback payload for `POST /payments/verify`. The signature is
/// HMAC-SHA256 over `order_id|payment_id`, hex encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOrder {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}
