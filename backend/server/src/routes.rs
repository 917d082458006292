//! Route handlers.
//!
//! ## Routes
//!
//! - `GET  /catalog` - Full listing snapshot, no filter/sort/page params
//! - `POST /catalog` - Seller submission; server assigns id and timestamp
//! - `GET  /wishlist/{user_id}` - Listing ids the user has hearted
//! - `PUT  /wishlist` - Toggle one id; responds with the new membership
//! - `GET  /payments/{user_id}` - Listing ids the user has unlocked
//! - `POST /payments/create` - Open a pending gateway order
//! - `POST /payments/verify` - Gateway callback; HMAC signature check

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use listings::{
    Listing, ListingStatus,
    payloads::{
        CreateOrder, ListingCreated, NewListing, OrderCreated, VerifyOrder, WishlistStatus,
        WishlistToggle,
    },
};
use tracing::info;
use uuid::Uuid;

use crate::{
    database,
    error::AppError,
    state::AppState,
    utils::{validate_id, validate_submission, verify_signature},
};

pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<Vec<Listing>> {
    Json(state.listings.read().await.clone())
}

pub async fn create_listing(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<NewListing>,
) -> Result<(StatusCode, Json<ListingCreated>), AppError> {
    validate_submission(&submission)?;

    let listing = Listing {
        id: Uuid::new_v4().to_string(),
        kind: submission.kind,
        category: submission.category,
        breed: submission.breed,
        gender: submission.gender,
        age: submission.age,
        quality: submission.quality,
        location: submission.location,
        price: submission.price,
        breeder: submission.breeder,
        status: ListingStatus::Available,
        photos: submission.photos,
        created_at: Utc::now(),
    };

    info!(id = %listing.id, breed = %listing.breed, "listing created");
    state.listings.write().await.push(listing.clone());

    Ok((StatusCode::CREATED, Json(ListingCreated { listing })))
}

pub async fn get_wishlist(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    validate_id(&user_id)?;

    let mut connection = state.redis_connection.clone();
    let ids = database::get_wishlist(&mut connection, &user_id).await?;

    Ok(Json(ids))
}

pub async fn put_wishlist(
    State(state): State<Arc<AppState>>,
    Json(toggle): Json<WishlistToggle>,
) -> Result<Json<WishlistStatus>, AppError> {
    validate_id(&toggle.user_id)?;
    validate_id(&toggle.listing_id)?;

    let mut connection = state.redis_connection.clone();
    let wishlisted =
        database::toggle_wishlist(&mut connection, &toggle.user_id, &toggle.listing_id).await?;

    Ok(Json(WishlistStatus { wishlisted }))
}

pub async fn get_payments(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    validate_id(&user_id)?;

    let mut connection = state.redis_connection.clone();
    let ids = database::get_payments(&mut connection, &user_id).await?;

    Ok(Json(ids))
}

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    Json(order): Json<CreateOrder>,
) -> Result<Json<OrderCreated>, AppError> {
    validate_id(&order.user_id)?;
    validate_id(&order.listing_id)?;

    let known = state
        .listings
        .read()
        .await
        .iter()
        .any(|listing| listing.id == order.listing_id);
    if !known {
        return Err(AppError::UnknownListing);
    }

    let order_id = Uuid::new_v4().to_string();
    let mut connection = state.redis_connection.clone();
    database::create_order(&mut connection, &order_id, &order.user_id, &order.listing_id).await?;

    info!(%order_id, listing_id = %order.listing_id, "order opened");

    Ok(Json(OrderCreated { order_id }))
}

pub async fn verify_payment(
    State(state): State<Arc<AppState>>,
    Json(verification): Json<VerifyOrder>,
) -> Result<StatusCode, AppError> {
    validate_id(&verification.order_id)?;

    let mut connection = state.redis_connection.clone();
    let Some((user_id, listing_id)) =
        database::resolve_order(&mut connection, &verification.order_id).await?
    else {
        return Err(AppError::UnknownOrder);
    };

    if !verify_signature(
        &state.config.gateway_secret,
        &verification.order_id,
        &verification.payment_id,
        &verification.signature,
    ) {
        return Err(AppError::InvalidSignature);
    }

    database::mark_paid(&mut connection, &verification.order_id, &user_id, &listing_id).await?;

    info!(order_id = %verification.order_id, %listing_id, "order settled");

    Ok(StatusCode::OK)
}
