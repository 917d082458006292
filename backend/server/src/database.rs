//! # Redis
//!
//! Per-user marketplace state.
//!
//! ## Layout
//!
//! - `wishlist:{user_id}` — set of listing ids the user has hearted
//! - `payments:{user_id}` — set of listing ids the user has unlocked
//! - `order:{order_id}` — hash `{user_id, listing_id, status}` for the
//!   payment-gateway order lifecycle (`pending` → `paid`)
//!
//! Sets keep the toggle atomic: one `SREM`, and if nothing was there, one
//! `SADD`. Lookups are O(1) over a dataset measured in hundreds of ids per
//! user at most.

use std::time::Duration;

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::error::AppError;

const WISHLIST_PREFIX: &str = "wishlist";
const PAYMENTS_PREFIX: &str = "payments";
const ORDER_PREFIX: &str = "order";

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();
    let connection_manager = client
        .get_connection_manager_with_config(config)
        .await
        .unwrap();

    connection_manager
}

pub async fn get_wishlist(
    connection: &mut ConnectionManager,
    user_id: &str,
) -> Result<Vec<String>, AppError> {
    let ids = connection
        .smembers(format!("{WISHLIST_PREFIX}:{user_id}"))
        .await?;

    Ok(ids)
}

/// Flips one listing id in the user's wishlist set. Returns the new
/// membership.
pub async fn toggle_wishlist(
    connection: &mut ConnectionManager,
    user_id: &str,
    listing_id: &str,
) -> Result<bool, AppError> {
    let key = format!("{WISHLIST_PREFIX}:{user_id}");

    let removed: i64 = connection.srem(&key, listing_id).await?;
    if removed > 0 {
        return Ok(false);
    }

    let _: i64 = connection.sadd(&key, listing_id).await?;

    Ok(true)
}

pub async fn get_payments(
    connection: &mut ConnectionManager,
    user_id: &str,
) -> Result<Vec<String>, AppError> {
    let ids = connection
        .smembers(format!("{PAYMENTS_PREFIX}:{user_id}"))
        .await?;

    Ok(ids)
}

pub async fn create_order(
    connection: &mut ConnectionManager,
    order_id: &str,
    user_id: &str,
    listing_id: &str,
) -> Result<(), AppError> {
    let _: () = connection
        .hset_multiple(
            format!("{ORDER_PREFIX}:{order_id}"),
            &[
                ("user_id", user_id),
                ("listing_id", listing_id),
                ("status", "pending"),
            ],
        )
        .await?;

    Ok(())
}

/// Looks up an order's `(user_id, listing_id)`. `None` when the order was
/// never created.
pub async fn resolve_order(
    connection: &mut ConnectionManager,
    order_id: &str,
) -> Result<Option<(String, String)>, AppError> {
    let fields: Vec<Option<String>> = connection
        .hget(format!("{ORDER_PREFIX}:{order_id}"), &["user_id", "listing_id"])
        .await?;

    match fields.as_slice() {
        [Some(user_id), Some(listing_id)] => Ok(Some((user_id.clone(), listing_id.clone()))),
        _ => Ok(None),
    }
}

/// Settles an order: marks it paid and unlocks the listing for the user.
pub async fn mark_paid(
    connection: &mut ConnectionManager,
    order_id: &str,
    user_id: &str,
    listing_id: &str,
) -> Result<(), AppError> {
    let _: () = connection
        .hset(format!("{ORDER_PREFIX}:{order_id}"), "status", "paid")
        .await?;
    let _: i64 = connection
        .sadd(format!("{PAYMENTS_PREFIX}:{user_id}"), listing_id)
        .await?;

    Ok(())
}
