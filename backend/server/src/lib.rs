//! REST backend for the pawmart marketplace.
//!
//! # General Infrastructure
//! - One axum service fronting two stores: the listing catalog (in-memory,
//!   seeded from the bank file) and redis (per-user wishlist/payment sets
//!   plus payment orders)
//! - `GET /catalog` returns the full snapshot; all filtering, search, and
//!   sorting happen client-side in the shop core, so no query params exist
//! - The payment gateway is opaque: `/payments/create` opens an order,
//!   `/payments/verify` checks the gateway's HMAC callback signature
//!
//! # Notes
//!
//! ## Redis
//! Wishlists and payment unlocks are per-user sets of listing ids, small
//! and hot. Redis sets give atomic toggles and O(1) membership without
//! dragging in the document database for what is effectively session-grade
//! state.
//!
//! The catalog itself stays in process memory: it is a single snapshot
//! replaced wholesale, read by one endpoint, and the shop core re-fetches
//! it rather than querying pieces of it.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post, put},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use routes::{
    create_listing, create_payment, get_catalog, get_payments, get_wishlist, put_wishlist,
    verify_payment,
};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/catalog", get(get_catalog).post(create_listing))
        .route("/wishlist", put(put_wishlist))
        .route("/wishlist/{user_id}", get(get_wishlist))
        .route("/payments/{user_id}", get(get_payments))
        .route("/payments/create", post(create_payment))
        .route("/payments/verify", post(verify_payment))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
