use thiserror::Error;

/// Shop-side failures. All non-fatal: the store degrades to a visible
/// errored state and the only recovery path is a user-triggered re-fetch.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend rejected the request: {0}")]
    Rejected(String),
}
