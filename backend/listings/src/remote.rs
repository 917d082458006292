use reqwest::get;

use crate::{BankError, Listing};

/// Fetches a full bank snapshot over HTTP. Used when the server boots
/// without a local bank file.
pub async fn get_listings_remote(url: &str) -> Result<Vec<Listing>, BankError> {
    let response = get(url).await?.error_for_status()?;
    let listings = response.json().await?;

    Ok(listings)
}
