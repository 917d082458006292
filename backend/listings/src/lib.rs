//! # Listings
//!
//! Shared listing model plus the seed "bank": the full catalog snapshot as a
//! JSON file, readable locally or over HTTP.
//!
//! ## Schema
//! - One JSON array of listings
//! - Kind-specific fields are optional: `price` (sale), `breeder` (mating)
//! - `status` strings: "Available", "Pending", "Sold"

use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod payloads;
pub mod remote;

pub use remote::get_listings_remote;

/// Filename the tester writes and the server reads by default.
pub const BANK_FILE: &str = "bank.json";

#[derive(Error, Debug)]
pub enum BankError {
    #[error("bank file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed bank: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bank fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Sale,
    Mating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    Available,
    Pending,
    Sold,
}

impl ListingStatus {
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// One catalog item, immutable from the catalog's viewpoint.
///
/// Closed record: every field the views read has a name here. Kind-specific
/// fields stay `Option` rather than living in an open map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub kind: ListingKind,
    pub category: String,
    pub breed: String,
    pub gender: String,
    /// Free-form, possibly unit-suffixed ("2 years"). Parsed only by the
    /// age sort comparator.
    pub age: String,
    pub quality: String,
    pub location: String,
    /// Sale listings only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    /// Mating listings only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeder: Option<String>,
    pub status: ListingStatus,
    #[serde(default)]
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The filterable fields a facet can be built over. Category is not listed
/// here: it is single-select with an "All" sentinel and handled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetField {
    Breed,
    Gender,
    Quality,
    Location,
}

/// Display order of the facet controls.
pub const FACET_FIELDS: [FacetField; 4] = [
    FacetField::Breed,
    FacetField::Gender,
    FacetField::Quality,
    FacetField::Location,
];

impl FacetField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Breed => "breed",
            Self::Gender => "gender",
            Self::Quality => "quality",
            Self::Location => "location",
        }
    }
}

impl Listing {
    /// The raw value this listing carries for a facet field.
    pub fn facet_value(&self, field: FacetField) -> &str {
        match field {
            FacetField::Breed => &self.breed,
            FacetField::Gender => &self.gender,
            FacetField::Quality => &self.quality,
            FacetField::Location => &self.location,
        }
    }
}

pub fn get_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>, BankError> {
    let data = fs::read(path)?;

    Ok(serde_json::from_slice(&data)?)
}

pub fn write_listings(path: impl AsRef<Path>, listings: &[Listing]) -> Result<(), BankError> {
    fs::write(path, serde_json::to_vec_pretty(listings)?)?;

    Ok(())
}
