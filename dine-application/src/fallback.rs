use dine_core::extract::extract_restaurants;

use crate::{RestaurantSummary, Result};

const FALLBACK_LISTING: &str = include_str!("fallback/listing.json");

/// Restaurants that are shown when the listing cannot be fetched.
pub fn fallback_restaurants() -> Result<Vec<RestaurantSummary>> {
    let doc: serde_json::Value = serde_json::from_str(FALLBACK_LISTING)?;
    Ok(extract_restaurants(&doc))
}
