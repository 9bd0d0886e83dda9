use super::prelude::*;
use crate::extract::extract_restaurants;

/// Fetch the listing and extract its restaurants.
///
/// A document without recognizable restaurants is not an error.
pub fn load_listing<G>(gateway: &G) -> Result<Vec<RestaurantSummary>>
where
    G: ListingGateway + ?Sized,
{
    let doc = gateway.fetch_listing()?;
    let restaurants = extract_restaurants(&doc);
    if restaurants.is_empty() {
        log::warn!("No restaurants found in the listing response");
    } else {
        log::info!("Loaded {} restaurants", restaurants.len());
    }
    Ok(restaurants)
}
