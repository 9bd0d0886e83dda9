use super::prelude::*;
use crate::text::contains_ignore_case;

/// All restaurants whose name contains `text`, ignoring case.
///
/// The original order is preserved. Blank input matches everything.
pub fn search_restaurants(all: &[RestaurantSummary], text: &str) -> Vec<RestaurantSummary> {
    let needle = text.trim();
    all.iter()
        .filter(|r| contains_ignore_case(&r.name, needle))
        .cloned()
        .collect()
}
