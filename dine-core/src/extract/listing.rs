use serde_json::Value;

use super::{first_match, non_empty_array, value::*, Strategy};
use crate::entities::*;

/// Locations of the top-level card array.
pub const CARD_ARRAY_STRATEGIES: &[Strategy] = &[
    Strategy::new("data-cards", "/data/cards"),
    Strategy::new("cards", "/cards"),
];

/// Location of the restaurant array inside a single card.
pub const RESTAURANTS_IN_CARD: Strategy = Strategy::new(
    "grid-restaurants",
    "/card/card/gridElements/infoWithStyle/restaurants",
);

/// Extract the restaurants of a listing document.
///
/// Returns the entries of the first card that carries a non-empty
/// restaurant array. Cards after the first match are ignored. If
/// nothing matches, the result is empty.
pub fn extract_restaurants(doc: &Value) -> Vec<RestaurantSummary> {
    let Some((_, cards)) = first_match(CARD_ARRAY_STRATEGIES, doc, Value::as_array) else {
        log::debug!("No card array found in listing document");
        return vec![];
    };
    let Some((index, entries)) = cards.iter().enumerate().find_map(|(i, card)| {
        RESTAURANTS_IN_CARD
            .locate(card)
            .and_then(non_empty_array)
            .map(|entries| (i, entries))
    }) else {
        log::debug!("None of {} cards contains restaurants", cards.len());
        return vec![];
    };
    log::debug!("Found {} restaurants in card {index}", entries.len());
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| restaurant_from_entry(entry, position))
        .collect()
}

fn restaurant_from_entry(entry: &Value, position: usize) -> RestaurantSummary {
    let empty = Object::new();
    let info = entry.get("info").and_then(Value::as_object).unwrap_or(&empty);
    restaurant_summary_from_info(info, position)
}

pub(crate) fn restaurant_summary_from_info(info: &Object, position: usize) -> RestaurantSummary {
    let name = string(info, &["name"]).unwrap_or_default();
    let id = string_or_number(info, &["id"])
        .map(Id::from)
        .unwrap_or_else(|| Id::synthesize(&name, position));
    RestaurantSummary {
        id,
        cuisines: labels(info.get("cuisines")),
        avg_rating: avg_rating(info),
        image: string(info, &["cloudinaryImageId"]).and_then(ImageRef::new),
        area_name: string(info, &["areaName", "locality"]).unwrap_or_default(),
        cost_for_two: string(info, &["costForTwo", "costForTwoMessage"]).unwrap_or_default(),
        delivery_time_minutes: delivery_time_minutes(info),
        is_pure_veg: info.get("veg").and_then(flag).unwrap_or(false),
        name,
    }
}

/// Ratings outside of 0..=5 are treated as absent.
pub(crate) fn avg_rating(info: &Object) -> Option<AvgRating> {
    let rating = info.get("avgRating").and_then(number).map(AvgRating::from)?;
    if !rating.is_valid() {
        log::debug!("Ignoring out of range rating {rating}");
        return None;
    }
    Some(rating)
}

pub(crate) fn delivery_time_minutes(info: &Object) -> Option<u32> {
    info.get("sla")
        .and_then(|sla| sla.get("deliveryTime"))
        .and_then(amount)
        .and_then(|m| u32::try_from(m).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn restaurant_card(restaurants: Value) -> Value {
        json!({
            "card": { "card": {
                "gridElements": { "infoWithStyle": { "restaurants": restaurants } }
            }}
        })
    }

    fn listing(cards: Vec<Value>) -> Value {
        json!({ "statusCode": 0, "data": { "cards": cards } })
    }

    #[test]
    fn extract_restaurants_from_first_matching_card() {
        let doc = listing(vec![
            json!({ "card": { "card": { "header": { "title": "What's on your mind?" } } } }),
            restaurant_card(json!([])),
            restaurant_card(json!([
                { "info": {
                    "id": "253", "name": "Cafe Coffee Day",
                    "cuisines": ["Beverages", "Cafe"], "avgRating": 4.2,
                    "cloudinaryImageId": "ccd", "areaName": "Koramangala",
                    "costForTwo": "₹400 for two", "sla": { "deliveryTime": 24 },
                    "veg": true
                }},
                { "info": { "id": 4711, "name": "Pizza Hut", "avgRating": "4.5" } }
            ])),
            restaurant_card(json!([{ "info": { "id": "999", "name": "Ignored" } }])),
        ]);
        let restaurants = extract_restaurants(&doc);
        assert_eq!(2, restaurants.len());

        let ccd = &restaurants[0];
        assert_eq!("253", ccd.id.as_str());
        assert_eq!("Cafe Coffee Day", ccd.name);
        assert_eq!("Beverages, Cafe", ccd.cuisines_label());
        assert_eq!(Some(AvgRating::from(4.2)), ccd.avg_rating);
        assert_eq!(ImageRef::new("ccd"), ccd.image);
        assert_eq!("Koramangala", ccd.area_name);
        assert_eq!("₹400 for two", ccd.cost_for_two);
        assert_eq!(Some(24), ccd.delivery_time_minutes);
        assert!(ccd.is_pure_veg);

        let pizza = &restaurants[1];
        assert_eq!("4711", pizza.id.as_str());
        assert_eq!(Some(AvgRating::from(4.5)), pizza.avg_rating);
        assert!(pizza.cuisines.is_empty());
        assert!(pizza.image.is_none());
    }

    #[test]
    fn every_extracted_restaurant_has_an_id() {
        let doc = listing(vec![restaurant_card(json!([
            { "info": { "name": "No id" } },
            { "info": { "id": "", "name": "Blank id" } },
            { "something": "else" },
            "not even an object",
        ]))]);
        let restaurants = extract_restaurants(&doc);
        assert_eq!(4, restaurants.len());
        assert!(restaurants.iter().all(|r| r.id.is_valid()));
    }

    #[test]
    fn synthesized_ids_are_stable_across_extractions() {
        let doc = listing(vec![restaurant_card(json!([
            { "info": { "name": "Anonymous" } },
            { "info": { "name": "Anonymous" } },
        ]))]);
        let first = extract_restaurants(&doc);
        let second = extract_restaurants(&doc);
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[1].id, second[1].id);
        assert_ne!(first[0].id, first[1].id);
    }

    #[test]
    fn accept_top_level_card_array() {
        let doc = json!({ "cards": [restaurant_card(json!([{ "info": { "id": "1" } }]))] });
        assert_eq!(1, extract_restaurants(&doc).len());
    }

    #[test]
    fn unrecognized_documents_yield_no_restaurants() {
        for doc in [
            json!(null),
            json!([]),
            json!("<html></html>"),
            json!({ "data": {} }),
            json!({ "data": { "cards": "nope" } }),
            json!({ "data": { "cards": [1, null, { "card": null }] } }),
            listing(vec![restaurant_card(json!({ "0": {} }))]),
        ] {
            assert!(extract_restaurants(&doc).is_empty());
        }
    }

    #[test]
    fn non_numeric_rating_is_absent() {
        let doc = listing(vec![restaurant_card(json!([
            { "info": { "id": "1", "avgRating": "--" } }
        ]))]);
        assert_eq!(None, extract_restaurants(&doc)[0].avg_rating);
    }

    #[test]
    fn out_of_range_rating_is_absent() {
        let doc = listing(vec![restaurant_card(json!([
            { "info": { "id": "1", "avgRating": 7.5 } },
            { "info": { "id": "2", "avgRating": -1 } },
            { "info": { "id": "3", "avgRating": 5 } }
        ]))]);
        let ratings: Vec<_> = extract_restaurants(&doc)
            .into_iter()
            .map(|r| r.avg_rating)
            .collect();
        assert_eq!(vec![None, None, Some(AvgRating::max())], ratings);
    }
}
