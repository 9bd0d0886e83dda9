use std::collections::HashSet;

use serde_json::Value;

use super::{
    first_match,
    listing::{avg_rating, delivery_time_minutes},
    non_empty_array, non_empty_object,
    value::*,
    Strategy,
};
use crate::{entities::*, gateways::FetchError, text::eq_ignore_case};

pub const MALFORMED_MENU_MESSAGE: &str = "The menu data is not in the expected format.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to load menu. Please try again later.";

const DEFAULT_SECTION_TITLE: &str = "Menu";
const FEATURED_SECTION_TITLE: &str = "recommended";

/// Locations of the restaurant metadata, relative to the `data` envelope.
pub const RESTAURANT_INFO_STRATEGIES: &[Strategy] = &[
    Strategy::new("info-card-0", "/cards/0/card/card/info"),
    Strategy::new("info-card-2", "/cards/2/card/card/info"),
];

/// Locations of the regular menu card group, relative to the `data` envelope.
pub const MENU_GROUP_STRATEGIES: &[Strategy] = &[
    Strategy::new("regular-card-2", "/cards/2/groupedCard/cardGroupMap/REGULAR/cards"),
    Strategy::new("regular-card-3", "/cards/3/groupedCard/cardGroupMap/REGULAR/cards"),
    Strategy::new("regular-card-5", "/cards/5/groupedCard/cardGroupMap/REGULAR/cards"),
    Strategy::new("regular-card-4", "/cards/4/groupedCard/cardGroupMap/REGULAR/cards"),
];

/// Locations of the item object inside an item card, in priority order.
const ITEM_STRATEGIES: &[Strategy] = &[
    Strategy::new("card-info", "/card/info"),
    Strategy::new("dish-info", "/dishInfo"),
    Strategy::new("info", "/info"),
];

/// Unwrap the `data` envelope of a menu response.
///
/// A non-zero application status code is reported with the upstream
/// message. It is checked first because closed restaurants come
/// without any `data`.
pub fn unwrap_menu_envelope(doc: &Value) -> Result<&Value, FetchError> {
    if let Some(code) = doc.get("statusCode").filter(|c| !c.is_null()) {
        if code.as_i64() != Some(0) {
            let message = doc
                .get("message")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(UPSTREAM_FAILURE_MESSAGE);
            return Err(FetchError::Upstream(message.to_string()));
        }
    }
    doc.get("data")
        .filter(|data| data.is_object())
        .ok_or_else(|| FetchError::MalformedPayload(MALFORMED_MENU_MESSAGE.to_string()))
}

/// Extract restaurant metadata and menu sections from the `data`
/// envelope of a menu response.
pub fn extract_menu_page(data: &Value) -> MenuPage {
    let detail = extract_restaurant_detail(data);
    let Some((strategy, group)) = first_match(MENU_GROUP_STRATEGIES, data, non_empty_array) else {
        log::debug!("No menu card group found for '{}'", detail.name);
        return MenuPage {
            detail,
            featured: None,
            sections: vec![],
        };
    };
    log::debug!("Using menu card group '{strategy}' with {} entries", group.len());
    MenuPage {
        featured: featured_section(group),
        sections: catalog_sections(group),
        detail,
    }
}

pub fn extract_restaurant_detail(data: &Value) -> RestaurantDetail {
    let Some((_, info)) = first_match(RESTAURANT_INFO_STRATEGIES, data, non_empty_object) else {
        return RestaurantDetail::default();
    };
    RestaurantDetail {
        id: string_or_number(info, &["id"]).map(Id::from).unwrap_or_default(),
        name: string(info, &["name"]).unwrap_or_default(),
        cuisines: labels(info.get("cuisines")),
        cost_for_two: string(info, &["costForTwoMessage", "costForTwo"]).unwrap_or_default(),
        avg_rating: avg_rating(info).unwrap_or_default(),
        total_ratings: string(info, &["totalRatingsString"]).unwrap_or_default(),
        area_name: string(info, &["areaName", "locality"]).unwrap_or_default(),
        city: string(info, &["city"]).unwrap_or_default(),
        image: string(info, &["cloudinaryImageId"]).and_then(ImageRef::new),
        delivery_time_minutes: delivery_time_minutes(info),
        is_pure_veg: info.get("veg").and_then(flag).unwrap_or(false),
    }
}

fn section_card(entry: &Value) -> Option<&Object> {
    entry.pointer("/card/card").and_then(Value::as_object)
}

fn item_cards(card: &Object) -> &[Value] {
    card.get("itemCards")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Where an item card sits inside the card group.
///
/// Synthesized item ids are derived from it, so they are unique
/// within a page and the featured section shares its ids with the
/// catalog.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Section(usize),
    Category(usize, usize),
}

impl Slot {
    fn scoped_name(self, name: &str) -> String {
        match self {
            Self::Section(entry) => format!("{entry}/{name}"),
            Self::Category(entry, category) => format!("{entry}/{category}/{name}"),
        }
    }
}

/// The section titled "recommended", or the first one.
fn featured_section(group: &[Value]) -> Option<MenuSection> {
    let recommended = group.iter().position(|entry| {
        section_card(entry)
            .and_then(|card| card.get("title"))
            .and_then(Value::as_str)
            .is_some_and(|title| eq_ignore_case(title, FEATURED_SECTION_TITLE))
    });
    let index = recommended.unwrap_or(0);
    let card = section_card(group.get(index)?)?;
    Some(MenuSection {
        title: string(card, &["title"]).unwrap_or_else(|| DEFAULT_SECTION_TITLE.to_string()),
        items: menu_items(item_cards(card), Slot::Section(index)),
        is_category: false,
    })
}

/// All sections of the card group, with nested categories broken out.
fn catalog_sections(group: &[Value]) -> Vec<MenuSection> {
    let mut seen_titles = HashSet::new();
    let mut sections = vec![];
    for (index, card) in group
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| section_card(entry).map(|card| (i, card)))
    {
        let own_items = item_cards(card);
        let categories = card
            .get("categories")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        if own_items.is_empty() && categories.is_empty() {
            continue;
        }
        let title = string(card, &["title"]).unwrap_or_else(|| DEFAULT_SECTION_TITLE.to_string());
        if !seen_titles.insert(title.clone()) {
            log::debug!("Skipping duplicate menu section '{title}'");
            continue;
        }
        for (category_index, category) in categories
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_object().map(|c| (i, c)))
        {
            let items = item_cards(category);
            if items.is_empty() {
                continue;
            }
            sections.push(MenuSection {
                title: string(category, &["title"]).unwrap_or_else(|| title.clone()),
                items: menu_items(items, Slot::Category(index, category_index)),
                is_category: true,
            });
        }
        if !own_items.is_empty() {
            sections.push(MenuSection {
                title,
                items: menu_items(own_items, Slot::Section(index)),
                is_category: false,
            });
        }
    }
    sections
}

fn menu_items(cards: &[Value], slot: Slot) -> Vec<MenuItem> {
    cards
        .iter()
        .enumerate()
        .filter_map(|(position, card)| {
            let info = first_match(ITEM_STRATEGIES, card, Value::as_object)
                .map(|(_, info)| info)
                .or_else(|| card.as_object())?;
            Some(menu_item_from_info(info, slot, position))
        })
        .collect()
}

fn menu_item_from_info(info: &Object, slot: Slot, position: usize) -> MenuItem {
    let name = string(info, &["name"]).unwrap_or_default();
    let id = string_or_number(info, &["id"])
        .map(Id::from)
        .unwrap_or_else(|| Id::synthesize(&slot.scoped_name(&name), position));
    MenuItem {
        id,
        description: string(info, &["description"]),
        price: price(info),
        image: string(info, &["imageId"]).and_then(ImageRef::new),
        diet: classify_diet(info),
        name,
    }
}

/// `price` takes precedence over `defaultPrice`; zero counts as absent.
fn price(info: &Object) -> Option<Price> {
    ["price", "defaultPrice"]
        .iter()
        .filter_map(|key| info.get(*key))
        .filter_map(amount)
        .find(|units| *units > 0)
        .map(Price::from_minor_units)
}

/// Classify a menu item as vegetarian or not.
///
/// Precedence:
/// 1. an explicit `isVeg`/`is_veg` flag,
/// 2. an explicit `is_vegetarian` boolean,
/// 3. a `vegClassifier` of `VEG` or `VEGETARIAN`, either inside
///    `itemAttribute` or on the item itself.
///
/// Anything else is non-vegetarian.
pub fn classify_diet(info: &Object) -> Diet {
    if let Some(is_veg) = ["isVeg", "is_veg"]
        .iter()
        .filter_map(|key| info.get(*key))
        .find_map(flag)
    {
        return is_veg.into();
    }
    if let Some(is_veg) = info.get("is_vegetarian").and_then(Value::as_bool) {
        return is_veg.into();
    }
    let classifier = info
        .get("itemAttribute")
        .and_then(|attr| attr.get("vegClassifier"))
        .or_else(|| info.get("vegClassifier"))
        .and_then(Value::as_str)
        .map(str::trim);
    matches!(
        classifier,
        Some(c) if c.eq_ignore_ascii_case("VEG") || c.eq_ignore_ascii_case("VEGETARIAN")
    )
    .into()
}
