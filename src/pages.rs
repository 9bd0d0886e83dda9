//! Plain text rendering of the pages.

use std::io::{self, Write};

use dine_application::prelude::{SearchOutcome, ViewStatus};
use dine_entities::{
    diet::DietFilter,
    menu::{MenuItem, MenuSection},
    restaurant::{RestaurantDetail, RestaurantSummary},
    theme::Theme,
};
use itertools::Itertools;

use crate::config::Images;

const NAVIGATION: &[(&str, &str)] = &[
    ("Home", "dinefinder list"),
    ("About us", "dinefinder about"),
    ("Contact us", "dinefinder contact"),
    ("Grocery", "dinefinder grocery"),
];

pub fn header<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    let nav = NAVIGATION
        .iter()
        .map(|(title, cmd)| format!("{title} ({cmd})"))
        .join(" | ");
    writeln!(out, "DineFinder [{theme} theme]")?;
    writeln!(out, "{nav}")?;
    writeln!(out)
}

pub fn listing<W: Write>(
    out: &mut W,
    status: &ViewStatus,
    restaurants: &[RestaurantSummary],
    search: Option<(&str, SearchOutcome)>,
    images: &Images,
) -> io::Result<()> {
    match status {
        ViewStatus::Fallback(msg) => {
            writeln!(out, "Could not load restaurants: {msg}")?;
            writeln!(out, "Showing locally stored restaurants instead.")?;
            writeln!(out)?;
        }
        ViewStatus::Failed(msg) => {
            writeln!(out, "Error: {msg}")?;
            return Ok(());
        }
        ViewStatus::Empty => {
            return writeln!(out, "No restaurants found nearby.");
        }
        ViewStatus::Idle | ViewStatus::Loading | ViewStatus::Ready => {}
    }
    match search {
        Some((text, SearchOutcome::NoResults)) => {
            return writeln!(out, "No restaurants match \"{text}\".");
        }
        Some((text, SearchOutcome::Found(count))) => {
            writeln!(out, "{count} restaurant(s) match \"{text}\".")?;
            writeln!(out)?;
        }
        None => {}
    }
    for r in restaurants {
        restaurant_card(out, r, images)?;
    }
    Ok(())
}

fn restaurant_card<W: Write>(
    out: &mut W,
    r: &RestaurantSummary,
    images: &Images,
) -> io::Result<()> {
    let rating = r
        .avg_rating
        .map(|rating| rating.to_string())
        .unwrap_or_else(|| "--".to_string());
    write!(out, "{}  * {rating}", r.name)?;
    if let Some(minutes) = r.delivery_time_minutes {
        write!(out, "  {minutes} mins")?;
    }
    if r.is_pure_veg {
        write!(out, "  [pure veg]")?;
    }
    writeln!(out)?;
    if !r.cuisines.is_empty() {
        writeln!(out, "    {}", r.cuisines_label())?;
    }
    let place = [r.area_name.as_str(), r.cost_for_two.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .join(" - ");
    if !place.is_empty() {
        writeln!(out, "    {place}")?;
    }
    if let Some(image) = &r.image {
        writeln!(
            out,
            "    {}",
            image.url(&images.base_url, &images.card_transform)
        )?;
    }
    writeln!(out, "    menu: dinefinder menu {}", r.id)?;
    writeln!(out)
}

pub fn menu<W: Write>(
    out: &mut W,
    status: &ViewStatus,
    detail: Option<&RestaurantDetail>,
    featured: Option<&MenuSection>,
    sections: &[MenuSection],
    filter: DietFilter,
    images: &Images,
) -> io::Result<()> {
    if let ViewStatus::Failed(msg) = status {
        writeln!(out, "Error: {msg}")?;
        return writeln!(out, "Run the same command again (or with --retries) to retry.");
    }
    let Some(detail) = detail else {
        return Ok(());
    };
    restaurant_info(out, detail, images)?;
    if matches!(status, ViewStatus::Empty) {
        return writeln!(out, "No menu items available.");
    }
    writeln!(out, "Showing: {filter}")?;
    writeln!(out)?;
    if sections.is_empty() {
        match featured {
            Some(section) => menu_section(out, section, true, images)?,
            None => writeln!(out, "No {filter} items on the menu.")?,
        }
        return Ok(());
    }
    let featured_title = featured.map(|s| s.title.as_str());
    for section in sections {
        let is_featured = !section.is_category && featured_title == Some(section.title.as_str());
        menu_section(out, section, is_featured, images)?;
    }
    Ok(())
}

fn restaurant_info<W: Write>(
    out: &mut W,
    d: &RestaurantDetail,
    images: &Images,
) -> io::Result<()> {
    writeln!(out, "{}", d.name)?;
    if !d.cuisines.is_empty() {
        writeln!(out, "{}", d.cuisines_label())?;
    }
    let locality = d.locality();
    if !locality.is_empty() {
        writeln!(out, "{locality}")?;
    }
    let facts = [
        Some(format!("* {}", d.avg_rating)),
        (!d.total_ratings.is_empty()).then(|| d.total_ratings.clone()),
        (!d.cost_for_two.is_empty()).then(|| d.cost_for_two.clone()),
        d.delivery_time_minutes.map(|m| format!("{m} mins")),
        d.is_pure_veg.then(|| "pure veg".to_string()),
    ]
    .into_iter()
    .flatten()
    .join(" | ");
    writeln!(out, "{facts}")?;
    if let Some(image) = &d.image {
        writeln!(out, "{}", image.url(&images.base_url, &images.card_transform))?;
    }
    writeln!(out)
}

fn menu_section<W: Write>(
    out: &mut W,
    section: &MenuSection,
    is_featured: bool,
    images: &Images,
) -> io::Result<()> {
    let indent = if section.is_category { "  " } else { "" };
    let marker = if is_featured { " (featured)" } else { "" };
    writeln!(
        out,
        "{indent}{}{marker} ({})",
        section.title,
        section.items.len()
    )?;
    for item in &section.items {
        menu_item(out, item, indent, images)?;
    }
    writeln!(out)
}

fn menu_item<W: Write>(
    out: &mut W,
    item: &MenuItem,
    indent: &str,
    images: &Images,
) -> io::Result<()> {
    writeln!(
        out,
        "{indent}  [{}] {}  {}",
        item.diet,
        item.name,
        item.display_price()
    )?;
    if let Some(description) = &item.description {
        writeln!(out, "{indent}      {description}")?;
    }
    if let Some(image) = &item.image {
        writeln!(
            out,
            "{indent}      {}",
            image.url(&images.base_url, &images.item_transform)
        )?;
    }
    Ok(())
}

pub fn about<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Our Story")?;
    writeln!(out, "Delivering happiness since 2023")?;
    writeln!(out)?;
    writeln!(out, "Our Mission")?;
    writeln!(
        out,
        "Bring the best food of your neighbourhood to your doorstep, fresh and fast."
    )?;
    writeln!(out)?;
    writeln!(out, "Meet Our Team")?;
    for (name, role) in [
        ("Sarah Johnson", "Head Chef"),
        ("Michael Chen", "Master Baker"),
        ("Elena Rodriguez", "Pastry Chef"),
    ] {
        writeln!(out, "  {name} - {role}")?;
    }
    Ok(())
}

pub fn contact<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Get In Touch")?;
    writeln!(
        out,
        "We'd love to hear from you. Send us a message and we'll respond as soon as possible."
    )?;
    writeln!(out)?;
    for (title, text) in [
        ("Our Location", "123 Foodie Street, Cuisine City, FC 12345"),
        ("Phone Number", "+1 (555) 123-4567"),
        ("Email Address", "hello@foodiehub.com"),
    ] {
        writeln!(out, "{title}: {text}")?;
    }
    Ok(())
}

pub fn grocery<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Grocery Store")?;
    writeln!(out, "Category: Grocery")?;
    writeln!(out, "Coming soon.")
}
