use crate::{diet::*, id::*, image::*, price::*, restaurant::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id          : Id,
    pub name        : String,
    pub description : Option<String>,
    pub price       : Option<Price>,
    pub image       : Option<ImageRef>,
    pub diet        : Diet,
}

impl MenuItem {
    pub fn display_price(&self) -> String {
        display_price(self.price)
    }
}

/// A titled group of menu items.
///
/// Nested categories of an upstream section are broken out into
/// their own sections with `is_category` set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItem>,
    pub is_category: bool,
}

/// Everything the menu page displays for a single restaurant.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MenuPage {
    pub detail: RestaurantDetail,
    /// The recommended section, or the first section if there is none.
    pub featured: Option<MenuSection>,
    pub sections: Vec<MenuSection>,
}

impl MenuPage {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
