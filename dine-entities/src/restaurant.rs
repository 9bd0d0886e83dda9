use crate::{id::*, image::*, rating::*};

/// A restaurant as shown on the listing page.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantSummary {
    pub id                    : Id,
    pub name                  : String,
    pub cuisines              : Vec<String>,
    pub avg_rating            : Option<AvgRating>,
    pub image                 : Option<ImageRef>,
    pub area_name             : String,
    pub cost_for_two          : String,
    pub delivery_time_minutes : Option<u32>,
    pub is_pure_veg           : bool,
}

impl RestaurantSummary {
    pub fn cuisines_label(&self) -> String {
        self.cuisines.join(", ")
    }

    pub fn is_rated_above(&self, threshold: f64) -> bool {
        self.avg_rating.is_some_and(|r| r.exceeds(threshold))
    }
}

/// Restaurant metadata as shown on the menu page.
///
/// Optional upstream attributes default to empty strings or zero.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RestaurantDetail {
    pub id                    : Id,
    pub name                  : String,
    pub cuisines              : Vec<String>,
    pub cost_for_two          : String,
    pub avg_rating            : AvgRating,
    pub total_ratings         : String,
    pub area_name             : String,
    pub city                  : String,
    pub image                 : Option<ImageRef>,
    pub delivery_time_minutes : Option<u32>,
    pub is_pure_veg           : bool,
}

impl RestaurantDetail {
    pub fn cuisines_label(&self) -> String {
        self.cuisines.join(", ")
    }

    pub fn locality(&self) -> String {
        match (self.area_name.is_empty(), self.city.is_empty()) {
            (false, false) => format!("{}, {}", self.area_name, self.city),
            (false, true) => self.area_name.clone(),
            (true, false) => self.city.clone(),
            (true, true) => String::new(),
        }
    }
}
