pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{menu_item_builder::*, restaurant_builder::*};

pub mod restaurant_builder {

    use super::*;
    use crate::{id::*, image::*, restaurant::*};

    #[derive(Debug)]
    pub struct RestaurantBuild {
        restaurant: RestaurantSummary,
    }

    impl RestaurantBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.restaurant.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.restaurant.name = name.into();
            self
        }
        pub fn cuisines(mut self, cuisines: Vec<impl Into<String>>) -> Self {
            self.restaurant.cuisines = cuisines.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn avg_rating(mut self, rating: f64) -> Self {
            self.restaurant.avg_rating = Some(rating.into());
            self
        }
        pub fn image(mut self, image_id: &str) -> Self {
            self.restaurant.image = ImageRef::new(image_id);
            self
        }
        pub fn finish(self) -> RestaurantSummary {
            self.restaurant
        }
    }

    impl Builder for RestaurantSummary {
        type Build = RestaurantBuild;
        fn build() -> RestaurantBuild {
            RestaurantBuild {
                restaurant: RestaurantSummary {
                    id: Id::synthesize("", 0),
                    name: "".into(),
                    cuisines: vec![],
                    avg_rating: None,
                    image: None,
                    area_name: "".into(),
                    cost_for_two: "".into(),
                    delivery_time_minutes: None,
                    is_pure_veg: false,
                },
            }
        }
    }
}

pub mod menu_item_builder {

    use super::*;
    use crate::{diet::*, id::*, menu::*};

    #[derive(Debug)]
    pub struct MenuItemBuild {
        item: MenuItem,
    }

    impl MenuItemBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.item.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.item.name = name.into();
            self
        }
        pub fn price(mut self, minor_units: u64) -> Self {
            self.item.price = Some(minor_units.into());
            self
        }
        pub fn diet(mut self, diet: Diet) -> Self {
            self.item.diet = diet;
            self
        }
        pub fn finish(self) -> MenuItem {
            self.item
        }
    }

    impl Builder for MenuItem {
        type Build = MenuItemBuild;
        fn build() -> MenuItemBuild {
            MenuItemBuild {
                item: MenuItem {
                    id: Id::synthesize("", 0),
                    name: "".into(),
                    description: None,
                    price: None,
                    image: None,
                    diet: Diet::NonVeg,
                },
            }
        }
    }
}
