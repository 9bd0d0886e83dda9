mod error;
mod filter_menu;
mod filter_top_rated;
mod load_listing;
mod load_menu;
mod search_restaurants;


pub use self::{
    error::Error, filter_menu::*, filter_top_rated::*, load_listing::*, load_menu::*,
    search_restaurants::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::*};
}
