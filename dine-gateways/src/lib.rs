//! HTTP gateways to the upstream food-delivery API.

mod http;
pub mod listing;
pub mod menu;

pub use self::{
    http::{HttpConfig, DEFAULT_USER_AGENT},
    listing::{HttpListing, ListingEndpoint},
    menu::{HttpMenu, MenuEndpoint, RESTAURANT_ID_PLACEHOLDER},
};
