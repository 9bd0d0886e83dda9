//! View state of the listing and menu pages.
//!
//! Each view owns the records it fetched, derives everything it
//! displays from the last successful fetch and ignores completions of
//! superseded fetches.

pub mod error;
pub mod fallback;
pub mod listing;
pub mod menu;
pub mod theme;
pub mod view;

pub mod prelude {
    pub use super::{
        error::AppError,
        listing::{ListingView, SearchOutcome},
        menu::MenuView,
        theme::{ThemeContext, ThemeSwitch},
        view::ViewStatus,
    };
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use dine_core::{entities::*, gateways::*, usecases, util::sequence::*};

#[cfg(test)]
pub(crate) mod tests;
