//! # dine-core
//!
//! Extraction of normalized records from upstream listing and menu
//! documents, and the client-side filters that operate on them.
//!
//! Nothing in here performs I/O: documents are fetched through the
//! traits in [`gateways`].

pub mod entities {
    pub use dine_entities::{
        diet::*, id::*, image::*, menu::*, price::*, rating::*, restaurant::*, theme::*,
    };
}

pub mod extract;
pub mod gateways;
pub mod text;
pub mod usecases;
pub mod util;
