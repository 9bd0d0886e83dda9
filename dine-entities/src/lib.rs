//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # dine-entities
//!
//! Reusable, agnostic domain entities for dinefinder.
//!
//! The entities only describe the normalized records that the rest of the
//! workspace works with. They know nothing about the upstream payloads
//! they are extracted from.

pub mod diet;
pub mod id;
pub mod image;
pub mod menu;
pub mod price;
pub mod rating;
pub mod restaurant;
pub mod theme;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
