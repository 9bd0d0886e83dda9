//! Structural extraction from loosely typed upstream documents.
//!
//! The upstream API wraps every page section into generic "card"
//! objects whose nesting drifts between API versions. Each known
//! location is modelled as a named [`Strategy`]; strategies are tried in
//! priority order and the first one that yields something wins.

use serde_json::Value;

pub mod listing;
pub mod menu;
pub mod value;

pub use self::{listing::extract_restaurants, menu::extract_menu_page};

/// A named location inside an upstream document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub name: &'static str,
    /// JSON pointer (RFC 6901) relative to the document root.
    pub pointer: &'static str,
}

impl Strategy {
    pub const fn new(name: &'static str, pointer: &'static str) -> Self {
        Self { name, pointer }
    }

    pub fn locate<'v>(&self, doc: &'v Value) -> Option<&'v Value> {
        doc.pointer(self.pointer)
    }
}

/// Apply `strategies` in order and return the first accepted result.
///
/// Later strategies are never consulted once one succeeds.
pub fn first_match<'v, T>(
    strategies: &[Strategy],
    doc: &'v Value,
    accept: impl Fn(&'v Value) -> Option<T>,
) -> Option<(&'static str, T)> {
    strategies.iter().find_map(|strategy| {
        let found = strategy.locate(doc).and_then(&accept)?;
        log::debug!("Extraction strategy '{}' matched", strategy.name);
        Some((strategy.name, found))
    })
}

/// Accepts non-empty arrays.
pub fn non_empty_array(value: &Value) -> Option<&Vec<Value>> {
    value.as_array().filter(|a| !a.is_empty())
}

/// Accepts non-empty objects.
pub fn non_empty_object(value: &Value) -> Option<&serde_json::Map<String, Value>> {
    value.as_object().filter(|o| !o.is_empty())
}
