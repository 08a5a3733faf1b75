//! # Catalog Store
//!
//! The catalog is the fixed list of items the page presents. It is built once
//! at startup and never mutated afterwards: every other component only reads
//! from it, either by walking the ordered sequence or by looking an item up by
//! its identifier.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryCatalog`]: items held in memory, including the built-in
//!   reference catalog of the menu page.
//! - [`fs::FileCatalog`]: items read from a JSON file (an array of items).
//!
//! Both validate the catalog invariants when constructed: identifiers are
//! unique, names and image references are non-empty and prices are
//! non-negative. A store that violates them is rejected outright rather than
//! served partially.

use crate::error::{CartaError, Result};
use crate::model::Item;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

/// Read-only access to the catalog.
pub trait CatalogStore {
    /// All items, in catalog order.
    fn items(&self) -> &[Item];

    /// Look an item up by its identifier.
    fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items().iter().find(|item| item.id == id)
    }

    /// Distinct tags in order of first appearance.
    fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.items().iter().flat_map(|item| item.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }
}

/// Checks the catalog invariants.
pub fn validate(items: &[Item]) -> Result<()> {
    let mut ids = HashSet::new();
    for item in items {
        if !ids.insert(item.id.as_str()) {
            return Err(CartaError::Catalog(format!(
                "Duplicate item id: {}",
                item.id
            )));
        }
        if item.name.trim().is_empty() {
            return Err(CartaError::Catalog(format!(
                "Item {} has an empty name",
                item.id
            )));
        }
        if item.image.trim().is_empty() {
            return Err(CartaError::Catalog(format!(
                "Item {} has no image",
                item.id
            )));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(CartaError::Catalog(format!(
                "Item {} has an invalid price: {}",
                item.id, item.price
            )));
        }
    }
    Ok(())
}
