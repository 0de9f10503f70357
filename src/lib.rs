//! Jewelry Catalog Library
//!
//! Catalog data model for the jewelry shop: groups and items loaded once from
//! a JSON document, a capped "top items" view per group, lookups by id and
//! type, and the shopping cart.

pub mod cart;
pub mod catalog;
pub mod catalog_store;
pub mod config;

// Re-export commonly used types for convenience
pub use cart::{CartLine, CartStore};
pub use catalog::{CatalogGroup, CatalogItem, JewelryType, TileTemplate};
pub use catalog_store::{CatalogError, CatalogStore};
