mod error;
mod parse;
mod sources;
mod store;
mod trait_def;
mod validation;

pub use error::{find_unique, CatalogError, LookupMiss};
pub use parse::{parse_catalog, ParseOptions};
pub use sources::{FileCatalogSource, StaticCatalogSource};
pub use store::CatalogStore;
pub use trait_def::CatalogSource;
pub use validation::DuplicateId;
