//! CatalogSource trait definition.
//!
//! A source produces the raw catalog document. The store decides when to
//! read it (at most once per successful load) and how to parse it.

use super::CatalogError;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Read the whole catalog document.
    ///
    /// Failures to obtain the document are `CatalogError::SourceUnavailable`.
    async fn read_catalog(&self) -> Result<String, CatalogError>;

    /// Human readable location, used in logs and errors.
    fn location(&self) -> String;
}
