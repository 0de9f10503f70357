use super::{CatalogError, CatalogSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The sample catalog shipped with the crate.
const BUNDLED_CATALOG: &str = include_str!("../../data/jewelry_data.json");

/// Reads the catalog from a JSON file on disk.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileCatalogSource {
            path: path.as_ref().to_owned(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn read_catalog(&self) -> Result<String, CatalogError> {
        debug!("Reading catalog file {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| CatalogError::SourceUnavailable {
                location: self.location(),
                reason: err.to_string(),
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a catalog document held in memory.
pub struct StaticCatalogSource {
    name: String,
    text: String,
}

impl StaticCatalogSource {
    pub fn new(name: &str, text: &str) -> Self {
        StaticCatalogSource {
            name: name.to_owned(),
            text: text.to_owned(),
        }
    }

    pub fn bundled() -> Self {
        Self::new("bundled:jewelry_data.json", BUNDLED_CATALOG)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn read_catalog(&self) -> Result<String, CatalogError> {
        Ok(self.text.clone())
    }

    fn location(&self) -> String {
        self.name.clone()
    }
}
