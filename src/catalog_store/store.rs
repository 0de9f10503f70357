//! Load-once catalog cache and its query surface.

use super::error::{find_unique, LookupMiss};
use super::parse::{parse_catalog, ParseOptions};
use super::{CatalogError, CatalogSource, FileCatalogSource, StaticCatalogSource};
use crate::catalog::{CatalogGroup, CatalogItem, ItemImage, JewelryType};
use crate::config::AppConfig;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// In-memory catalog, read from its source at most once.
///
/// Every query loads the catalog first if needed. Concurrent first callers
/// share a single in-flight load; a failed load leaves the cache empty so a
/// later query retries it. Once loaded, the catalog is kept for the lifetime
/// of the store.
///
/// Lookups are linear scans, the catalog is small.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    options: ParseOptions,
    image_base: PathBuf,
    groups: OnceCell<Vec<CatalogGroup>>,
}

impl CatalogStore {
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self::with_options(source, ParseOptions::default(), PathBuf::from("."))
    }

    pub fn with_options(
        source: Box<dyn CatalogSource>,
        options: ParseOptions,
        image_base: PathBuf,
    ) -> Self {
        CatalogStore {
            source,
            options,
            image_base,
            groups: OnceCell::new(),
        }
    }

    /// Builds a store reading from the configured catalog file, or from the
    /// bundled catalog when none is configured.
    pub fn from_config(config: &AppConfig) -> Self {
        let source: Box<dyn CatalogSource> = match &config.catalog_path {
            Some(path) => Box::new(FileCatalogSource::new(path)),
            None => Box::new(StaticCatalogSource::bundled()),
        };
        let options = ParseOptions {
            strict_unique_ids: config.strict_unique_ids,
        };
        Self::with_options(source, options, config.image_base.clone())
    }

    pub fn is_loaded(&self) -> bool {
        self.groups.initialized()
    }

    /// Groups, if the catalog has been loaded already. Never triggers a load.
    pub fn loaded_groups(&self) -> Option<&[CatalogGroup]> {
        self.groups.get().map(|groups| groups.as_slice())
    }

    async fn load(&self) -> Result<Vec<CatalogGroup>, CatalogError> {
        let location = self.source.location();
        info!("Loading catalog from {}...", location);
        let text = self.source.read_catalog().await.inspect_err(|err| {
            warn!("Could not read catalog: {}", err);
        })?;
        let groups = parse_catalog(&text, self.options).inspect_err(|err| {
            warn!("Could not parse catalog from {}: {}", location, err);
        })?;
        info!(
            "Catalog has:\n{} groups\n{} items",
            groups.len(),
            groups.iter().map(|g| g.items().len()).sum::<usize>()
        );
        Ok(groups)
    }

    /// Loads the catalog unless it is already cached.
    pub async fn load_if_needed(&self) -> Result<(), CatalogError> {
        self.groups.get_or_try_init(|| self.load()).await?;
        Ok(())
    }

    /// All groups in load order.
    pub async fn get_all_groups(&self) -> Result<&[CatalogGroup], CatalogError> {
        let groups = self.groups.get_or_try_init(|| self.load()).await?;
        Ok(groups.as_slice())
    }

    /// The group with the given id. Absent when no group, or more than one
    /// group, has that id.
    pub async fn get_group(&self, unique_id: &str) -> Result<Option<&CatalogGroup>, CatalogError> {
        let groups = self.get_all_groups().await?;
        let matches = groups.iter().filter(|g| g.unique_id() == unique_id);
        Ok(Self::unique_or_log("group", unique_id, matches))
    }

    /// All groups of the given type in load order, absent when there are none.
    pub async fn get_groups_by_type(
        &self,
        jewelry_type: JewelryType,
    ) -> Result<Option<Vec<&CatalogGroup>>, CatalogError> {
        let groups = self.get_all_groups().await?;
        let matches: Vec<&CatalogGroup> = groups
            .iter()
            .filter(|g| g.jewelry_type() == jewelry_type)
            .collect();
        if matches.is_empty() {
            debug!("No groups of type {}", jewelry_type);
            return Ok(None);
        }
        Ok(Some(matches))
    }

    /// The item with the given id across all groups. Absent when no item, or
    /// more than one item, has that id.
    pub async fn get_item(&self, unique_id: &str) -> Result<Option<&CatalogItem>, CatalogError> {
        let groups = self.get_all_groups().await?;
        let matches = groups
            .iter()
            .flat_map(|g| g.items().iter())
            .filter(|i| i.unique_id() == unique_id)
            .map(|i| i.as_ref());
        Ok(Self::unique_or_log("item", unique_id, matches))
    }

    /// Resolves an item or group image against the configured image base.
    pub fn image_path<'a>(&self, image: &'a ItemImage) -> Option<&'a Path> {
        image.resolve(&self.image_base)
    }

    fn unique_or_log<T, I>(kind: &str, unique_id: &str, matches: I) -> Option<T>
    where
        I: IntoIterator<Item = T>,
    {
        match find_unique(matches) {
            Ok(found) => Some(found),
            Err(LookupMiss::NotFound) => {
                debug!("No {} with id {}", kind, unique_id);
                None
            }
            Err(LookupMiss::Ambiguous { matches }) => {
                warn!(
                    "{} {}s share id {}, treating it as not found",
                    matches, kind, unique_id
                );
                None
            }
        }
    }
}
