mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog_path: Option<PathBuf>,
    pub image_base: Option<PathBuf>,
    pub strict_unique_ids: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog document to read. `None` means the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
    /// Base directory that item image paths are relative to.
    pub image_base: PathBuf,
    pub strict_unique_ids: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            image_base: PathBuf::from("."),
            strict_unique_ids: false,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let defaults = AppConfig::default();

        let catalog_path = file
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| cli.catalog_path.clone());

        if let Some(path) = &catalog_path {
            if !path.is_file() {
                bail!("Catalog file does not exist: {:?}", path);
            }
        }

        let image_base = file
            .image_base
            .map(PathBuf::from)
            .or_else(|| cli.image_base.clone())
            .unwrap_or(defaults.image_base);

        let strict_unique_ids = file.strict_unique_ids.unwrap_or(cli.strict_unique_ids);

        Ok(Self {
            catalog_path,
            image_base,
            strict_unique_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_use_bundled_catalog() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.image_base, PathBuf::from("."));
        assert!(!config.strict_unique_ids);
    }

    #[test]
    fn test_file_overrides_cli() {
        let dir = TempDir::new().unwrap();
        let cli_catalog = dir.path().join("cli.json");
        let file_catalog = dir.path().join("file.json");
        fs::write(&cli_catalog, "{}").unwrap();
        fs::write(&file_catalog, "{}").unwrap();

        let cli = CliConfig {
            catalog_path: Some(cli_catalog),
            image_base: Some(PathBuf::from("/cli")),
            strict_unique_ids: false,
        };
        let file = FileConfig {
            catalog_path: Some(file_catalog.to_string_lossy().to_string()),
            image_base: None,
            strict_unique_ids: Some(true),
        };

        let config = AppConfig::resolve(&cli, Some(file)).unwrap();
        assert_eq!(config.catalog_path, Some(file_catalog));
        assert_eq!(config.image_base, PathBuf::from("/cli"));
        assert!(config.strict_unique_ids);
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cli = CliConfig {
            catalog_path: Some(dir.path().join("missing.json")),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }
}
