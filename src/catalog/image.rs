use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Image reference of a catalog entry.
///
/// The relative path is resolved against the application image base on first
/// access and cached for the lifetime of the entry.
#[derive(Debug, Default)]
pub struct ItemImage {
    path: Option<String>,
    resolved: OnceLock<Option<PathBuf>>,
}

impl ItemImage {
    /// An empty path means no image was supplied.
    pub fn new(path: &str) -> Self {
        let path = if path.trim().is_empty() {
            None
        } else {
            Some(path.to_owned())
        };
        ItemImage {
            path,
            resolved: OnceLock::new(),
        }
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Resolves the image against `base`. The base is fixed for the process,
    /// so the first resolution is the one that sticks.
    pub fn resolve(&self, base: &Path) -> Option<&Path> {
        self.resolved
            .get_or_init(|| {
                self.path
                    .as_ref()
                    .map(|p| base.join(p.trim_start_matches('/')))
            })
            .as_deref()
    }
}

impl Clone for ItemImage {
    fn clone(&self) -> Self {
        ItemImage {
            path: self.path.clone(),
            resolved: OnceLock::new(),
        }
    }
}

impl PartialEq for ItemImage {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ItemImage {}
