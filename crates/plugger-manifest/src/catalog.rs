//! [`Catalog`] implementation over installed component manifests.

use std::ffi::OsStr;
use std::path::PathBuf;

use plugger_core::{Catalog, Registration};

use crate::SEARCH_PATH_ENV;
use crate::discovery::{InstalledComponent, discover_components};
use crate::error::Result;

/// Registration catalog read from `plugger.toml` manifests on a search path.
///
/// Every query rescans the search path, so the catalog always reflects what
/// is installed right now.
#[derive(Debug, Clone, Default)]
pub struct ManifestCatalog {
    search_paths: Vec<PathBuf>,
}

impl ManifestCatalog {
    pub fn new(search_paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a catalog from a platform path list (e.g. `a:b` on Unix).
    pub fn from_path_list(paths: &OsStr) -> Self {
        Self::new(std::env::split_paths(paths))
    }

    /// Build a catalog from the [`SEARCH_PATH_ENV`] environment variable.
    ///
    /// Returns `None` when the variable is unset.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(SEARCH_PATH_ENV).map(|paths| Self::from_path_list(&paths))
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// The installed components, in discovery order.
    pub fn components(&self) -> Result<Vec<InstalledComponent>> {
        discover_components(&self.search_paths)
    }
}

impl Catalog for ManifestCatalog {
    fn registrations(&self) -> plugger_core::Result<Vec<Registration>> {
        let components = self.components().map_err(plugger_core::Error::discovery)?;
        let registrations: Vec<_> = components
            .iter()
            .flat_map(|component| component.manifest.registrations())
            .collect();
        tracing::debug!(
            components = components.len(),
            registrations = registrations.len(),
            "read manifest catalog"
        );
        Ok(registrations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_list_splits_entries() {
        let joined = std::env::join_paths(["/opt/plugins", "/usr/share/plugins"]).unwrap();
        let catalog = ManifestCatalog::from_path_list(&joined);
        assert_eq!(
            catalog.search_paths(),
            &[
                PathBuf::from("/opt/plugins"),
                PathBuf::from("/usr/share/plugins")
            ]
        );
    }

    #[test]
    fn test_empty_catalog_has_no_registrations() {
        let catalog = ManifestCatalog::default();
        assert!(catalog.registrations().unwrap().is_empty());
    }
}
