//! Finding installed components on a search path.
//!
//! Each search path entry is either a component directory itself (it holds a
//! `plugger.toml`) or a directory whose immediate subdirectories are
//! components. Entries are scanned in order; subdirectories in name order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::MANIFEST_FILENAME;
use crate::error::{Error, Result};
use crate::manifest::ComponentManifest;

/// A component found on the search path.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledComponent {
    /// Directory holding the component's manifest.
    pub root: PathBuf,
    /// The parsed manifest.
    pub manifest: ComponentManifest,
}

impl InstalledComponent {
    /// Load the component rooted at `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let manifest_path = root.join(MANIFEST_FILENAME);
        let manifest =
            ComponentManifest::from_path(&manifest_path).map_err(|e| Error::InvalidComponent {
                path: manifest_path.clone(),
                source: Box::new(e),
            })?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    pub fn name(&self) -> &str {
        &self.manifest.component.name
    }

    pub fn version(&self) -> Option<&str> {
        self.manifest.component.version.as_deref()
    }
}

/// Find every installed component on `search_paths`.
///
/// Missing search path entries are ignored. When two components share a
/// name, the one found first wins and later ones are skipped with a warning.
/// Any unreadable or invalid manifest fails the whole scan.
pub fn discover_components(search_paths: &[PathBuf]) -> Result<Vec<InstalledComponent>> {
    let mut components = Vec::new();
    let mut seen = HashSet::new();

    for root in component_roots(search_paths)? {
        let component = InstalledComponent::load(&root)?;
        if !seen.insert(component.name().to_string()) {
            tracing::warn!(
                component = component.name(),
                path = %root.display(),
                "component shadowed by an earlier search path entry, skipping"
            );
            continue;
        }
        tracing::debug!(
            component = component.name(),
            path = %root.display(),
            "discovered component"
        );
        components.push(component);
    }

    Ok(components)
}

fn component_roots(search_paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut roots = Vec::new();

    for entry in search_paths {
        if entry.join(MANIFEST_FILENAME).is_file() {
            roots.push(entry.clone());
            continue;
        }
        if !entry.is_dir() {
            tracing::debug!(path = %entry.display(), "search path entry not found, ignoring");
            continue;
        }

        let mut children = Vec::new();
        for child in std::fs::read_dir(entry)? {
            let path = child?.path();
            if path.join(MANIFEST_FILENAME).is_file() {
                children.push(path);
            }
        }
        children.sort();
        roots.extend(children);
    }

    Ok(roots)
}
