//! Manifest-backed registration catalog for Plugger.
//!
//! Installed components are directories carrying a `plugger.toml` manifest
//! that names the component and lists the plugins it advertises. This crate
//! finds those directories on a search path and exposes their registrations
//! through [`plugger_core::Catalog`].

pub mod catalog;
pub mod discovery;
pub mod error;
pub mod manifest;

/// The canonical filename for component manifest files.
pub const MANIFEST_FILENAME: &str = "plugger.toml";

/// Environment variable holding the default component search path.
///
/// Uses the platform's path-list syntax (`:` on Unix, `;` on Windows).
pub const SEARCH_PATH_ENV: &str = "PLUGGER_PATH";

pub use catalog::ManifestCatalog;
pub use discovery::{InstalledComponent, discover_components};
pub use error::{Error, Result};
pub use manifest::{ComponentManifest, ComponentMeta};
