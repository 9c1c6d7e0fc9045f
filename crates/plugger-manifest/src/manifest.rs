//! Component manifest parsing for `plugger.toml` files.
//!
//! A manifest names the component and lists the plugins it advertises,
//! grouped by namespace. Each entry maps an interface name to the reference
//! a loader resolves to the implementation.
//!
//! # Example TOML
//!
//! ```toml
//! [component]
//! name = "foo"
//! version = "0.1.0"
//! description = "Example component with a self-provided Base"
//!
//! [registrations.foo]
//! Base = "foo:Bar"
//!
//! [registrations.food]
//! Base = "foo:Bar"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use plugger_core::Registration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Complete component manifest loaded from `plugger.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComponentManifest {
    /// Core component metadata.
    pub component: ComponentMeta,
    /// Advertised plugins: namespace -> interface name -> reference.
    #[serde(default)]
    pub registrations: BTreeMap<String, BTreeMap<String, String>>,
}

/// Basic metadata about a component.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentMeta {
    /// Component name (e.g., "foo").
    pub name: String,
    /// Semver version string.
    #[serde(default)]
    pub version: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl ComponentManifest {
    /// Parse a component manifest from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a component manifest from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Serialize the manifest back to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ManifestSerialize(e.to_string()))
    }

    /// The registrations this manifest advertises.
    ///
    /// Ordered by namespace, then by name.
    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations
            .iter()
            .flat_map(|(namespace, entries)| {
                entries.iter().map(move |(name, reference)| {
                    let registration = Registration::new(
                        namespace.as_str(),
                        name.as_str(),
                        self.component.name.as_str(),
                        reference.as_str(),
                    );
                    match &self.component.version {
                        Some(version) => registration.with_version(version.as_str()),
                        None => registration,
                    }
                })
            })
            .collect()
    }

    /// Validate the manifest fields.
    fn validate(&self) -> Result<()> {
        validate_name(&self.component.name, "component name")?;

        if let Some(ref version) = self.component.version {
            semver::Version::parse(version).map_err(|e| Error::InvalidVersion {
                version: version.clone(),
                source: e,
            })?;
        }

        for (namespace, entries) in &self.registrations {
            validate_name(namespace, "namespace")?;
            for (name, reference) in entries {
                validate_name(name, "registration name")?;
                if reference.trim().is_empty() {
                    return Err(Error::InvalidReference {
                        namespace: namespace.clone(),
                        name: name.clone(),
                        reason: "reference must not be empty".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn validate_name(name: &str, what: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: format!("{what} must not be empty"),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: format!(
                "{what} must contain only alphanumeric characters, hyphens, underscores, or dots"
            ),
        });
    }
    Ok(())
}
