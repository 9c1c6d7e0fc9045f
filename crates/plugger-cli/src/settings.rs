//! CLI settings from an optional config file
//!
//! ```toml
//! paths = ["plugins", "/opt/plugger/components"]
//!
//! [resolve]
//! on_load_failure = "skip"
//! ```

use std::path::{Path, PathBuf};

use plugger_core::ResolveConfig;
use plugger_manifest::ManifestCatalog;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    /// Component search path; relative entries are relative to the config file.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
    /// Failure policy for resolution.
    #[serde(default)]
    pub resolve: ResolveConfig,
}

impl Settings {
    /// Load settings from `path`, or return the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        let mut settings: Self = toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        settings.paths = settings
            .paths
            .into_iter()
            .map(|entry| if entry.is_absolute() { entry } else { base.join(entry) })
            .collect();

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(settings)
    }

    /// Build the catalog to query.
    ///
    /// Precedence: command-line paths, config file paths, `$PLUGGER_PATH`,
    /// the current directory.
    pub fn catalog(&self, cli_paths: &[PathBuf]) -> Result<ManifestCatalog> {
        if !cli_paths.is_empty() {
            return Ok(ManifestCatalog::new(cli_paths.iter().cloned()));
        }
        if !self.paths.is_empty() {
            return Ok(ManifestCatalog::new(self.paths.iter().cloned()));
        }
        if let Some(catalog) = ManifestCatalog::from_env() {
            return Ok(catalog);
        }
        Ok(ManifestCatalog::new([std::env::current_dir()?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugger_core::FailurePolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_config_gives_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.resolve, ResolveConfig::default());
    }

    #[test]
    fn test_relative_paths_resolved_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("plugger-config.toml");
        fs::write(
            &config_path,
            r#"
paths = ["plugins", "/opt/components"]

[resolve]
on_load_failure = "skip"
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(&config_path)).unwrap();
        assert_eq!(
            settings.paths,
            vec![temp.path().join("plugins"), PathBuf::from("/opt/components")]
        );
        assert_eq!(settings.resolve.on_load_failure, FailurePolicy::Skip);
        assert_eq!(settings.resolve.on_validation_failure, FailurePolicy::Skip);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("bad.toml");
        fs::write(&config_path, "[resolve]\non_load_failure = \"retry\"\n").unwrap();

        let err = Settings::load(Some(&config_path)).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_cli_paths_take_precedence() {
        let settings = Settings {
            paths: vec![PathBuf::from("/from/config")],
            resolve: ResolveConfig::default(),
        };

        let catalog = settings.catalog(&[PathBuf::from("/from/cli")]).unwrap();
        assert_eq!(catalog.search_paths(), &[PathBuf::from("/from/cli")]);

        let catalog = settings.catalog(&[]).unwrap();
        assert_eq!(catalog.search_paths(), &[PathBuf::from("/from/config")]);
    }
}
