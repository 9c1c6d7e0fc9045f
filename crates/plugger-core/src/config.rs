//! Resolution policy from a `[resolve]` configuration table.
//!
//! ```toml
//! [resolve]
//! on_load_failure = "abort"
//! on_validation_failure = "skip"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What to do when a single plugin fails to load or validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Drop the plugin, log a warning, and keep resolving the others.
    Skip,
    /// Fail the whole resolution with the plugin's error.
    Abort,
}

/// Per-failure-kind policy applied while resolving plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveConfig {
    /// Policy for references the loader cannot resolve.
    pub on_load_failure: FailurePolicy,
    /// Policy for loaded values that do not satisfy the interface.
    pub on_validation_failure: FailurePolicy,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            on_load_failure: FailurePolicy::Abort,
            on_validation_failure: FailurePolicy::Skip,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    resolve: ResolveConfig,
}

impl ResolveConfig {
    /// Drop every failing plugin.
    pub fn skip_all() -> Self {
        Self {
            on_load_failure: FailurePolicy::Skip,
            on_validation_failure: FailurePolicy::Skip,
        }
    }

    /// Fail on the first failing plugin.
    pub fn abort_all() -> Self {
        Self {
            on_load_failure: FailurePolicy::Abort,
            on_validation_failure: FailurePolicy::Abort,
        }
    }

    pub fn with_load_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_load_failure = policy;
        self
    }

    pub fn with_validation_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_validation_failure = policy;
        self
    }

    /// Read the `[resolve]` table from a TOML document.
    ///
    /// Other tables are ignored; a missing `[resolve]` table yields the
    /// defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let document: Document = toml::from_str(content)?;
        Ok(document.resolve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_abort_on_load_and_skip_on_validation() {
        let config = ResolveConfig::default();
        assert_eq!(config.on_load_failure, FailurePolicy::Abort);
        assert_eq!(config.on_validation_failure, FailurePolicy::Skip);
    }

    #[test]
    fn test_parse_full_table() {
        let toml_str = r#"
[resolve]
on_load_failure = "skip"
on_validation_failure = "abort"
"#;
        let config = ResolveConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.on_load_failure, FailurePolicy::Skip);
        assert_eq!(config.on_validation_failure, FailurePolicy::Abort);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let toml_str = r#"
[resolve]
on_validation_failure = "abort"
"#;
        let config = ResolveConfig::from_toml(toml_str).unwrap();
        assert_eq!(config, ResolveConfig::abort_all());
    }

    #[test]
    fn test_missing_table_and_other_tables() {
        let toml_str = r#"
paths = ["plugins"]

[other]
key = "value"
"#;
        let config = ResolveConfig::from_toml(toml_str).unwrap();
        assert_eq!(config, ResolveConfig::default());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml_str = r#"
[resolve]
on_load_failure = "retry"
"#;
        assert!(ResolveConfig::from_toml(toml_str).is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let toml_str = r#"
[resolve]
on_timeout = "skip"
"#;
        assert!(ResolveConfig::from_toml(toml_str).is_err());
    }

    #[test]
    fn test_builders() {
        let config = ResolveConfig::abort_all().with_validation_failure(FailurePolicy::Skip);
        assert_eq!(config, ResolveConfig::default());

        let config = ResolveConfig::default().with_load_failure(FailurePolicy::Skip);
        assert_eq!(config, ResolveConfig::skip_all());
    }
}
