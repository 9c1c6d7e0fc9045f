//! Registration records advertised by installed components.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle a [`Loader`](crate::Loader) resolves to a plugin value.
///
/// By convention this is a `component:item` path (e.g. `"foo:Bar"`), but the
/// core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Reference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One advertised plugin.
///
/// A registration says "component `source_component` provides an
/// implementation of `namespace`/`name`, loadable through `reference`".
/// Registrations are immutable once built; the catalog hands out owned copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    namespace: String,
    name: String,
    source_component: String,
    source_version: Option<String>,
    reference: Reference,
}

impl Registration {
    /// Create a registration without version information.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        source_component: impl Into<String>,
        reference: impl Into<Reference>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            source_component: source_component.into(),
            source_version: None,
            reference: reference.into(),
        }
    }

    /// Set the version of the declaring component (builder pattern).
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.source_version = Some(version.into());
        self
    }

    /// Registration group, matched against the interface's namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registration name, matched against the interface's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Component that declared this registration.
    pub fn source_component(&self) -> &str {
        &self.source_component
    }

    /// Version of the declaring component, when known.
    pub fn source_version(&self) -> Option<&str> {
        self.source_version.as_deref()
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Whether this registration passes the optional namespace and name filters.
    ///
    /// Matching is exact and case-sensitive; `None` matches anything.
    pub fn matches(&self, namespace: Option<&str>, name: Option<&str>) -> bool {
        namespace.is_none_or(|ns| self.namespace == ns) && name.is_none_or(|n| self.name == n)
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} ({})",
            self.source_component,
            self.namespace,
            self.name,
            self.source_version.as_deref().unwrap_or("None")
        )
    }
}
