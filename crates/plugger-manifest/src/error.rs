use std::path::PathBuf;

/// Errors that can occur while reading component manifests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse component manifest TOML.
    #[error("failed to parse component manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// Component manifest file not found at the expected path.
    #[error("component manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Failed to serialize component manifest.
    #[error("failed to serialize component manifest: {0}")]
    ManifestSerialize(String),

    /// Invalid component, namespace, or registration name.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Invalid semver version string.
    #[error("invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    /// A registration's reference is unusable.
    #[error("invalid reference for registration '{namespace}:{name}': {reason}")]
    InvalidReference {
        namespace: String,
        name: String,
        reason: String,
    },

    /// A manifest on the search path is broken.
    #[error("invalid component at {path}: {source}")]
    InvalidComponent {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// I/O error reading manifests or scanning search paths.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
