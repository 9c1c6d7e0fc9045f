//! Error types for plugger-core

use crate::interface::InterfaceDescriptor;
use crate::registration::Registration;

pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by an external collaborator (catalog or loader).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while discovering and resolving plugins.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registration catalog could not be queried.
    #[error("failed to discover registrations: {source}")]
    Discovery {
        #[source]
        source: BoxError,
    },

    /// A registration's reference could not be loaded.
    #[error("failed to load plugin {registration}: {source}")]
    Load {
        registration: Registration,
        #[source]
        source: BoxError,
    },

    /// A loaded plugin does not satisfy the interface it was registered for.
    #[error("plugin {registration} does not implement the interface ({interface})")]
    Validation {
        registration: Registration,
        interface: InterfaceDescriptor,
    },

    /// No plugin survived discovery, loading, and validation.
    #[error("no plugins found for {interface}")]
    NotFound { interface: InterfaceDescriptor },

    /// Several plugins survived and the resolver refused to pick one.
    #[error(
        "too many ({}) plugins for {interface}: {}",
        .candidates.len(),
        describe(.candidates)
    )]
    UnresolvableConflict {
        interface: InterfaceDescriptor,
        candidates: Vec<Registration>,
    },

    /// A custom conflict resolver failed for its own reasons.
    #[error("conflict resolver failed for {interface}: {message}")]
    Resolver {
        interface: InterfaceDescriptor,
        message: String,
    },

    /// The `[resolve]` configuration table could not be parsed.
    #[error("invalid resolve configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

impl Error {
    /// Wrap a catalog failure as a discovery error.
    pub fn discovery(source: impl Into<BoxError>) -> Self {
        Self::Discovery {
            source: source.into(),
        }
    }

    /// Create a resolver error with the given message.
    pub fn resolver(interface: &InterfaceDescriptor, message: impl Into<String>) -> Self {
        Self::Resolver {
            interface: interface.clone(),
            message: message.into(),
        }
    }

    /// The registration this error is attributed to, if any.
    pub fn registration(&self) -> Option<&Registration> {
        match self {
            Self::Load { registration, .. } | Self::Validation { registration, .. } => {
                Some(registration)
            }
            _ => None,
        }
    }
}

fn describe(candidates: &[Registration]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
