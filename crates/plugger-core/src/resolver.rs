//! Conflict resolution between several valid plugins.
//!
//! The resolver only runs when more than one plugin survives validation;
//! zero plugins is a not-found error and a single plugin is returned as is.

use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::interface::InterfaceDescriptor;

/// Policy selecting exactly one plugin out of several.
pub trait ConflictResolver<T>: Send + Sync {
    /// Pick one of `candidates`, or fail.
    ///
    /// `candidates` is in discovery order.
    fn resolve(
        &self,
        candidates: Vec<Candidate<T>>,
        interface: &InterfaceDescriptor,
    ) -> Result<Candidate<T>>;
}

impl<T, F> ConflictResolver<T> for F
where
    F: Fn(Vec<Candidate<T>>, &InterfaceDescriptor) -> Result<Candidate<T>> + Send + Sync,
{
    fn resolve(
        &self,
        candidates: Vec<Candidate<T>>,
        interface: &InterfaceDescriptor,
    ) -> Result<Candidate<T>> {
        self(candidates, interface)
    }
}

/// Default policy: prefer the single plugin supplied by another component.
///
/// An external plugin overrides the interface component's own default. With
/// no external plugin the sole internal one is used. Anything else (several
/// external plugins, or several internal ones and no external) is refused
/// rather than guessed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalPreferred;

impl<T> ConflictResolver<T> for ExternalPreferred {
    fn resolve(
        &self,
        candidates: Vec<Candidate<T>>,
        interface: &InterfaceDescriptor,
    ) -> Result<Candidate<T>> {
        let (mut internal, mut external): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|candidate| candidate.is_internal_to(interface));

        tracing::debug!(
            %interface,
            internal = internal.len(),
            external = external.len(),
            "resolving plugin conflict"
        );

        match (external.len(), internal.len()) {
            (1, _) => Ok(external.remove(0)),
            (0, 1) => Ok(internal.remove(0)),
            (0, 0) => Err(Error::NotFound {
                interface: interface.clone(),
            }),
            (0, _) => Err(conflict(interface, internal)),
            _ => Err(conflict(interface, external)),
        }
    }
}

/// Picks the first plugin in discovery order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstDiscovered;

impl<T> ConflictResolver<T> for FirstDiscovered {
    fn resolve(
        &self,
        candidates: Vec<Candidate<T>>,
        interface: &InterfaceDescriptor,
    ) -> Result<Candidate<T>> {
        candidates.into_iter().next().ok_or_else(|| Error::NotFound {
            interface: interface.clone(),
        })
    }
}

fn conflict<T>(interface: &InterfaceDescriptor, competing: Vec<Candidate<T>>) -> Error {
    Error::UnresolvableConflict {
        interface: interface.clone(),
        candidates: competing
            .into_iter()
            .map(|candidate| candidate.into_parts().0)
            .collect(),
    }
}
