//! The discover, load, validate, resolve pipeline.

use crate::candidate::Candidate;
use crate::catalog::{Catalog, filter_for};
use crate::config::{FailurePolicy, ResolveConfig};
use crate::error::{Error, Result};
use crate::interface::Interface;
use crate::loader::Loader;
use crate::registration::Registration;
use crate::resolver::{ConflictResolver, ExternalPreferred};

/// Outcome of resolving every plugin for an interface.
#[derive(Debug)]
pub struct Resolution<T> {
    /// Plugins that loaded and validated, in discovery order.
    pub candidates: Vec<Candidate<T>>,
    /// Load and validation errors for plugins dropped under
    /// [`FailurePolicy::Skip`], in discovery order.
    pub rejected: Vec<Error>,
}

/// Resolves plugins from a catalog through a loader.
///
/// Holds no state between calls: every resolution re-reads the catalog and
/// reloads each candidate, so repeated calls over an unchanged catalog give
/// the same answer. Candidates are loaded one at a time, in discovery order.
#[derive(Debug, Clone)]
pub struct Plugger<C, L> {
    catalog: C,
    loader: L,
    config: ResolveConfig,
}

impl<C: Catalog, L> Plugger<C, L> {
    /// Create a resolver with the default [`ResolveConfig`].
    pub fn new(catalog: C, loader: L) -> Self {
        Self {
            catalog,
            loader,
            config: ResolveConfig::default(),
        }
    }

    /// Set the failure policy (builder pattern).
    pub fn with_config(mut self, config: ResolveConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Registrations matching the optional namespace and name.
    pub fn list_registrations(
        &self,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<Registration>> {
        self.catalog.list_registrations(namespace, name)
    }

    /// Load and validate every plugin registered for `interface`.
    ///
    /// Plugins dropped under [`FailurePolicy::Skip`] are reported in
    /// [`Resolution::rejected`]. Never invokes a conflict resolver.
    pub fn resolve_all_report<T>(&self, interface: &Interface<T>) -> Result<Resolution<T>>
    where
        L: Loader<T>,
    {
        let descriptor = interface.descriptor();
        let discovered = self
            .catalog
            .list_registrations(Some(&descriptor.namespace), Some(&descriptor.name))?;
        let registrations = filter_for(discovered, descriptor);
        tracing::debug!(
            interface = %descriptor,
            count = registrations.len(),
            "discovered plugin registrations"
        );

        let mut candidates = Vec::with_capacity(registrations.len());
        let mut rejected = Vec::new();

        for registration in registrations {
            let value = match self.loader.load(registration.reference()) {
                Ok(value) => value,
                Err(source) => {
                    let error = Error::Load {
                        registration,
                        source,
                    };
                    reject(self.config.on_load_failure, error, &mut rejected)?;
                    continue;
                }
            };

            if !interface.validate(&value) {
                let error = Error::Validation {
                    registration,
                    interface: descriptor.clone(),
                };
                reject(self.config.on_validation_failure, error, &mut rejected)?;
                continue;
            }

            tracing::debug!(%registration, "loaded plugin");
            candidates.push(Candidate::new(registration, value));
        }

        Ok(Resolution {
            candidates,
            rejected,
        })
    }

    /// Load and validate every plugin registered for `interface`.
    pub fn resolve_all<T>(&self, interface: &Interface<T>) -> Result<Vec<Candidate<T>>>
    where
        L: Loader<T>,
    {
        Ok(self.resolve_all_report(interface)?.candidates)
    }

    /// Resolve the single plugin for `interface` using [`ExternalPreferred`].
    pub fn resolve_one<T>(&self, interface: &Interface<T>) -> Result<Candidate<T>>
    where
        L: Loader<T>,
    {
        self.resolve_one_with(interface, &ExternalPreferred)
    }

    /// Resolve the single plugin for `interface`.
    ///
    /// `resolver` is consulted only when more than one plugin survives.
    pub fn resolve_one_with<T, R>(
        &self,
        interface: &Interface<T>,
        resolver: &R,
    ) -> Result<Candidate<T>>
    where
        L: Loader<T>,
        R: ConflictResolver<T> + ?Sized,
    {
        let descriptor = interface.descriptor();
        let mut candidates = self.resolve_all(interface)?;

        if candidates.len() > 1 {
            tracing::debug!(
                interface = %descriptor,
                count = candidates.len(),
                "multiple plugins found, resolving conflict"
            );
            let chosen = resolver.resolve(candidates, descriptor)?;
            tracing::debug!(registration = %chosen.registration(), "conflict resolved");
            return Ok(chosen);
        }

        candidates.pop().ok_or_else(|| Error::NotFound {
            interface: descriptor.clone(),
        })
    }
}

fn reject(policy: FailurePolicy, error: Error, rejected: &mut Vec<Error>) -> Result<()> {
    match policy {
        FailurePolicy::Abort => Err(error),
        FailurePolicy::Skip => {
            tracing::warn!(%error, "skipping plugin");
            rejected.push(error);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::error::BoxError;
    use crate::interface::InterfaceDescriptor;
    use crate::registration::Reference;

    fn echo(reference: &Reference) -> std::result::Result<String, BoxError> {
        Ok(reference.to_string())
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with(Registration::new("app", "Base", "app", "app:Default"))
            .with(Registration::new("app", "Other", "app", "app:Other"))
            .with(Registration::new("app", "Base", "other", "other:Override"))
    }

    #[test]
    fn test_resolve_all_filters_by_descriptor() {
        let plugger = Plugger::new(catalog(), echo);
        let interface = Interface::<String>::unchecked(InterfaceDescriptor::new("app", "Base"));

        let values: Vec<_> = plugger
            .resolve_all(&interface)
            .unwrap()
            .into_iter()
            .map(Candidate::into_value)
            .collect();
        assert_eq!(values, vec!["app:Default", "other:Override"]);
    }

    #[test]
    fn test_resolve_one_single_candidate() {
        let plugger = Plugger::new(catalog(), echo);
        let interface = Interface::<String>::unchecked(InterfaceDescriptor::new("app", "Other"));

        let chosen = plugger.resolve_one(&interface).unwrap();
        assert_eq!(chosen.value(), "app:Other");
    }

    #[test]
    fn test_skip_reports_rejections() {
        let plugger = Plugger::new(catalog(), echo);
        let interface = Interface::new(InterfaceDescriptor::new("app", "Base"), |v: &String| {
            v.starts_with("app:")
        });

        let resolution = plugger.resolve_all_report(&interface).unwrap();
        assert_eq!(resolution.candidates.len(), 1);
        assert_eq!(resolution.rejected.len(), 1);
        assert_eq!(
            resolution.rejected[0]
                .registration()
                .map(Registration::source_component),
            Some("other")
        );
    }

    #[test]
    fn test_config_accessor() {
        let plugger = Plugger::new(catalog(), echo).with_config(ResolveConfig::skip_all());
        assert_eq!(*plugger.config(), ResolveConfig::skip_all());
    }
}
