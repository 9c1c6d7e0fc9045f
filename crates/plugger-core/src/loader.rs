//! Turning registration references into plugin values.

use std::collections::HashMap;

use crate::error::BoxError;
use crate::registration::Reference;

/// Resolves a [`Reference`] to a plugin value.
///
/// Loading may run component initialization code, so the resolver calls it
/// exactly once per candidate, in discovery order.
pub trait Loader<T>: Send + Sync {
    fn load(&self, reference: &Reference) -> Result<T, BoxError>;
}

impl<T, F> Loader<T> for F
where
    F: Fn(&Reference) -> Result<T, BoxError> + Send + Sync,
{
    fn load(&self, reference: &Reference) -> Result<T, BoxError> {
        self(reference)
    }
}

/// No factory is registered for a reference.
#[derive(Debug, thiserror::Error)]
#[error("no factory registered for reference '{0}'")]
pub struct UnknownReference(pub Reference);

type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Loader backed by a table of in-process factories keyed by reference.
pub struct LoaderTable<T> {
    factories: HashMap<String, Factory<T>>,
}

impl<T> LoaderTable<T> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory, replacing any previous one for the same reference.
    pub fn register(
        &mut self,
        reference: impl Into<String>,
        factory: impl Fn() -> T + Send + Sync + 'static,
    ) {
        self.factories.insert(reference.into(), Box::new(factory));
    }

    /// Register a factory (builder pattern).
    pub fn with(
        mut self,
        reference: impl Into<String>,
        factory: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        self.register(reference, factory);
        self
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.factories.contains_key(reference)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T> Default for LoaderTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> for LoaderTable<T> {
    fn load(&self, reference: &Reference) -> Result<T, BoxError> {
        let factory = self
            .factories
            .get(reference.as_str())
            .ok_or_else(|| UnknownReference(reference.clone()))?;
        Ok(factory())
    }
}
