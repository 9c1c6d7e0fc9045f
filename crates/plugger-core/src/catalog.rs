//! Access to the registration catalog.
//!
//! The catalog is the read-only view of whatever metadata store records which
//! components advertise which plugins. [`filter`] is the pure narrowing step
//! the resolver applies on top of it.

use std::sync::Arc;

use crate::error::Result;
use crate::interface::InterfaceDescriptor;
use crate::registration::Registration;

/// Source of registrations.
///
/// Implementations return every registration they know about, in their own
/// discovery order, or fail as a whole with [`Error::Discovery`]. Partial
/// results are never returned.
///
/// [`Error::Discovery`]: crate::Error::Discovery
pub trait Catalog: Send + Sync {
    /// Every registration known to the catalog.
    fn registrations(&self) -> Result<Vec<Registration>>;

    /// Registrations matching the optional namespace and name.
    ///
    /// Catalogs backed by an indexed store may override this to filter at
    /// the source; the result must equal filtering [`registrations`].
    ///
    /// [`registrations`]: Catalog::registrations
    fn list_registrations(
        &self,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<Registration>> {
        Ok(filter(self.registrations()?, namespace, name))
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn registrations(&self) -> Result<Vec<Registration>> {
        (**self).registrations()
    }

    fn list_registrations(
        &self,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<Registration>> {
        (**self).list_registrations(namespace, name)
    }
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    fn registrations(&self) -> Result<Vec<Registration>> {
        (**self).registrations()
    }

    fn list_registrations(
        &self,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<Registration>> {
        (**self).list_registrations(namespace, name)
    }
}

/// Keep the records matching `namespace` and `name`, preserving order.
///
/// Matching is exact and case-sensitive. A `None` filter matches anything.
pub fn filter(
    records: impl IntoIterator<Item = Registration>,
    namespace: Option<&str>,
    name: Option<&str>,
) -> Vec<Registration> {
    records
        .into_iter()
        .filter(|record| {
            let keep = record.matches(namespace, name);
            tracing::trace!(registration = %record, keep, "filter");
            keep
        })
        .collect()
}

/// Keep the records registered for `interface`.
pub fn filter_for(
    records: impl IntoIterator<Item = Registration>,
    interface: &InterfaceDescriptor,
) -> Vec<Registration> {
    filter(records, Some(&interface.namespace), Some(&interface.name))
}

/// In-memory catalog that preserves registration order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    registrations: Vec<Registration>,
}

impl StaticCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration.
    pub fn register(&mut self, registration: Registration) {
        self.registrations.push(registration);
    }

    /// Append a registration (builder pattern).
    pub fn with(mut self, registration: Registration) -> Self {
        self.register(registration);
        self
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }
}

impl FromIterator<Registration> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = Registration>>(iter: I) -> Self {
        Self {
            registrations: iter.into_iter().collect(),
        }
    }
}

impl Catalog for StaticCatalog {
    fn registrations(&self) -> Result<Vec<Registration>> {
        Ok(self.registrations.clone())
    }
}
