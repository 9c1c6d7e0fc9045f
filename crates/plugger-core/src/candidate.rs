//! Loaded plugins paired with their provenance.

use crate::interface::InterfaceDescriptor;
use crate::registration::Registration;

/// A plugin value together with the registration it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    registration: Registration,
    value: T,
}

impl<T> Candidate<T> {
    pub fn new(registration: Registration, value: T) -> Self {
        Self {
            registration,
            value,
        }
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (Registration, T) {
        (self.registration, self.value)
    }

    /// Whether this plugin was declared by the interface's own component.
    pub fn is_internal_to(&self, interface: &InterfaceDescriptor) -> bool {
        interface.is_internal(&self.registration)
    }
}
