//! Interface descriptors and the contracts plugins are checked against.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registration::Registration;
use crate::validate::{AcceptAll, Validator};

/// Identity of an interface: the registration group and name to search.
///
/// `namespace` is the component that defines the interface and `name` is the
/// interface's own identifier. Registrations whose source component equals
/// the defining component are *internal*; all others are *external*. The
/// defining component is the namespace unless an explicit owner is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    pub namespace: String,
    pub name: String,
    /// Defining component, when it differs from the namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl InterfaceDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            owner: None,
        }
    }

    /// The descriptor named by a [`Contract`].
    pub fn of<C: Contract + ?Sized>() -> Self {
        let descriptor = Self::new(C::NAMESPACE, C::NAME);
        match C::OWNER {
            Some(owner) => descriptor.with_owner(owner),
            None => descriptor,
        }
    }

    /// Set the defining component (builder pattern).
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// The component that defines this interface.
    pub fn defining_component(&self) -> &str {
        self.owner.as_deref().unwrap_or(&self.namespace)
    }

    /// Whether `registration` was declared by the interface's own component.
    pub fn is_internal(&self, registration: &Registration) -> bool {
        registration.source_component() == self.defining_component()
    }
}

/// A type that names the interface it stands for.
///
/// Usually implemented for a trait object type, so the descriptor is derived
/// from the interface itself rather than spelled out at every call site:
///
/// ```
/// use plugger_core::{Contract, InterfaceDescriptor};
///
/// trait Storage {}
///
/// impl Contract for dyn Storage {
///     const NAMESPACE: &'static str = "app";
///     const NAME: &'static str = "Storage";
/// }
///
/// assert_eq!(
///     InterfaceDescriptor::of::<dyn Storage>(),
///     InterfaceDescriptor::new("app", "Storage")
/// );
/// ```
pub trait Contract {
    /// Registration group, normally the defining component.
    const NAMESPACE: &'static str;
    /// Registration name.
    const NAME: &'static str;
    /// Defining component, when it differs from [`Contract::NAMESPACE`].
    const OWNER: Option<&'static str> = None;
}

impl fmt::Display for InterfaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

/// An interface descriptor paired with the check its plugins must pass.
pub struct Interface<T> {
    descriptor: InterfaceDescriptor,
    validator: Box<dyn Validator<T>>,
}

impl<T> Interface<T> {
    pub fn new(descriptor: InterfaceDescriptor, validator: impl Validator<T> + 'static) -> Self {
        Self {
            descriptor,
            validator: Box::new(validator),
        }
    }

    /// An interface that accepts every loaded value.
    ///
    /// Useful when the loader's output type already guarantees conformance,
    /// e.g. a loader producing `Box<dyn Trait>`.
    pub fn unchecked(descriptor: InterfaceDescriptor) -> Self {
        Self::new(descriptor, AcceptAll)
    }

    /// The interface named by `C`, checked by `validator`.
    pub fn of<C: Contract + ?Sized>(validator: impl Validator<T> + 'static) -> Self {
        Self::new(InterfaceDescriptor::of::<C>(), validator)
    }

    pub fn descriptor(&self) -> &InterfaceDescriptor {
        &self.descriptor
    }

    /// Check a loaded value against this interface.
    pub fn validate(&self, value: &T) -> bool {
        self.validator.validate(value, &self.descriptor)
    }
}

impl<T> fmt::Debug for Interface<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interface")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defining_component_defaults_to_namespace() {
        let descriptor = InterfaceDescriptor::new("app", "Base");
        assert_eq!(descriptor.defining_component(), "app");

        let descriptor = descriptor.with_owner("app-core");
        assert_eq!(descriptor.defining_component(), "app-core");
    }

    #[test]
    fn test_internal_and_external_registrations() {
        let descriptor = InterfaceDescriptor::new("app", "Base");
        let internal = Registration::new("app", "Base", "app", "app:Default");
        let external = Registration::new("app", "Base", "other", "other:Override");

        assert!(descriptor.is_internal(&internal));
        assert!(!descriptor.is_internal(&external));
    }

    #[test]
    fn test_owner_changes_internal_classification() {
        let descriptor = InterfaceDescriptor::new("storage", "Backend").with_owner("app");
        let reg = Registration::new("storage", "Backend", "app", "app:Sqlite");
        assert!(descriptor.is_internal(&reg));

        let reg = Registration::new("storage", "Backend", "storage", "storage:Memory");
        assert!(!descriptor.is_internal(&reg));
    }

    #[test]
    fn test_validate_uses_supplied_predicate() {
        let interface = Interface::new(InterfaceDescriptor::new("app", "Even"), |v: &u32| {
            v % 2 == 0
        });
        assert!(interface.validate(&4));
        assert!(!interface.validate(&3));

        let unchecked = Interface::<u32>::unchecked(InterfaceDescriptor::new("app", "Any"));
        assert!(unchecked.validate(&3));
    }

    trait Backend {}

    impl Contract for dyn Backend {
        const NAMESPACE: &'static str = "storage";
        const NAME: &'static str = "Backend";
        const OWNER: Option<&'static str> = Some("app");
    }

    #[test]
    fn test_descriptor_from_contract() {
        let interface = Interface::<Box<dyn Backend>>::of::<dyn Backend>(AcceptAll);
        assert_eq!(
            *interface.descriptor(),
            InterfaceDescriptor::new("storage", "Backend").with_owner("app")
        );
        assert_eq!(interface.descriptor().defining_component(), "app");
    }

    #[test]
    fn test_display() {
        assert_eq!(InterfaceDescriptor::new("app", "Base").to_string(), "app:Base");
    }
}
