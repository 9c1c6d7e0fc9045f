//! Structural checks applied to loaded plugins.
//!
//! A registration can advertise itself under the right namespace and name
//! without actually implementing the interface. Validators are the gate
//! against that: each loaded value is checked individually, so one bad plugin
//! is attributed on its own rather than failing its siblings.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::interface::InterfaceDescriptor;

/// Conformance predicate for loaded plugin values.
pub trait Validator<T>: Send + Sync {
    /// Return whether `value` satisfies `interface`.
    fn validate(&self, value: &T, interface: &InterfaceDescriptor) -> bool;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn validate(&self, value: &T, _interface: &InterfaceDescriptor) -> bool {
        self(value)
    }
}

/// Accepts every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<T> Validator<T> for AcceptAll {
    fn validate(&self, _value: &T, _interface: &InterfaceDescriptor) -> bool {
        true
    }
}

/// Accepts type-erased plugins whose concrete type is `U`.
///
/// For loaders that hand back `Arc<dyn Any + Send + Sync>`, this is the
/// is-a check: the value conforms when its erased type is `U`. To accept every
/// implementation of a trait rather than one concrete type, erase plugins as
/// `Arc<Box<dyn Trait>>` and check with `downcast_to::<Box<dyn Trait>>()`.
pub struct DowncastTo<U> {
    _target: PhantomData<fn() -> U>,
}

impl<U> DowncastTo<U> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<U> Default for DowncastTo<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Any> Validator<Arc<dyn Any + Send + Sync>> for DowncastTo<U> {
    fn validate(&self, value: &Arc<dyn Any + Send + Sync>, _interface: &InterfaceDescriptor) -> bool {
        (**value).is::<U>()
    }
}

/// Shorthand for [`DowncastTo::new`].
pub fn downcast_to<U: Any>() -> DowncastTo<U> {
    DowncastTo::new()
}
