//! Plugin discovery and resolution for Plugger.
//!
//! Components advertise implementations of an interface as [`Registration`]s
//! grouped by namespace and name. This crate turns those advertisements into
//! loaded, validated plugins:
//!
//! 1. **Discover**: query a [`Catalog`] for every registration.
//! 2. **Filter**: keep the registrations matching an [`InterfaceDescriptor`].
//! 3. **Load**: turn each [`Reference`] into a value through a [`Loader`].
//! 4. **Validate**: check each value against the interface's [`Validator`].
//! 5. **Resolve**: when more than one plugin survives and a single one is
//!    wanted, pick one with a [`ConflictResolver`].
//!
//! # Example
//!
//! ```
//! use plugger_core::{
//!     Interface, InterfaceDescriptor, LoaderTable, Plugger, Registration, StaticCatalog,
//! };
//!
//! let catalog = StaticCatalog::new()
//!     .with(Registration::new("app", "Greeter", "app", "app:Hello"))
//!     .with(Registration::new("app", "Greeter", "other", "other:Howdy"));
//!
//! let loader = LoaderTable::new()
//!     .with("app:Hello", || "hello")
//!     .with("other:Howdy", || "howdy");
//!
//! let plugger = Plugger::new(catalog, loader);
//! let greeter = Interface::<&str>::unchecked(InterfaceDescriptor::new("app", "Greeter"));
//!
//! assert_eq!(plugger.resolve_all(&greeter).unwrap().len(), 2);
//! // The plugin supplied by another component wins over the built-in one.
//! assert_eq!(*plugger.resolve_one(&greeter).unwrap().value(), "howdy");
//! ```

pub mod candidate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod interface;
pub mod loader;
pub mod plugger;
pub mod registration;
pub mod resolver;
pub mod validate;

pub use candidate::Candidate;
pub use catalog::{Catalog, StaticCatalog, filter, filter_for};
pub use config::{FailurePolicy, ResolveConfig};
pub use error::{BoxError, Error, Result};
pub use interface::{Contract, Interface, InterfaceDescriptor};
pub use loader::{Loader, LoaderTable, UnknownReference};
pub use plugger::{Plugger, Resolution};
pub use registration::{Reference, Registration};
pub use resolver::{ConflictResolver, ExternalPreferred, FirstDiscovered};
pub use validate::{AcceptAll, DowncastTo, Validator, downcast_to};
