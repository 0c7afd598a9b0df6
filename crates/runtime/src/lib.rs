//! Host-facing wiring for the map extensions.
//!
//! The host embeds a [`Runtime`] and forwards its lifecycle moments to it;
//! the runtime fans each notification out to the registered extensions in
//! priority order. [`RuntimeBuilder`] assembles the registry, including the
//! two bundled extensions configured from plugin parameters.
//!
//! Modules are organized by responsibility:
//! - [`registry`] owns extension storage and dispatch order
//! - [`runtime`] hosts the facade and builder
pub mod registry;
pub mod runtime;

pub use registry::ExtensionRegistry;
pub use runtime::{Runtime, RuntimeBuilder};
