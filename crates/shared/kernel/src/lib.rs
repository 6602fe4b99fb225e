//! Kernel utilities shared across slices.
//! Hosts the build-time feature module registry with its resolver pass,
//! the layered config loader, and (behind the `server` feature) the
//! application state and system routes.
//!
//! ## Registry
//! ```rust
//! use sitehub_kernel::registry::ModuleRegistry;
//! use sitehub_kernel::domain::capability::{Capability, CapabilityModule};
//! use sitehub_kernel::domain::module::{FeatureModuleDescriptor, ViewComponent};
//!
//! # fn main() -> Result<(), sitehub_kernel::registry::RegistryError> {
//! let mut registry = ModuleRegistry::new();
//! registry.capability(CapabilityModule::new(Capability::Forms))?;
//! registry.register(
//!     FeatureModuleDescriptor::builder("demo")
//!         .component(ViewComponent::new("demo-list", "Demo"))
//!         .capability(Capability::Forms)
//!         .build(),
//! )?;
//! let resolved = registry.resolve()?;
//! assert_eq!(resolved.load("demo")?.views().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod registry;
#[cfg(feature = "server")]
pub mod server;

pub use sitehub_domain as domain;
