//! Facade crate for `SiteHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature module declarations.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `sitehub` with the desired feature flags (`server`).
//! - Call [`init`] to collect feature module descriptors; extend as new slices appear.

pub use sitehub_domain as domain;
pub use sitehub_kernel as kernel;

use domain::module::FeatureModuleDescriptor;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use sitehub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use sitehub_location as location;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "location",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Collects the descriptors of all enabled feature slices for the host
/// to register.
///
/// # Errors
/// Returns an error if any feature declaration fails.
pub fn init() -> Result<Vec<FeatureModuleDescriptor>, Box<dyn std::error::Error>> {
    let mut modules = Vec::new();

    // Location
    modules.push(features::location::init()?);

    Ok(modules)
}
