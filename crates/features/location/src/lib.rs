//! Location feature slice: CRUD views for study site locations.
//!
//! The slice owns four view components (add, details, list, edit) and
//! declares the capability modules they draw on. The views themselves are
//! opaque to the module system; only their identity, titles, and routes
//! are declared here.

mod error;

pub use crate::error::LocationError;

use sitehub_domain::capability::Capability;
use sitehub_domain::constants::{ADD_LOCATION, EDIT_LOCATION, LOCATION_DETAILS, LOCATION_LIST};
use sitehub_domain::module::{FeatureModuleDescriptor, Route, ViewComponent};

/// Name under which this feature registers with the host.
pub const MODULE_NAME: &str = "location";

/// Declares the location feature module.
///
/// # Errors
/// Currently infallible; the `Result` keeps the slice entry point
/// uniform across features.
pub fn init() -> Result<FeatureModuleDescriptor, LocationError> {
    tracing::info!("Location feature module declared");

    Ok(FeatureModuleDescriptor::builder(MODULE_NAME)
        .component(ViewComponent::new(ADD_LOCATION, "Add location"))
        .component(ViewComponent::new(LOCATION_DETAILS, "Location details"))
        .component(ViewComponent::new(LOCATION_LIST, "Locations"))
        .component(ViewComponent::new(EDIT_LOCATION, "Edit location"))
        .capability(Capability::Forms)
        .capability(Capability::Common)
        .capability(Capability::Routing)
        .capability(Capability::DataTable)
        .route(Route::new("", LOCATION_LIST))
        .route(Route::new("new", ADD_LOCATION))
        .route(Route::new(":locationId", LOCATION_DETAILS))
        .route(Route::new(":locationId/edit", EDIT_LOCATION))
        .build())
}
