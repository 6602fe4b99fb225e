//! Shared identifier constants used across the registry and feature slices.

/// Capability module names (host-provided libraries of behavior).
pub const FORMS: &str = "forms";
pub const COMMON: &str = "common";
pub const ROUTING: &str = "routing";
pub const DATA_TABLE: &str = "data-table";

/// View components owned by the location feature module.
pub const ADD_LOCATION: &str = "add-location";
pub const LOCATION_DETAILS: &str = "location-details";
pub const LOCATION_LIST: &str = "location-list";
pub const EDIT_LOCATION: &str = "edit-location";

/// OpenAPI tags.
pub const SYSTEM_TAG: &str = "System";
pub const FEATURES_TAG: &str = "Features";
