use sitehub_domain::capability::{Capability, CapabilityModule, CapabilitySet, ImportRef};
use sitehub_domain::module::{FeatureModuleDescriptor, Route, ViewComponent};
use sitehub_kernel::registry::{ModuleRegistry, RegistryError, host_capabilities};

fn location_module() -> FeatureModuleDescriptor {
    FeatureModuleDescriptor::builder("location")
        .component(ViewComponent::new("add-location", "Add location"))
        .component(ViewComponent::new("location-details", "Location details"))
        .component(ViewComponent::new("location-list", "Locations"))
        .component(ViewComponent::new("edit-location", "Edit location"))
        .capability(Capability::Forms)
        .capability(Capability::Common)
        .capability(Capability::Routing)
        .capability(Capability::DataTable)
        .route(Route::new("", "location-list"))
        .route(Route::new("new", "add-location"))
        .route(Route::new(":locationId", "location-details"))
        .route(Route::new(":locationId/edit", "edit-location"))
        .build()
}

fn registry_with_host() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    for capability in host_capabilities(CapabilitySet::ALL) {
        registry.capability(capability).expect("host capability install");
    }
    registry
}

#[test]
fn well_formed_module_resolves_with_four_views() {
    let mut registry = registry_with_host();
    registry.register(location_module()).expect("register");

    let resolved = registry.resolve().expect("resolve");
    let location = resolved.load("location").expect("load");

    assert_eq!(location.views().len(), 4);
    assert_eq!(location.capabilities(), CapabilitySet::ALL);

    let list = location.views().iter().find(|v| v.id == "location-list").expect("list view");
    assert_eq!(list.path.as_deref(), Some(""));
    let edit = location.views().iter().find(|v| v.id == "edit-location").expect("edit view");
    assert_eq!(edit.path.as_deref(), Some(":locationId/edit"));
}

#[test]
fn re_registering_the_same_module_fails() {
    let mut registry = registry_with_host();
    registry.register(location_module()).expect("first registration");

    let err = registry.register(location_module()).expect_err("second registration must fail");
    assert!(matches!(err, RegistryError::DuplicateModule { ref module } if module == "location"));
}

#[test]
fn dangling_route_target_fails_and_names_the_component() {
    // Location module with the edit view dropped but its route kept.
    let module = FeatureModuleDescriptor::builder("location")
        .component(ViewComponent::new("add-location", "Add location"))
        .component(ViewComponent::new("location-details", "Location details"))
        .component(ViewComponent::new("location-list", "Locations"))
        .capability(Capability::Forms)
        .capability(Capability::Common)
        .capability(Capability::Routing)
        .capability(Capability::DataTable)
        .route(Route::new("", "location-list"))
        .route(Route::new(":locationId/edit", "edit-location"))
        .build();

    let mut registry = registry_with_host();
    registry.register(module).expect("register");

    let err = registry.resolve().expect_err("resolution must fail");
    assert!(
        matches!(err, RegistryError::UnresolvedRoute { ref target, .. } if target == "edit-location")
    );
    assert!(err.to_string().contains("edit-location"));
}

#[test]
fn component_declared_by_two_modules_fails() {
    let other = FeatureModuleDescriptor::builder("site")
        .component(ViewComponent::new("location-list", "Site locations"))
        .capability(Capability::Common)
        .build();

    let mut registry = registry_with_host();
    registry.register(location_module()).expect("register location");
    registry.register(other).expect("register site");

    let err = registry.resolve().expect_err("resolution must fail");
    assert!(matches!(
        err,
        RegistryError::DuplicateComponent { ref component, ref owner, .. }
            if component == "location-list" && owner == "location"
    ));
}

#[test]
fn component_declared_twice_in_one_module_fails() {
    let module = FeatureModuleDescriptor::builder("location")
        .component(ViewComponent::new("location-list", "Locations"))
        .component(ViewComponent::new("location-list", "Locations again"))
        .capability(Capability::Common)
        .build();

    let mut registry = registry_with_host();
    registry.register(module).expect("register");

    let err = registry.resolve().expect_err("resolution must fail");
    assert!(matches!(err, RegistryError::DuplicateComponent { .. }));
}

#[test]
fn missing_host_capability_fails() {
    // Host installs everything except the paginated data table.
    let mut registry = ModuleRegistry::new();
    for capability in host_capabilities(CapabilitySet::ALL - CapabilitySet::DATA_TABLE) {
        registry.capability(capability).expect("host capability install");
    }
    registry.register(location_module()).expect("register");

    let err = registry.resolve().expect_err("resolution must fail");
    assert!(
        matches!(err, RegistryError::MissingCapability { ref capability, .. } if capability == "data-table")
    );
}

#[test]
fn self_import_fails() {
    let module = FeatureModuleDescriptor::builder("location")
        .component(ViewComponent::new("location-list", "Locations"))
        .import(ImportRef::module("location"))
        .build();

    let mut registry = registry_with_host();
    registry.register(module).expect("register");

    let err = registry.resolve().expect_err("resolution must fail");
    assert!(matches!(err, RegistryError::SelfImport { ref module } if module == "location"));
}

#[test]
fn unknown_module_import_fails() {
    let module = FeatureModuleDescriptor::builder("location")
        .component(ViewComponent::new("location-list", "Locations"))
        .import(ImportRef::module("reports"))
        .build();

    let mut registry = registry_with_host();
    registry.register(module).expect("register");

    let err = registry.resolve().expect_err("resolution must fail");
    assert!(matches!(err, RegistryError::MissingModule { ref import, .. } if import == "reports"));
}

#[test]
fn undeclared_export_fails() {
    let module = FeatureModuleDescriptor::builder("location")
        .component(ViewComponent::new("location-list", "Locations"))
        .export("location-map")
        .build();

    let mut registry = registry_with_host();
    registry.register(module).expect("register");

    let err = registry.resolve().expect_err("resolution must fail");
    assert!(
        matches!(err, RegistryError::UnresolvedExport { ref component, .. } if component == "location-map")
    );
}

#[test]
fn route_may_target_a_component_exported_by_an_import() {
    let site = FeatureModuleDescriptor::builder("site")
        .component(ViewComponent::new("site-overview", "Site overview"))
        .export("site-overview")
        .build();
    let location = FeatureModuleDescriptor::builder("location")
        .component(ViewComponent::new("location-list", "Locations"))
        .capability(Capability::Routing)
        .import(ImportRef::module("site"))
        .route(Route::new("", "location-list"))
        .route(Route::new("site", "site-overview"))
        .build();

    let mut registry = registry_with_host();
    registry.register(site).expect("register site");
    registry.register(location).expect("register location");

    let resolved = registry.resolve().expect("resolve");
    // The imported component is routable but not owned: only declared
    // components become view entries.
    assert_eq!(resolved.load("location").expect("load").views().len(), 1);
}

#[test]
fn import_order_affects_export_precedence_but_not_the_resolved_set() {
    fn build(imports: [Capability; 2]) -> sitehub_kernel::registry::ResolvedRegistry {
        let mut registry = ModuleRegistry::new();
        registry
            .capability(CapabilityModule::new(Capability::Forms).export("value-formatting"))
            .expect("install forms");
        registry
            .capability(CapabilityModule::new(Capability::Common).export("value-formatting"))
            .expect("install common");

        let mut builder = FeatureModuleDescriptor::builder("location")
            .component(ViewComponent::new("location-list", "Locations"));
        for capability in imports {
            builder = builder.capability(capability);
        }
        registry.register(builder.build()).expect("register");
        registry.resolve().expect("resolve")
    }

    let forms_last = build([Capability::Common, Capability::Forms]);
    let common_last = build([Capability::Forms, Capability::Common]);

    let a = forms_last.load("location").expect("load");
    let b = common_last.load("location").expect("load");

    // Same resolved set either way.
    assert_eq!(a.capabilities(), b.capabilities());
    assert_eq!(a.capabilities(), CapabilitySet::FORMS | CapabilitySet::COMMON);

    // The later import wins the shared export name.
    assert_eq!(a.export_provider("value-formatting"), Some(Capability::Forms));
    assert_eq!(b.export_provider("value-formatting"), Some(Capability::Common));
}

#[test]
fn loading_an_unknown_module_fails() {
    let registry = registry_with_host();
    let resolved = registry.resolve().expect("resolve");

    let err = resolved.load("location").expect_err("load must fail");
    assert!(matches!(err, RegistryError::ModuleNotFound { ref module } if module == "location"));
}

#[test]
fn duplicate_capability_install_fails() {
    let mut registry = ModuleRegistry::new();
    registry.capability(CapabilityModule::new(Capability::Forms)).expect("first install");

    let err = registry
        .capability(CapabilityModule::new(Capability::Forms))
        .expect_err("second install must fail");
    assert!(matches!(err, RegistryError::DuplicateCapability { ref capability } if capability == "forms"));
}
