//! Build-time registry for feature modules.
//! Registration collects descriptors; [`ModuleRegistry::resolve`] runs the
//! validation pass and produces an immutable [`ResolvedRegistry`] the host
//! serves from. Nothing is loaded until the whole table is consistent.

mod error;

pub use error::{RegistryError, Result};

use fxhash::{FxHashMap, FxHashSet};
use serde::Serialize;
use sitehub_domain::capability::{Capability, CapabilityModule, CapabilitySet, ImportRef};
use sitehub_domain::module::{ComponentId, FeatureModuleDescriptor};
use std::borrow::Cow;
use tracing::{debug, info};

/// Registration table mapping feature-unit identifiers to their
/// (component-set, dependency-set) declarations.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    capabilities: FxHashMap<Capability, CapabilityModule>,
    modules: Vec<FeatureModuleDescriptor>,
}

impl ModuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a host-provided capability module.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateCapability`] if the capability is
    /// already installed.
    pub fn capability(&mut self, module: CapabilityModule) -> Result<()> {
        let capability = module.capability;
        if self.capabilities.contains_key(&capability) {
            return Err(RegistryError::DuplicateCapability { capability: capability.name().into() });
        }
        debug!(capability = %capability, "Capability module installed");
        self.capabilities.insert(capability, module);
        Ok(())
    }

    /// Registers a feature module descriptor.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateModule`] if a module with the same
    /// name is already registered. Registration is "load once": the second
    /// attempt fails, it is never merged or replaced.
    pub fn register(&mut self, descriptor: FeatureModuleDescriptor) -> Result<()> {
        if self.modules.iter().any(|m| m.name() == descriptor.name()) {
            return Err(RegistryError::DuplicateModule {
                module: descriptor.name().to_owned().into(),
            });
        }
        debug!(module = descriptor.name(), "Feature module registered");
        self.modules.push(descriptor);
        Ok(())
    }

    /// Runs the validation pass and produces the immutable registry.
    ///
    /// The pass checks, in order: component ownership (each id declared by
    /// exactly one module), export declarations, import resolvability
    /// (including self-import), and route targets. The first inconsistency
    /// aborts resolution.
    ///
    /// # Errors
    /// Returns the first [`RegistryError`] found; on error nothing is
    /// considered loaded.
    pub fn resolve(self) -> Result<ResolvedRegistry> {
        let mut owners: FxHashMap<&ComponentId, &str> = FxHashMap::default();
        for module in &self.modules {
            for component in module.components() {
                if let Some(owner) = owners.insert(&component.id, module.name()) {
                    return Err(RegistryError::DuplicateComponent {
                        module: module.name().to_owned().into(),
                        owner: owner.to_owned().into(),
                        component: component.id.to_string().into(),
                    });
                }
            }
        }

        let mut loaded = Vec::with_capacity(self.modules.len());
        for module in &self.modules {
            loaded.push(self.resolve_module(module)?);
        }

        let index = loaded
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name().to_owned(), i))
            .collect::<FxHashMap<_, _>>();

        info!(modules = loaded.len(), "Feature registry resolved");
        Ok(ResolvedRegistry { modules: loaded, index })
    }

    fn resolve_module(&self, module: &FeatureModuleDescriptor) -> Result<LoadedModule> {
        for export in module.exports() {
            if !module.components().iter().any(|c| &c.id == export) {
                return Err(RegistryError::UnresolvedExport {
                    module: module.name().to_owned().into(),
                    component: export.to_string().into(),
                });
            }
        }

        let mut capabilities = CapabilitySet::empty();
        let mut export_providers: FxHashMap<Cow<'static, str>, Capability> = FxHashMap::default();
        let mut visible: FxHashSet<&ComponentId> =
            module.components().iter().map(|c| &c.id).collect();

        for import in module.capability_imports() {
            match import {
                ImportRef::Capability(capability) => {
                    let Some(provided) = self.capabilities.get(capability) else {
                        return Err(RegistryError::MissingCapability {
                            module: module.name().to_owned().into(),
                            capability: capability.name().into(),
                        });
                    };
                    capabilities |= capability.as_set();
                    // Later imports override earlier ones for shared export names.
                    for name in &provided.exports {
                        export_providers.insert(name.clone(), *capability);
                    }
                },
                ImportRef::Module(name) => {
                    if name == module.name() {
                        return Err(RegistryError::SelfImport {
                            module: module.name().to_owned().into(),
                        });
                    }
                    let Some(imported) = self.modules.iter().find(|m| m.name() == name) else {
                        return Err(RegistryError::MissingModule {
                            module: module.name().to_owned().into(),
                            import: name.clone(),
                        });
                    };
                    visible.extend(imported.exports().iter());
                },
            }
        }

        for route in module.routes() {
            if !visible.contains(&route.target) {
                return Err(RegistryError::UnresolvedRoute {
                    module: module.name().to_owned().into(),
                    path: route.path.clone(),
                    target: route.target.to_string().into(),
                });
            }
        }

        let views = module
            .components()
            .iter()
            .map(|component| ViewEntry {
                id: component.id.to_string(),
                title: component.title.to_string(),
                path: module
                    .routes()
                    .iter()
                    .find(|route| route.target == component.id)
                    .map(|route| route.path.to_string()),
            })
            .collect();

        Ok(LoadedModule {
            name: module.name().to_owned(),
            views,
            capabilities,
            export_providers,
        })
    }
}

/// Immutable outcome of a successful resolver pass.
#[derive(Debug, Default)]
pub struct ResolvedRegistry {
    modules: Vec<LoadedModule>,
    index: FxHashMap<String, usize>,
}

impl ResolvedRegistry {
    /// Returns the loaded module with the given name.
    ///
    /// # Errors
    /// Returns [`RegistryError::ModuleNotFound`] for unknown names.
    pub fn load(&self, name: &str) -> Result<&LoadedModule> {
        self.index
            .get(name)
            .map(|&i| &self.modules[i])
            .ok_or_else(|| RegistryError::ModuleNotFound { module: name.to_owned().into() })
    }

    /// Iterates loaded modules in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &LoadedModule> {
        self.modules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// A feature module after resolution: its loadable views, the flattened
/// capability set, and the export-name precedence table.
#[derive(Debug)]
pub struct LoadedModule {
    name: String,
    views: Vec<ViewEntry>,
    capabilities: CapabilitySet,
    export_providers: FxHashMap<Cow<'static, str>, Capability>,
}

impl LoadedModule {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One entry per declared view component, in declaration order.
    #[must_use]
    pub fn views(&self) -> &[ViewEntry] {
        &self.views
    }

    /// The resolved capability set. Independent of import order.
    #[must_use]
    pub const fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    /// The capability that wins for an export name, with later imports
    /// taking precedence over earlier ones.
    #[must_use]
    pub fn export_provider(&self, name: &str) -> Option<Capability> {
        self.export_providers.get(name).copied()
    }
}

/// A loadable view entry of a resolved module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ViewEntry {
    /// Component identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Route path rendering this view, if the module routes to it.
    pub path: Option<String>,
}

/// Capability modules the host provides, limited to the configured set.
#[must_use]
pub fn host_capabilities(set: CapabilitySet) -> Vec<CapabilityModule> {
    let mut provided = Vec::new();
    if set.contains(CapabilitySet::FORMS) {
        provided.push(
            CapabilityModule::new(Capability::Forms).export("model-binding").export("form-state"),
        );
    }
    if set.contains(CapabilitySet::COMMON) {
        provided.push(
            CapabilityModule::new(Capability::Common)
                .export("structural-directives")
                .export("value-formatting"),
        );
    }
    if set.contains(CapabilitySet::ROUTING) {
        provided.push(
            CapabilityModule::new(Capability::Routing).export("router-outlet").export("route-params"),
        );
    }
    if set.contains(CapabilitySet::DATA_TABLE) {
        provided.push(
            CapabilityModule::new(Capability::DataTable)
                .export("paginated-table")
                .export("table-sorting"),
        );
    }
    provided
}
