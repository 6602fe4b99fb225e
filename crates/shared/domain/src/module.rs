use crate::capability::{Capability, ImportRef};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of a view component. Each id must be declared by exactly
/// one feature module; the resolver enforces this at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(Cow<'static, str>);

impl ComponentId {
    #[must_use]
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ComponentId {
    fn from(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A declared view component. The component's internal behavior lives
/// outside the module system; only its identity and title are carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewComponent {
    pub id: ComponentId,
    pub title: Cow<'static, str>,
}

impl ViewComponent {
    #[must_use]
    pub fn new(id: impl Into<ComponentId>, title: impl Into<Cow<'static, str>>) -> Self {
        Self { id: id.into(), title: title.into() }
    }
}

/// One internal routing rule: a path pattern and the component it renders.
///
/// Paths are opaque to the module system apart from the target; `:param`
/// segments follow the conventions of the host router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: Cow<'static, str>,
    pub target: ComponentId,
}

impl Route {
    #[must_use]
    pub fn new(path: impl Into<Cow<'static, str>>, target: impl Into<ComponentId>) -> Self {
        Self { path: path.into(), target: target.into() }
    }
}

/// A named bundle of view components and their declared dependencies,
/// loaded as one unit by the host registry.
///
/// The descriptor is pure metadata: it is constructed once through
/// [`FeatureModuleBuilder`] and never mutated afterwards. Consistency
/// (unique components, resolvable routes and imports) is checked by the
/// kernel resolver at bootstrap, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureModuleDescriptor {
    name: Cow<'static, str>,
    components: Vec<ViewComponent>,
    capability_imports: Vec<ImportRef>,
    routes: Vec<Route>,
    exports: Vec<ComponentId>,
}

impl FeatureModuleDescriptor {
    /// Returns a new [`FeatureModuleBuilder`] for a module with the given name.
    #[must_use]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> FeatureModuleBuilder {
        FeatureModuleBuilder {
            name: name.into(),
            components: Vec::new(),
            capability_imports: Vec::new(),
            routes: Vec::new(),
            exports: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn components(&self) -> &[ViewComponent] {
        &self.components
    }

    /// Ordered capability imports; order affects override precedence only.
    #[must_use]
    pub fn capability_imports(&self) -> &[ImportRef] {
        &self.capability_imports
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Components this module makes visible to importing modules.
    #[must_use]
    pub fn exports(&self) -> &[ComponentId] {
        &self.exports
    }
}

/// A fluent builder for [`FeatureModuleDescriptor`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug)]
pub struct FeatureModuleBuilder {
    name: Cow<'static, str>,
    components: Vec<ViewComponent>,
    capability_imports: Vec<ImportRef>,
    routes: Vec<Route>,
    exports: Vec<ComponentId>,
}

impl FeatureModuleBuilder {
    /// Declares a view component owned by this module.
    pub fn component(mut self, component: ViewComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Appends a capability import. Declaration order is preserved.
    pub fn import(mut self, import: impl Into<ImportRef>) -> Self {
        self.capability_imports.push(import.into());
        self
    }

    /// Appends a host capability import.
    pub fn capability(self, capability: Capability) -> Self {
        self.import(capability)
    }

    /// Adds an internal routing rule.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Marks a declared component as visible to importing modules.
    pub fn export(mut self, id: impl Into<ComponentId>) -> Self {
        self.exports.push(id.into());
        self
    }

    /// Finalizes the descriptor. The result is immutable.
    pub fn build(self) -> FeatureModuleDescriptor {
        FeatureModuleDescriptor {
            name: self.name,
            components: self.components,
            capability_imports: self.capability_imports,
            routes: self.routes,
            exports: self.exports,
        }
    }
}
