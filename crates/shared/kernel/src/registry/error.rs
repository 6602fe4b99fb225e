use std::borrow::Cow;
use thiserror::Error;

/// A specialized [`Result`] alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Configuration errors raised by the feature module registry.
///
/// Every variant names the offending identifier. All of them are detected
/// while the registry is built or resolved, before the application starts
/// serving; the host must halt startup rather than load a feature partially.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A feature module name was registered twice ("load once").
    #[error("duplicate feature module registration: {module}")]
    DuplicateModule { module: Cow<'static, str> },

    /// A host capability was installed twice.
    #[error("duplicate capability registration: {capability}")]
    DuplicateCapability { capability: Cow<'static, str> },

    /// A component id is declared by more than one module, or twice
    /// within the same module.
    #[error("component {component} is already declared by module {owner} (also declared by {module})")]
    DuplicateComponent {
        module: Cow<'static, str>,
        owner: Cow<'static, str>,
        component: Cow<'static, str>,
    },

    /// A module lists itself in its capability imports.
    #[error("module {module} imports itself")]
    SelfImport { module: Cow<'static, str> },

    /// A module imports a capability the host does not provide.
    #[error("module {module} imports capability {capability}, which the host does not provide")]
    MissingCapability { module: Cow<'static, str>, capability: Cow<'static, str> },

    /// A module imports another module that is not registered.
    #[error("module {module} imports module {import}, which is not registered")]
    MissingModule { module: Cow<'static, str>, import: Cow<'static, str> },

    /// A route targets a component that is neither declared by the module
    /// nor exported by one of its imports.
    #[error("route {path:?} in module {module} targets unresolvable component {target}")]
    UnresolvedRoute {
        module: Cow<'static, str>,
        path: Cow<'static, str>,
        target: Cow<'static, str>,
    },

    /// A module exports a component id it does not declare.
    #[error("module {module} exports undeclared component {component}")]
    UnresolvedExport { module: Cow<'static, str>, component: Cow<'static, str> },

    /// A load request for a module the resolved registry does not contain.
    #[error("feature module not loaded: {module}")]
    ModuleNotFound { module: Cow<'static, str> },
}
