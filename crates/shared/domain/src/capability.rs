use crate::constants::{COMMON, DATA_TABLE, FORMS, ROUTING};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A capability module the host application can provide to feature modules.
///
/// The set is closed: feature modules may only draw on capabilities the
/// platform knows at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Form handling (model binding, form state).
    Forms,
    /// Common directives and value formatting.
    Common,
    /// Routing rules and route parameter access.
    Routing,
    /// Paginated data-table rendering.
    DataTable,
}

impl Capability {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forms => FORMS,
            Self::Common => COMMON,
            Self::Routing => ROUTING,
            Self::DataTable => DATA_TABLE,
        }
    }

    #[must_use]
    pub const fn as_set(self) -> CapabilitySet {
        match self {
            Self::Forms => CapabilitySet::FORMS,
            Self::Common => CapabilitySet::COMMON,
            Self::Routing => CapabilitySet::ROUTING,
            Self::DataTable => CapabilitySet::DATA_TABLE,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Represents a set of resolved capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CapabilitySet: u32 {
        const FORMS = 1 << 0;
        const COMMON = 1 << 1;
        const ROUTING = 1 << 2;
        const DATA_TABLE = 1 << 3;

        const ALL = Self::FORMS.bits()
            | Self::COMMON.bits()
            | Self::ROUTING.bits()
            | Self::DATA_TABLE.bits();
    }
}

impl CapabilitySet {
    /// Names of the capabilities present in the set, in flag order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [Capability::Forms, Capability::Common, Capability::Routing, Capability::DataTable]
            .into_iter()
            .filter(|c| self.contains(c.as_set()))
            .map(Capability::name)
            .collect()
    }
}

impl From<&str> for CapabilitySet {
    fn from(s: &str) -> Self {
        match s {
            FORMS => Self::FORMS,
            COMMON => Self::COMMON,
            ROUTING => Self::ROUTING,
            DATA_TABLE => Self::DATA_TABLE,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for CapabilitySet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl From<Capability> for CapabilitySet {
    fn from(capability: Capability) -> Self {
        capability.as_set()
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// Host-side metadata for a provided capability: its tag and the export
/// names it contributes to importing modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityModule {
    pub capability: Capability,
    pub exports: Vec<Cow<'static, str>>,
}

impl CapabilityModule {
    #[must_use]
    pub const fn new(capability: Capability) -> Self {
        Self { capability, exports: Vec::new() }
    }

    /// Adds an export name this capability contributes.
    #[must_use]
    pub fn export(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.exports.push(name.into());
        self
    }
}

/// One entry of a feature module's ordered `capability_imports` sequence.
///
/// Order is preserved because it drives override precedence when two
/// imports contribute the same export name; it never changes the set of
/// resolved capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportRef {
    /// A host-provided capability module.
    Capability(Capability),
    /// Another registered feature module, referenced by name.
    Module(Cow<'static, str>),
}

impl ImportRef {
    #[must_use]
    pub fn module(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Module(name.into())
    }
}

impl From<Capability> for ImportRef {
    fn from(capability: Capability) -> Self {
        Self::Capability(capability)
    }
}

impl fmt::Display for ImportRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capability(c) => write!(f, "{c}"),
            Self::Module(name) => write!(f, "{name}"),
        }
    }
}
