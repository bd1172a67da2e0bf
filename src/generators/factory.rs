//! Generator factory
//!
//! Maps kind identifiers to constructor functions. Kinds are submitted at
//! compile time via `inventory`, so the set of constructible generators is
//! fixed when the binary is built; configuration can only select and
//! parameterize them.

use crate::error::RegistryError;
use crate::generators::Generator;
use crate::generators::descriptor::GeneratorDescriptor;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Constructor signature for a generator kind
///
/// Takes the descriptor's option overrides as a JSON object and returns a
/// ready instance. A deserialization error means the descriptor carried an
/// unknown or ill-typed option.
pub type ConstructFn = fn(Value) -> Result<Arc<dyn Generator>, serde_json::Error>;

/// Compile-time registration entry for a generator kind
///
/// Each built-in generator module submits one of these via
/// `inventory::submit!`.
pub struct GeneratorKind {
    /// Kind identifier referenced by descriptors
    pub kind: &'static str,
    /// Constructor for this kind
    pub construct: ConstructFn,
}

impl GeneratorKind {
    pub const fn new(kind: &'static str, construct: ConstructFn) -> Self {
        Self { kind, construct }
    }
}

inventory::collect!(GeneratorKind);

/// Typed dispatch table from kind identifier to constructor
pub struct GeneratorFactory {
    kinds: HashMap<&'static str, ConstructFn>,
}

impl GeneratorFactory {
    /// Collect every kind submitted at compile time.
    pub fn discover() -> Self {
        let mut kinds = HashMap::new();
        for registration in inventory::iter::<GeneratorKind> {
            kinds.insert(registration.kind, registration.construct);
        }
        Self { kinds }
    }

    /// Whether a kind identifier is constructible.
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// All registered kind identifiers.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    /// Resolve a descriptor to an instance.
    ///
    /// `id` is the registry key the descriptor was configured under; it only
    /// serves error reporting.
    pub fn construct(
        &self,
        id: &str,
        descriptor: &GeneratorDescriptor,
    ) -> Result<Arc<dyn Generator>, RegistryError> {
        let construct = self
            .kinds
            .get(descriptor.kind.as_str())
            .ok_or_else(|| RegistryError::UnknownKind {
                id: id.to_string(),
                kind: descriptor.kind.clone(),
            })?;

        construct(descriptor.options_value()).map_err(|e| RegistryError::InvalidOptions {
            id: id.to_string(),
            kind: descriptor.kind.clone(),
            reason: e.to_string(),
        })
    }
}

impl Default for GeneratorFactory {
    fn default() -> Self {
        Self::discover()
    }
}
