//! Generator descriptors
//!
//! A descriptor says how to build a generator: a kind identifier plus
//! property overrides. Descriptors come from two sources, the built-in
//! defaults and the `[generators]` configuration table; embedding code may
//! also hand the registry pre-built instances directly.

use crate::generators::Generator;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Specification for constructing a generator instance
///
/// In TOML, the `kind` key selects the generator implementation and every
/// other key is an option override passed to its constructor:
///
/// ```toml
/// [generators.crud]
/// kind = "crud"
/// page_size = 50
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorDescriptor {
    /// Generator kind identifier (e.g. `"model"`, `"crud"`)
    pub kind: String,

    /// Option overrides applied at construction
    #[serde(flatten, default)]
    pub options: Map<String, Value>,
}

impl GeneratorDescriptor {
    /// Create a descriptor with no option overrides.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            options: Map::new(),
        }
    }

    /// Add an option override.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The option overrides as a JSON object value.
    pub fn options_value(&self) -> Value {
        Value::Object(self.options.clone())
    }
}

/// Pre-initialization registry entry: a descriptor to resolve, or an
/// already-constructed instance used as-is.
#[derive(Clone)]
pub enum GeneratorEntry {
    /// Resolve via the factory at registry build time
    Descriptor(GeneratorDescriptor),
    /// Use the given instance without construction
    Instance(Arc<dyn Generator>),
}

impl From<GeneratorDescriptor> for GeneratorEntry {
    fn from(descriptor: GeneratorDescriptor) -> Self {
        GeneratorEntry::Descriptor(descriptor)
    }
}

impl From<Arc<dyn Generator>> for GeneratorEntry {
    fn from(instance: Arc<dyn Generator>) -> Self {
        GeneratorEntry::Instance(instance)
    }
}

impl fmt::Debug for GeneratorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorEntry::Descriptor(d) => f.debug_tuple("Descriptor").field(d).finish(),
            GeneratorEntry::Instance(g) => {
                f.debug_tuple("Instance").field(&g.title()).finish()
            }
        }
    }
}
