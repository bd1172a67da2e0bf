//! Generator registry
//!
//! Built once during startup and immutable afterward. Construction merges
//! the built-in descriptor set with configured overrides (overrides win on
//! ID collision, replacing the built-in entirely) and resolves every entry
//! to a live instance. A single failed entry aborts the build; no partial
//! registry is ever published.

use crate::error::RegistryError;
use crate::generators::Generator;
use crate::generators::builtin;
use crate::generators::descriptor::GeneratorEntry;
use crate::generators::factory::GeneratorFactory;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Immutable mapping from generator ID to resolved instance
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn Generator>>,
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GeneratorRegistry {
    /// Build a registry from the built-in set plus the given overrides.
    pub fn build(overrides: HashMap<String, GeneratorEntry>) -> Result<Self, RegistryError> {
        Self::build_with(&GeneratorFactory::discover(), overrides)
    }

    /// Build the built-in set with no overrides.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::build(HashMap::new())
    }

    /// Build a registry with an explicit factory.
    pub fn build_with(
        factory: &GeneratorFactory,
        overrides: HashMap<String, GeneratorEntry>,
    ) -> Result<Self, RegistryError> {
        // Union of built-ins and overrides; an override with a built-in's ID
        // replaces the whole entry, there is no field-level merge.
        let mut entries = builtin::descriptors();
        entries.extend(overrides);

        let mut generators = HashMap::with_capacity(entries.len());
        for (id, entry) in entries {
            let instance = match entry {
                GeneratorEntry::Instance(generator) => generator,
                GeneratorEntry::Descriptor(descriptor) => factory.construct(&id, &descriptor)?,
            };
            debug!(id = %id, title = instance.title(), "Registered generator");
            generators.insert(id, instance);
        }

        Ok(Self { generators })
    }

    /// Look up a generator by ID.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Generator>> {
        self.generators.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.generators.contains_key(id)
    }

    /// Registered IDs in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.generators.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over all (ID, generator) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Generator>)> {
        self.generators.iter().map(|(id, g)| (id.as_str(), g))
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
