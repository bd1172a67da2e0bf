//! Code generators
//!
//! A generator is a unit of scaffolding logic identified by a stable ID
//! string (e.g. `"crud"`). The module ships five built-in generators and
//! merges user-supplied configuration over them at startup: a configured
//! entry with the same ID as a built-in replaces it entirely.
//!
//! Generator kinds are registered at compile time via `inventory`, so
//! resolving a descriptor to an instance is a typed table lookup rather
//! than reflection.
//!
//! ## Example Configuration
//!
//! ```toml
//! [generators.crud]
//! kind = "crud"
//! page_size = 50
//!
//! [generators.api-controller]
//! kind = "controller"
//! actions = ["index", "view"]
//! ```

pub mod builtin;
pub mod descriptor;
pub mod factory;
pub mod registry;

pub use descriptor::{GeneratorDescriptor, GeneratorEntry};
pub use factory::{GeneratorFactory, GeneratorKind};
pub use registry::GeneratorRegistry;

use schemars::Schema;

/// A code generator
///
/// Implementations carry their effective option values and describe
/// themselves for the HTTP surface. Instances are immutable once
/// constructed and shared behind `Arc`.
pub trait Generator: Send + Sync {
    /// Human-readable name shown in generator listings
    fn title(&self) -> &str;

    /// What this generator scaffolds
    fn description(&self) -> &str;

    /// Effective option values as a JSON object
    fn options(&self) -> serde_json::Value;

    /// JSON Schema describing the accepted options
    fn options_schema(&self) -> Schema;
}

impl std::fmt::Debug for dyn Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("title", &self.title())
            .finish_non_exhaustive()
    }
}
