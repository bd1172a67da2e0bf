//! Built-in generators
//!
//! The five generators every codesmith installation starts with. Each
//! module submits its kind to the factory via `inventory::submit!`.

pub mod controller;
pub mod crud;
pub mod form;
pub mod model;
pub mod module;

pub use controller::ControllerGenerator;
pub use crud::CrudGenerator;
pub use form::FormGenerator;
pub use model::ModelGenerator;
pub use module::ModuleGenerator;

use crate::generators::descriptor::{GeneratorDescriptor, GeneratorEntry};
use std::collections::HashMap;

/// IDs of the built-in generator set
pub const BUILTIN_IDS: &[&str] = &["model", "crud", "controller", "form", "module"];

/// Descriptors for the built-in set, all with default options.
///
/// Configured overrides are merged over this map at registry build time.
pub fn descriptors() -> HashMap<String, GeneratorEntry> {
    BUILTIN_IDS
        .iter()
        .map(|id| (id.to_string(), GeneratorDescriptor::new(*id).into()))
        .collect()
}
