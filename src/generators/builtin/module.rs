//! Module generator

use crate::generators::Generator;
use crate::generators::factory::GeneratorKind;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options accepted by the module generator
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleOptions {
    /// ID the new module is mounted under
    pub module_id: String,
    /// Directory the module skeleton is written under
    pub module_path: String,
    /// Generate a default controller with an index action
    pub with_default_controller: bool,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            module_id: String::new(),
            module_path: "modules".to_string(),
            with_default_controller: true,
        }
    }
}

/// Scaffolds the skeleton code a new application module needs.
pub struct ModuleGenerator {
    options: ModuleOptions,
}

impl ModuleGenerator {
    pub fn new(options: ModuleOptions) -> Self {
        Self { options }
    }

    fn construct(options: serde_json::Value) -> Result<Arc<dyn Generator>, serde_json::Error> {
        Ok(Arc::new(Self::new(serde_json::from_value(options)?)))
    }
}

impl Generator for ModuleGenerator {
    fn title(&self) -> &str {
        "Module Generator"
    }

    fn description(&self) -> &str {
        "Generates the skeleton code needed by an application module."
    }

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or_default()
    }

    fn options_schema(&self) -> Schema {
        schema_for!(ModuleOptions)
    }
}

inventory::submit! {
    GeneratorKind::new("module", ModuleGenerator::construct)
}
