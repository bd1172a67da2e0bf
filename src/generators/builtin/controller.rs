//! Controller generator

use crate::generators::Generator;
use crate::generators::factory::GeneratorKind;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options accepted by the controller generator
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerOptions {
    /// Name of the generated controller
    pub controller_name: String,
    /// Action handlers to generate
    pub actions: Vec<String>,
    /// Module path the controller lives under
    pub module_path: String,
    /// Generate a view stub per action
    pub with_views: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            controller_name: String::new(),
            actions: vec!["index".to_string()],
            module_path: "app::controllers".to_string(),
            with_views: true,
        }
    }
}

/// Scaffolds a controller with one or more actions and their view stubs.
pub struct ControllerGenerator {
    options: ControllerOptions,
}

impl ControllerGenerator {
    pub fn new(options: ControllerOptions) -> Self {
        Self { options }
    }

    fn construct(options: serde_json::Value) -> Result<Arc<dyn Generator>, serde_json::Error> {
        Ok(Arc::new(Self::new(serde_json::from_value(options)?)))
    }
}

impl Generator for ControllerGenerator {
    fn title(&self) -> &str {
        "Controller Generator"
    }

    fn description(&self) -> &str {
        "Generates a new controller with one or several actions and their corresponding views."
    }

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or_default()
    }

    fn options_schema(&self) -> Schema {
        schema_for!(ControllerOptions)
    }
}

inventory::submit! {
    GeneratorKind::new("controller", ControllerGenerator::construct)
}
