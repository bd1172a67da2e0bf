//! Form generator

use crate::generators::Generator;
use crate::generators::factory::GeneratorKind;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options accepted by the form generator
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FormOptions {
    /// Fully qualified model struct the form collects input for
    pub model_struct: String,
    /// Name of the generated view file
    pub view_name: String,
    /// Validation scenario applied to submitted input
    pub scenario: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            model_struct: String::new(),
            view_name: String::new(),
            scenario: "default".to_string(),
        }
    }
}

/// Scaffolds a view displaying a form that collects input for a model.
pub struct FormGenerator {
    options: FormOptions,
}

impl FormGenerator {
    pub fn new(options: FormOptions) -> Self {
        Self { options }
    }

    fn construct(options: serde_json::Value) -> Result<Arc<dyn Generator>, serde_json::Error> {
        Ok(Arc::new(Self::new(serde_json::from_value(options)?)))
    }
}

impl Generator for FormGenerator {
    fn title(&self) -> &str {
        "Form Generator"
    }

    fn description(&self) -> &str {
        "Generates a view file displaying a form to collect input for the specified model."
    }

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or_default()
    }

    fn options_schema(&self) -> Schema {
        schema_for!(FormOptions)
    }
}

inventory::submit! {
    GeneratorKind::new("form", FormGenerator::construct)
}
