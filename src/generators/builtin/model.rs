//! Model generator

use crate::generators::Generator;
use crate::generators::factory::GeneratorKind;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options accepted by the model generator
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ModelOptions {
    /// Database table the model is scaffolded from
    pub table_name: String,
    /// Name of the generated model struct; derived from the table name when empty
    pub model_name: String,
    /// Module path the generated model lives under
    pub module_path: String,
    /// Derive serde `Serialize`/`Deserialize` on the generated struct
    pub derive_serde: bool,
    /// Generate human-readable field label helpers
    pub generate_labels: bool,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            table_name: String::new(),
            model_name: String::new(),
            module_path: "app::models".to_string(),
            derive_serde: true,
            generate_labels: true,
        }
    }
}

/// Scaffolds a typed data-model struct for a database table.
pub struct ModelGenerator {
    options: ModelOptions,
}

impl ModelGenerator {
    pub fn new(options: ModelOptions) -> Self {
        Self { options }
    }

    fn construct(options: serde_json::Value) -> Result<Arc<dyn Generator>, serde_json::Error> {
        Ok(Arc::new(Self::new(serde_json::from_value(options)?)))
    }
}

impl Generator for ModelGenerator {
    fn title(&self) -> &str {
        "Model Generator"
    }

    fn description(&self) -> &str {
        "Generates a model struct for the specified database table."
    }

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or_default()
    }

    fn options_schema(&self) -> Schema {
        schema_for!(ModelOptions)
    }
}

inventory::submit! {
    GeneratorKind::new("model", ModelGenerator::construct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let generator = ModelGenerator::new(ModelOptions::default());
        let options = generator.options();
        assert_eq!(options["module_path"], "app::models");
        assert_eq!(options["derive_serde"], true);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result = ModelGenerator::construct(serde_json::json!({"chmod": "0666"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_lists_options() {
        let schema = ModelGenerator::new(ModelOptions::default()).options_schema();
        let schema = serde_json::to_value(schema).unwrap();
        assert!(schema["properties"].get("table_name").is_some());
    }
}
