//! CRUD generator

use crate::generators::Generator;
use crate::generators::factory::GeneratorKind;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options accepted by the CRUD generator
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CrudOptions {
    /// Fully qualified model struct the CRUD surface is built around
    pub model_struct: String,
    /// Name of the generated controller
    pub controller_name: String,
    /// Directory the generated views are written under
    pub view_path: String,
    /// Generate a search/filter form alongside the index listing
    pub enable_search: bool,
    /// Rows per page in the generated index listing
    pub page_size: u32,
}

impl Default for CrudOptions {
    fn default() -> Self {
        Self {
            model_struct: String::new(),
            controller_name: String::new(),
            view_path: "views".to_string(),
            enable_search: true,
            page_size: 20,
        }
    }
}

/// Scaffolds a controller and views implementing create, read, update and
/// delete operations for a data model.
pub struct CrudGenerator {
    options: CrudOptions,
}

impl CrudGenerator {
    pub fn new(options: CrudOptions) -> Self {
        Self { options }
    }

    fn construct(options: serde_json::Value) -> Result<Arc<dyn Generator>, serde_json::Error> {
        Ok(Arc::new(Self::new(serde_json::from_value(options)?)))
    }
}

impl Generator for CrudGenerator {
    fn title(&self) -> &str {
        "CRUD Generator"
    }

    fn description(&self) -> &str {
        "Generates a controller and views implementing CRUD (Create, Read, Update, Delete) \
         operations for the specified data model."
    }

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or_default()
    }

    fn options_schema(&self) -> Schema {
        schema_for!(CrudOptions)
    }
}

inventory::submit! {
    GeneratorKind::new("crud", CrudGenerator::construct)
}
