//! Schema validator
//!
//! Compiles a [`SchemaDocument`] with the `jsonschema` crate and validates a
//! whole merged config against it, collecting every violation rather than
//! stopping at the first.

use crate::domain::entities::ValidationIssue;
use crate::domain::value_objects::{ConfigValue, SchemaDocument};

/// A compiled schema, reusable across several environments.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile a schema. The error is the compiler's message.
    pub fn compile(schema: &SchemaDocument) -> Result<Self, String> {
        jsonschema::validator_for(schema.as_json())
            .map(|validator| Self { validator })
            .map_err(|e| e.to_string())
    }

    /// Validate a config, returning every violation on failure.
    pub fn validate(&self, config: &ConfigValue) -> Result<(), Vec<ValidationIssue>> {
        let instance = config.to_json();
        let issues: Vec<ValidationIssue> = self
            .validator
            .iter_errors(&instance)
            .map(|err| ValidationIssue::new(err.instance_path.to_string(), err.to_string()))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
