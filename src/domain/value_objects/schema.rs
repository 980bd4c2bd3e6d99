//! SchemaDocument value object
//!
//! A parsed JSON Schema. The top-level `$schema` draft declaration is removed
//! on construction so the document compiles with the validator's own default
//! draft. The raw text is kept for copying next to generated output.

use serde_json::Value;

/// A parsed JSON Schema ready for compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    schema: Value,
    raw: String,
    declared_draft: Option<String>,
}

impl SchemaDocument {
    /// Parse schema text, stripping the top-level `$schema` field.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let mut schema: Value = serde_json::from_str(raw)?;

        let declared_draft = match schema.as_object_mut() {
            Some(obj) => obj
                .remove("$schema")
                .and_then(|v| v.as_str().map(str::to_string)),
            None => None,
        };

        Ok(Self {
            schema,
            raw: raw.to_string(),
            declared_draft,
        })
    }

    /// The schema as compiled (without `$schema`)
    pub fn as_json(&self) -> &Value {
        &self.schema
    }

    /// The original file contents, byte for byte
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The draft URI the file declared, if any
    pub fn declared_draft(&self) -> Option<&str> {
        self.declared_draft.as_deref()
    }
}
