//! EnvironmentRepository port - where layers and the schema come from
//!
//! The repository knows the on-disk layout; use cases only see layers,
//! schema documents, and environment names.

use std::path::PathBuf;

use crate::domain::entities::Layer;
use crate::domain::value_objects::{EnvName, SchemaDocument};
use crate::error::ConfigResult;

pub trait EnvironmentRepository {
    /// Load one environment's layer.
    ///
    /// Fails with `LayerNotFound` when the layer file is missing and
    /// `YamlParse` when it is malformed. An empty file is an empty layer.
    fn load_layer(&self, env: &EnvName) -> ConfigResult<Layer>;

    /// Load the schema document, or `None` when no schema file exists.
    ///
    /// A schema file that exists but is not valid JSON is `SchemaParse`.
    fn load_schema(&self) -> ConfigResult<Option<SchemaDocument>>;

    /// Where the schema lives (whether or not it exists)
    fn schema_path(&self) -> PathBuf;

    /// Every environment directory, `default` first, the rest sorted by name.
    fn list_environments(&self) -> ConfigResult<Vec<EnvName>>;

    /// Create a new environment with an empty placeholder layer.
    ///
    /// Returns the path of the created `config.yaml`.
    fn create_environment(&self, env: &EnvName) -> ConfigResult<PathBuf>;
}
