//! layered-config - layered YAML configuration engine
//!
//! Merges a `default` YAML layer with one environment's override layer,
//! validates the result against a JSON Schema, extracts single components,
//! and diffs environments. Layers live under a fixed layout:
//!
//! ```text
//! components/config/
//!   envs/default/config.yaml
//!   envs/<env>/config.yaml
//!   schemas/config.schema.json
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{DiffEntry, DiffKind, Layer, LayerSource, ValidationIssue};
pub use domain::services::{
    diff, extract, merge, merge_layers, DiffReport, MergedConfig, SchemaValidator,
};
pub use domain::value_objects::{ConfigMap, ConfigValue, EnvName, SchemaDocument};
pub use error::{ConfigError, ConfigResult};
pub use infrastructure::{ConfigLayout, FsEnvironmentRepository, LocalFs};
