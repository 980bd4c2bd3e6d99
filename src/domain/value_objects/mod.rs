//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_value;
mod env_name;
mod schema;

pub use config_value::{ConfigMap, ConfigValue, ValueError};
pub use env_name::{EnvName, DEFAULT_ENV};
pub use schema::SchemaDocument;
