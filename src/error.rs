//! Error types for layered-config
//!
//! Uses `thiserror` for library errors. Every variant names the exact path,
//! pattern, or key set the user needs to fix the input.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ValidationIssue;

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main error type for config operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment's `config.yaml` does not exist
    #[error("configuration layer for environment '{env}' not found: {path}")]
    LayerNotFound { env: String, path: PathBuf },

    /// A layer file is not valid YAML (or not a mapping at the top level)
    #[error("invalid YAML in {path}: {message}")]
    YamlParse { path: PathBuf, message: String },

    /// The schema file exists but is not valid JSON or not a valid schema
    #[error("invalid JSON schema in {path}: {message}")]
    SchemaParse { path: PathBuf, message: String },

    /// The merged configuration violates the schema
    #[error("merged configuration for '{env}' violates the schema ({} error(s))", .issues.len())]
    SchemaValidation {
        env: String,
        issues: Vec<ValidationIssue>,
    },

    /// The requested component is not a top-level key
    #[error("component '{component}' not found; available components: {}", format_keys(.available))]
    ComponentNotFound {
        component: String,
        available: Vec<String>,
    },

    /// Environment name does not match the allowed pattern
    #[error("invalid environment name '{name}': must match ^[a-z][a-z0-9-]*$")]
    InvalidName { name: String },

    /// Environment directory already exists
    #[error("environment '{env}' already exists at {path}")]
    AlreadyExists { env: String, path: PathBuf },

    /// The `envs/` root directory is missing
    #[error("environments directory not found: {path}")]
    EnvsRootMissing { path: PathBuf },

    /// Rendering the merged config as YAML failed
    #[error("failed to render configuration: {message}")]
    Render { message: String },

    /// IO error on a specific path
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code used in JSON output
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::LayerNotFound { .. } => "layer_not_found",
            ConfigError::YamlParse { .. } => "yaml_parse_error",
            ConfigError::SchemaParse { .. } => "schema_parse_error",
            ConfigError::SchemaValidation { .. } => "schema_validation_error",
            ConfigError::ComponentNotFound { .. } => "component_not_found",
            ConfigError::InvalidName { .. } => "invalid_name",
            ConfigError::AlreadyExists { .. } => "already_exists",
            ConfigError::EnvsRootMissing { .. } => "envs_root_missing",
            ConfigError::Render { .. } => "render_error",
            ConfigError::Io { .. } => "io_error",
        }
    }

    /// A one-line suggestion for fixing the input, where one applies
    pub fn help(&self) -> Option<String> {
        match self {
            ConfigError::LayerNotFound { env, .. } if env == "default" => {
                Some("Create components/config/envs/default/config.yaml".to_string())
            }
            ConfigError::LayerNotFound { env, .. } => {
                Some(format!("Run: config add-env {}", env))
            }
            ConfigError::InvalidName { .. } => Some(
                "Use lowercase letters, digits and '-', starting with a letter (e.g. 'staging')"
                    .to_string(),
            ),
            ConfigError::AlreadyExists { path, .. } => {
                Some(format!("Edit {} instead", path.join("config.yaml").display()))
            }
            ConfigError::EnvsRootMissing { .. } => Some(
                "Scaffold components/config/envs/default/config.yaml before adding environments"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

fn format_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        "(none)".to_string()
    } else {
        keys.join(", ")
    }
}
