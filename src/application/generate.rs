//! Generate Use Case
//!
//! Orchestrates the generate flow:
//! 1. Load `default` and the target environment
//! 2. Merge them
//! 3. Validate the whole merged config against the schema (when present)
//! 4. Extract one component (optional)
//! 5. Render YAML and, with an output path, write it plus the schema copy
//!
//! Nothing is written unless every earlier step succeeded.

use std::path::PathBuf;

use serde::Serialize;

use crate::application::layers::{load_default, load_schema, merge_env};
use crate::domain::ports::{EnvironmentRepository, FileSystem};
use crate::domain::services::extract;
use crate::domain::value_objects::{ConfigValue, EnvName};
use crate::error::{ConfigError, ConfigResult};
use crate::infrastructure::layout::schema_sibling_path;

/// Options for the generate operation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Environment to merge onto `default`
    pub env: String,
    /// Top-level key to extract
    pub component: Option<String>,
    /// Write the YAML here instead of returning it for stdout
    pub output: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(env: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            component: None,
            output: None,
        }
    }

    pub fn with_component(mut self, component: Option<String>) -> Self {
        self.component = component;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

/// Result of the generate operation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub env: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_output: Option<PathBuf>,
    pub config: ConfigValue,
    /// Rendered YAML of `config`
    #[serde(skip)]
    pub yaml: String,
    /// False when no schema existed and validation was skipped
    #[serde(skip)]
    pub schema_checked: bool,
}

pub struct GenerateUseCase<R, FS>
where
    R: EnvironmentRepository,
    FS: FileSystem,
{
    repo: R,
    file_system: FS,
}

impl<R, FS> GenerateUseCase<R, FS>
where
    R: EnvironmentRepository,
    FS: FileSystem,
{
    pub fn new(repo: R, file_system: FS) -> Self {
        Self { repo, file_system }
    }

    pub fn execute(&self, options: &GenerateOptions) -> ConfigResult<GenerateResult> {
        let env = EnvName::parse(&options.env)?;
        let default = load_default(&self.repo)?;
        let merged = merge_env(&self.repo, &default, &env)?;

        let schema = load_schema(&self.repo)?;
        match &schema {
            Some(loaded) => {
                loaded
                    .validator
                    .validate(merged.value())
                    .map_err(|issues| ConfigError::SchemaValidation {
                        env: env.to_string(),
                        issues,
                    })?;
                tracing::debug!(env = %env, "merged config is valid");
            }
            None => {
                tracing::warn!(
                    path = %self.repo.schema_path().display(),
                    "no schema found, skipping validation"
                );
            }
        }

        let config = match &options.component {
            Some(component) => extract(merged.value(), component)?,
            None => merged.into_value(),
        };

        let yaml = config
            .to_yaml_string()
            .map_err(|e| ConfigError::Render {
                message: e.to_string(),
            })?;

        let schema_output = match (&options.output, &schema) {
            (Some(output), Some(_)) => Some(schema_sibling_path(output)),
            _ => None,
        };
        if let Some(output) = &options.output {
            let mut files = vec![(output.as_path(), yaml.as_str())];
            if let (Some(path), Some(loaded)) = (&schema_output, &schema) {
                files.push((path.as_path(), loaded.document.raw()));
            }
            // The config and its schema copy land together or not at all.
            self.file_system.write_all_atomic(&files)?;
            for (path, _) in &files {
                tracing::info!(path = %path.display(), "wrote file");
            }
        }

        Ok(GenerateResult {
            env: env.to_string(),
            component: options.component.clone(),
            output: options.output.clone(),
            schema_output,
            config,
            yaml,
            schema_checked: schema.is_some(),
        })
    }
}
