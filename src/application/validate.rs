//! Validate Use Case
//!
//! Checks one environment, or every environment under `envs/`, against the
//! schema. A bad environment is recorded in the report and the batch carries
//! on; only a missing `default` layer or a broken schema abort the command.

use serde::Serialize;

use crate::application::layers::{load_default, load_schema, merge_env, LoadedSchema};
use crate::domain::entities::{Layer, ValidationIssue};
use crate::domain::ports::EnvironmentRepository;
use crate::domain::value_objects::EnvName;
use crate::error::{ConfigError, ConfigResult};

/// Options for the validate operation
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Check only this environment (None = every environment)
    pub env: Option<String>,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, env: Option<String>) -> Self {
        self.env = env;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaStatus {
    Present,
    Absent,
}

/// Why an environment could not be checked at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvFailure {
    pub code: &'static str,
    pub message: String,
}

impl From<&ConfigError> for EnvFailure {
    fn from(err: &ConfigError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Outcome for one environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvReport {
    pub env: String,
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EnvFailure>,
}

impl EnvReport {
    fn valid(env: &EnvName) -> Self {
        Self {
            env: env.to_string(),
            valid: true,
            errors: Vec::new(),
            error: None,
        }
    }

    fn invalid(env: &EnvName, errors: Vec<ValidationIssue>) -> Self {
        Self {
            env: env.to_string(),
            valid: false,
            errors,
            error: None,
        }
    }

    fn failed(env: &EnvName, err: &ConfigError) -> Self {
        Self {
            env: env.to_string(),
            valid: false,
            errors: Vec::new(),
            error: Some(EnvFailure::from(err)),
        }
    }
}

/// Result of the validate operation
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResult {
    pub schema: SchemaStatus,
    pub environments: Vec<EnvReport>,
}

impl ValidateResult {
    /// True when every checked environment is valid
    pub fn is_success(&self) -> bool {
        self.environments.iter().all(|e| e.valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.environments.iter().filter(|e| !e.valid).count()
    }
}

pub struct ValidateUseCase<R>
where
    R: EnvironmentRepository,
{
    repo: R,
}

impl<R> ValidateUseCase<R>
where
    R: EnvironmentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, options: &ValidateOptions) -> ConfigResult<ValidateResult> {
        let requested = options.env.as_deref().map(EnvName::parse).transpose()?;

        let default = load_default(&self.repo)?;
        let schema = load_schema(&self.repo)?;
        if schema.is_none() {
            tracing::warn!(
                path = %self.repo.schema_path().display(),
                "no schema found, environments are reported valid without checking"
            );
        }

        let envs = match requested {
            Some(env) => vec![env],
            None => self.repo.list_environments()?,
        };

        let environments = envs
            .iter()
            .map(|env| self.check(&default, schema.as_ref(), env))
            .collect();

        Ok(ValidateResult {
            schema: if schema.is_some() {
                SchemaStatus::Present
            } else {
                SchemaStatus::Absent
            },
            environments,
        })
    }

    fn check(&self, default: &Layer, schema: Option<&LoadedSchema>, env: &EnvName) -> EnvReport {
        let merged = match merge_env(&self.repo, default, env) {
            Ok(merged) => merged,
            Err(err) => {
                tracing::debug!(env = %env, error = %err, "environment could not be loaded");
                return EnvReport::failed(env, &err);
            }
        };

        let Some(schema) = schema else {
            return EnvReport::valid(env);
        };

        match schema.validator.validate(merged.value()) {
            Ok(()) => EnvReport::valid(env),
            Err(issues) => {
                tracing::debug!(env = %env, count = issues.len(), "schema violations");
                EnvReport::invalid(env, issues)
            }
        }
    }
}
