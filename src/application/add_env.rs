//! Add-Env Use Case
//!
//! Creates `envs/<name>/config.yaml` holding only comments, so the new
//! environment merges to exactly `default` until someone edits it.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::EnvironmentRepository;
use crate::domain::value_objects::EnvName;
use crate::error::ConfigResult;

/// Result of the add-env operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddEnvResult {
    pub env: String,
    /// The created layer file
    pub path: PathBuf,
}

pub struct AddEnvUseCase<R>
where
    R: EnvironmentRepository,
{
    repo: R,
}

impl<R> AddEnvUseCase<R>
where
    R: EnvironmentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, name: &str) -> ConfigResult<AddEnvResult> {
        let env = EnvName::parse(name)?;
        let path = self.repo.create_environment(&env)?;

        Ok(AddEnvResult {
            env: env.to_string(),
            path,
        })
    }
}
