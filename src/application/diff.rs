//! Diff Use Case
//!
//! Merges two environments against the same `default` layer, loaded once,
//! and reports their structural differences. Differences are a normal
//! outcome, not a failure.

use serde::Serialize;

use crate::application::layers::{load_default, merge_env};
use crate::domain::ports::EnvironmentRepository;
use crate::domain::services::{diff, DiffReport};
use crate::domain::value_objects::EnvName;
use crate::error::ConfigResult;

/// Options for the diff operation
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Left-hand environment
    pub env1: String,
    /// Right-hand environment
    pub env2: String,
}

impl DiffOptions {
    pub fn new(env1: impl Into<String>, env2: impl Into<String>) -> Self {
        Self {
            env1: env1.into(),
            env2: env2.into(),
        }
    }
}

/// Result of the diff operation
#[derive(Debug, Clone, Serialize)]
pub struct DiffOutcome {
    pub env1: String,
    pub env2: String,
    #[serde(flatten)]
    pub report: DiffReport,
}

pub struct DiffUseCase<R>
where
    R: EnvironmentRepository,
{
    repo: R,
}

impl<R> DiffUseCase<R>
where
    R: EnvironmentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, options: &DiffOptions) -> ConfigResult<DiffOutcome> {
        let left_env = EnvName::parse(&options.env1)?;
        let right_env = EnvName::parse(&options.env2)?;

        let default = load_default(&self.repo)?;
        let left = merge_env(&self.repo, &default, &left_env)?;
        let right = merge_env(&self.repo, &default, &right_env)?;

        let report = diff(left.value(), right.value());
        tracing::debug!(
            env1 = %left_env,
            env2 = %right_env,
            summary = %report.summary(),
            "computed diff"
        );

        Ok(DiffOutcome {
            env1: left_env.to_string(),
            env2: right_env.to_string(),
            report,
        })
    }
}
