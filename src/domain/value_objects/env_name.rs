//! EnvName value object - a validated environment name

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigError, ConfigResult};

/// Name of the mandatory base environment
pub const DEFAULT_ENV: &str = "default";

static ENV_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("env name pattern compiles"));

/// An environment name matching `^[a-z][a-z0-9-]*$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvName(String);

impl EnvName {
    /// Validate and wrap a user-supplied name
    pub fn parse(name: &str) -> ConfigResult<Self> {
        if ENV_NAME_PATTERN.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(ConfigError::InvalidName {
                name: name.to_string(),
            })
        }
    }

    /// The mandatory base environment
    pub fn default_env() -> Self {
        Self(DEFAULT_ENV.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_ENV
    }
}

impl std::fmt::Display for EnvName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
