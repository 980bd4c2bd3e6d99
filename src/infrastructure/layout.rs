//! Project layout
//!
//! Every path the engine touches is derived from one explicit project root:
//!
//! ```text
//! <root>/components/config/
//!   envs/default/config.yaml     (mandatory)
//!   envs/<env>/config.yaml       (zero or more)
//!   schemas/config.schema.json   (optional)
//! ```

use std::path::{Path, PathBuf};

use crate::domain::value_objects::EnvName;

pub const CONFIG_COMPONENT_DIR: &str = "components/config";
pub const ENVS_DIR: &str = "envs";
pub const LAYER_FILE: &str = "config.yaml";
pub const SCHEMA_FILE: &str = "schemas/config.schema.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayout {
    root: PathBuf,
}

impl ConfigLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/components/config`
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_COMPONENT_DIR)
    }

    /// `<root>/components/config/envs`
    pub fn envs_dir(&self) -> PathBuf {
        self.config_dir().join(ENVS_DIR)
    }

    pub fn env_dir(&self, env: &EnvName) -> PathBuf {
        self.envs_dir().join(env.as_str())
    }

    pub fn layer_path(&self, env: &EnvName) -> PathBuf {
        self.env_dir(env).join(LAYER_FILE)
    }

    pub fn schema_path(&self) -> PathBuf {
        self.config_dir().join(SCHEMA_FILE)
    }
}

/// Sibling schema path for a generated config: `app.yaml` -> `app.schema.json`
pub fn schema_sibling_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    output.with_file_name(format!("{}.schema.json", stem))
}
