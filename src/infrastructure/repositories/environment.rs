//! Filesystem Environment Repository
//!
//! Implements the EnvironmentRepository port over the fixed
//! `components/config/` layout. Every call re-reads from disk; nothing is cached.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Layer, LayerSource};
use crate::domain::ports::EnvironmentRepository;
use crate::domain::value_objects::{ConfigValue, EnvName, SchemaDocument};
use crate::error::{ConfigError, ConfigResult};
use crate::infrastructure::layout::{ConfigLayout, LAYER_FILE};

/// Written into a freshly created environment. Comments only, so the layer
/// parses as empty and merging it leaves `default` unchanged.
fn placeholder_layer(env: &EnvName) -> String {
    format!(
        "# Configuration overrides for the '{env}' environment.\n\
         #\n\
         # Values here are deep-merged on top of envs/default/config.yaml:\n\
         #   - mappings merge key by key\n\
         #   - lists and scalars replace the default value\n\
         #   - a null value removes the key from the merged result\n\
         #\n\
         # Example:\n\
         # server:\n\
         #   port: 8080\n"
    )
}

#[derive(Debug, Clone)]
pub struct FsEnvironmentRepository {
    layout: ConfigLayout,
}

impl FsEnvironmentRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: ConfigLayout::new(root),
        }
    }

    pub fn layout(&self) -> &ConfigLayout {
        &self.layout
    }
}

impl EnvironmentRepository for FsEnvironmentRepository {
    fn load_layer(&self, env: &EnvName) -> ConfigResult<Layer> {
        let path = self.layout.layer_path(env);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::LayerNotFound {
                    env: env.to_string(),
                    path,
                });
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        let value = parse_layer(&path, &content)?;
        tracing::debug!(env = %env, path = %path.display(), "loaded layer");

        Ok(Layer::new(LayerSource::from_env(env), path, value))
    }

    fn load_schema(&self) -> ConfigResult<Option<SchemaDocument>> {
        let path = self.layout.schema_path();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no schema file");
                return Ok(None);
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        let schema = SchemaDocument::parse(&raw).map_err(|e| ConfigError::SchemaParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            declared_draft = schema.declared_draft().unwrap_or("none"),
            "loaded schema"
        );

        Ok(Some(schema))
    }

    fn schema_path(&self) -> PathBuf {
        self.layout.schema_path()
    }

    fn list_environments(&self) -> ConfigResult<Vec<EnvName>> {
        let envs_dir = self.layout.envs_dir();

        let entries = match fs::read_dir(&envs_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::EnvsRootMissing { path: envs_dir });
            }
            Err(e) => return Err(ConfigError::io(envs_dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::io(&envs_dir, e))?;
            if !entry.path().is_dir() {
                continue;
            }
            let raw = entry.file_name().to_string_lossy().into_owned();
            match EnvName::parse(&raw) {
                Ok(name) => names.push(name),
                Err(_) => {
                    tracing::warn!(dir = %entry.path().display(), "skipping directory with invalid environment name");
                }
            }
        }

        names.sort_by(|a, b| match (a.is_default(), b.is_default()) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.cmp(b),
        });

        Ok(names)
    }

    fn create_environment(&self, env: &EnvName) -> ConfigResult<PathBuf> {
        let envs_dir = self.layout.envs_dir();
        if !envs_dir.is_dir() {
            return Err(ConfigError::EnvsRootMissing { path: envs_dir });
        }

        let env_dir = self.layout.env_dir(env);
        if env_dir.exists() {
            return Err(ConfigError::AlreadyExists {
                env: env.to_string(),
                path: env_dir,
            });
        }

        // create_dir (not create_dir_all) so a concurrent creator is detected
        match fs::create_dir(&env_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ConfigError::AlreadyExists {
                    env: env.to_string(),
                    path: env_dir,
                });
            }
            Err(e) => return Err(ConfigError::io(env_dir, e)),
        }

        let layer_path = env_dir.join(LAYER_FILE);
        fs::write(&layer_path, placeholder_layer(env))
            .map_err(|e| ConfigError::io(&layer_path, e))?;
        tracing::info!(env = %env, path = %layer_path.display(), "created environment");

        Ok(layer_path)
    }
}

fn parse_layer(path: &Path, content: &str) -> ConfigResult<ConfigValue> {
    let value = ConfigValue::parse_yaml(content).map_err(|e| ConfigError::YamlParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match value {
        ConfigValue::Null | ConfigValue::Map(_) => Ok(value),
        other => Err(ConfigError::YamlParse {
            path: path.to_path_buf(),
            message: format!(
                "top-level document must be a mapping, found a {}",
                other.type_name()
            ),
        }),
    }
}
