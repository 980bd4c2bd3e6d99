//! Shared loading steps used by several use cases

use crate::domain::entities::Layer;
use crate::domain::ports::EnvironmentRepository;
use crate::domain::services::{merge_layers, MergedConfig, SchemaValidator};
use crate::domain::value_objects::{EnvName, SchemaDocument};
use crate::error::{ConfigError, ConfigResult};

/// A schema that parsed and compiled
pub(crate) struct LoadedSchema {
    pub document: SchemaDocument,
    pub validator: SchemaValidator,
}

pub(crate) fn load_default<R: EnvironmentRepository>(repo: &R) -> ConfigResult<Layer> {
    repo.load_layer(&EnvName::default_env())
}

/// Merge `env` onto an already-loaded default layer.
///
/// `default` itself is never loaded twice or merged onto itself.
pub(crate) fn merge_env<R: EnvironmentRepository>(
    repo: &R,
    default: &Layer,
    env: &EnvName,
) -> ConfigResult<MergedConfig> {
    if env.is_default() {
        return Ok(merge_layers(default, None));
    }
    let layer = repo.load_layer(env)?;
    Ok(merge_layers(default, Some(&layer)))
}

/// Load and compile the schema. A schema the validator rejects is reported
/// the same way as malformed JSON.
pub(crate) fn load_schema<R: EnvironmentRepository>(repo: &R) -> ConfigResult<Option<LoadedSchema>> {
    let Some(document) = repo.load_schema()? else {
        return Ok(None);
    };
    let validator =
        SchemaValidator::compile(&document).map_err(|message| ConfigError::SchemaParse {
            path: repo.schema_path(),
            message,
        })?;
    Ok(Some(LoadedSchema {
        document,
        validator,
    }))
}
