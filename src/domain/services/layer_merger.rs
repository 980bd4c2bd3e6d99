//! Layer merger
//!
//! Deep-merges an override layer onto a base layer:
//! - `null` in the override deletes the key (tombstone), even whole subtrees
//! - Two mappings at the same key merge recursively
//! - Everything else (scalars, lists, type changes) replaces wholesale;
//!   lists are never concatenated or merged by index
//! - Base-only keys pass through, override-only keys are added
//!
//! Merging is pure: neither input is mutated, so the `default` layer can be
//! merged several times in one invocation.

use crate::domain::entities::Layer;
use crate::domain::value_objects::{ConfigMap, ConfigValue};

/// A configuration produced from `default` followed by one environment layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    env: String,
    value: ConfigValue,
}

impl MergedConfig {
    /// Name of the environment this config was merged for
    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn value(&self) -> &ConfigValue {
        &self.value
    }

    pub fn into_value(self) -> ConfigValue {
        self.value
    }
}

/// Merge `override_value` onto `base`, returning a new value.
pub fn merge(base: &ConfigValue, override_value: &ConfigValue) -> ConfigValue {
    match (base, override_value) {
        (ConfigValue::Map(base_map), ConfigValue::Map(override_map)) => {
            ConfigValue::Map(merge_maps(base_map, override_map))
        }
        (_, replacement) => replacement.clone(),
    }
}

fn merge_maps(base: &ConfigMap, overrides: &ConfigMap) -> ConfigMap {
    let mut result = base.clone();

    for (key, override_value) in overrides.iter() {
        if override_value.is_null() {
            result.remove(key);
            continue;
        }

        let merged = match (result.get(key), override_value) {
            (Some(ConfigValue::Map(current)), ConfigValue::Map(nested)) => {
                ConfigValue::Map(merge_maps(current, nested))
            }
            _ => override_value.clone(),
        };
        result.insert(key, merged);
    }

    result
}

/// Merge an environment layer onto the default layer.
///
/// When `env` is `None` (or the environment is `default` itself) the result is
/// the default layer on its own.
pub fn merge_layers(default: &Layer, env: Option<&Layer>) -> MergedConfig {
    match env {
        Some(layer) if !layer.source().is_default() => MergedConfig {
            env: layer.source().name().to_string(),
            value: merge(default.value(), layer.value()),
        },
        _ => MergedConfig {
            env: default.source().name().to_string(),
            value: default.value().clone(),
        },
    }
}
