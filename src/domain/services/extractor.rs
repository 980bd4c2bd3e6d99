//! Component extractor
//!
//! Narrows a merged config to the section stored under one top-level key.
//! The section is returned unwrapped: the key itself is not part of the result.

use crate::domain::value_objects::ConfigValue;
use crate::error::{ConfigError, ConfigResult};

pub fn extract(merged: &ConfigValue, component: &str) -> ConfigResult<ConfigValue> {
    let map = merged.as_map();

    match map.and_then(|m| m.get(component)) {
        Some(section) => Ok(section.clone()),
        None => Err(ConfigError::ComponentNotFound {
            component: component.to_string(),
            available: map
                .map(|m| m.keys().map(str::to_string).collect())
                .unwrap_or_default(),
        }),
    }
}
