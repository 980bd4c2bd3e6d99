//! Layer entity
//!
//! A layer is one parsed `config.yaml`: either the mandatory `default` layer
//! or a named environment's override layer. Layers are immutable once loaded.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigValue, EnvName, DEFAULT_ENV};

/// Where a layer came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSource {
    Default,
    Environment(EnvName),
}

impl LayerSource {
    pub fn from_env(name: &EnvName) -> Self {
        if name.is_default() {
            LayerSource::Default
        } else {
            LayerSource::Environment(name.clone())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LayerSource::Default => DEFAULT_ENV,
            LayerSource::Environment(name) => name.as_str(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, LayerSource::Default)
    }
}

impl std::fmt::Display for LayerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    source: LayerSource,
    path: PathBuf,
    value: ConfigValue,
}

impl Layer {
    /// Build a layer. A `Null` document (empty file) becomes an empty mapping.
    pub fn new(source: LayerSource, path: impl Into<PathBuf>, value: ConfigValue) -> Self {
        let value = if value.is_null() {
            ConfigValue::empty_map()
        } else {
            value
        };
        Self {
            source,
            path: path.into(),
            value,
        }
    }

    pub fn source(&self) -> &LayerSource {
        &self.source
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &ConfigValue {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.as_map().is_some_and(|m| m.is_empty())
    }
}
