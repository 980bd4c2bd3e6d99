//! ConfigValue value object - the untyped configuration tree
//!
//! Every layer, merged config, and component section is a `ConfigValue`.
//! Mappings keep insertion order for rendering, but compare as unordered maps.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_yaml_ng::Value as YamlValue;

/// Errors raised while turning parsed YAML into a [`ConfigValue`].
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("{0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("mapping keys must be scalars, found a {kind} key")]
    NonScalarKey { kind: &'static str },
}

/// A recursive configuration value.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(ConfigMap),
}

impl ConfigValue {
    /// An empty mapping, the value of an empty layer file.
    pub fn empty_map() -> Self {
        ConfigValue::Map(ConfigMap::new())
    }

    /// Parse a YAML document. Empty and comment-only documents yield `Null`.
    ///
    /// `<<` merge keys are resolved before conversion, so anchored sections
    /// arrive as plain mappings.
    pub fn parse_yaml(content: &str) -> Result<Self, ValueError> {
        let mut raw: YamlValue = serde_yaml_ng::from_str(content)?;
        raw.apply_merge()?;
        Self::try_from(raw)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short type label used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Map(_) => "mapping",
        }
    }

    /// Convert to a `serde_json::Value` for schema validation.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            ConfigValue::Null => Json::Null,
            ConfigValue::Bool(b) => Json::Bool(*b),
            ConfigValue::Integer(i) => Json::from(*i),
            ConfigValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            ConfigValue::String(s) => Json::String(s.clone()),
            ConfigValue::List(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            ConfigValue::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// Render as canonical block YAML.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConfigValue::Null, ConfigValue::Null) => true,
            (ConfigValue::Bool(a), ConfigValue::Bool(b)) => a == b,
            (ConfigValue::Integer(a), ConfigValue::Integer(b)) => a == b,
            // NaN equals NaN so that a config always equals itself.
            (ConfigValue::Float(a), ConfigValue::Float(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (ConfigValue::String(a), ConfigValue::String(b)) => a == b,
            (ConfigValue::List(a), ConfigValue::List(b)) => a == b,
            (ConfigValue::Map(a), ConfigValue::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl TryFrom<YamlValue> for ConfigValue {
    type Error = ValueError;

    fn try_from(value: YamlValue) -> Result<Self, Self::Error> {
        Ok(match value {
            YamlValue::Null => ConfigValue::Null,
            YamlValue::Bool(b) => ConfigValue::Bool(b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else {
                    // u64 above i64::MAX and real floats
                    ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            YamlValue::String(s) => ConfigValue::String(s),
            YamlValue::Sequence(items) => ConfigValue::List(
                items
                    .into_iter()
                    .map(ConfigValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            YamlValue::Mapping(mapping) => {
                let mut map = ConfigMap::with_capacity(mapping.len());
                for (key, value) in mapping {
                    map.insert(yaml_key(key)?, ConfigValue::try_from(value)?);
                }
                ConfigValue::Map(map)
            }
            YamlValue::Tagged(tagged) => ConfigValue::try_from(tagged.value)?,
        })
    }
}

fn yaml_key(key: YamlValue) -> Result<String, ValueError> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => yaml_key(tagged.value),
        YamlValue::Sequence(_) => Err(ValueError::NonScalarKey { kind: "sequence" }),
        YamlValue::Mapping(_) => Err(ValueError::NonScalarKey { kind: "mapping" }),
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => ConfigValue::Null,
            Json::Bool(b) => ConfigValue::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => ConfigValue::String(s),
            Json::Array(items) => ConfigValue::List(items.into_iter().map(Into::into).collect()),
            Json::Object(obj) => {
                ConfigValue::Map(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Null => serializer.serialize_unit(),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Integer(i) => serializer.serialize_i64(*i),
            ConfigValue::Float(f) => serializer.serialize_f64(*f),
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ConfigValue::Map(map) => map.serialize(serializer),
        }
    }
}

/// Flow-style JSON rendering, used for one-line display in diffs and errors.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// An insertion-ordered string-keyed mapping.
///
/// Equality ignores order: two maps are equal when they hold the same keys
/// with pairwise-equal values.
#[derive(Debug, Clone, Default)]
pub struct ConfigMap {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) -> Option<ConfigValue> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for ConfigMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, ConfigValue);
    type IntoIter = std::vec::IntoIter<(String, ConfigValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ConfigMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            out.serialize_entry(k, v)?;
        }
        out.end()
    }
}
