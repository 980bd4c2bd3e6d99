//! Shared generators for config trees

use layered_config::{ConfigMap, ConfigValue};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

fn scalar() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        any::<bool>().prop_map(ConfigValue::Bool),
        (-1000i64..1000).prop_map(ConfigValue::Integer),
        "[a-z]{0,6}".prop_map(ConfigValue::String),
    ]
}

fn map_of(
    inner: impl Strategy<Value = ConfigValue>,
) -> impl Strategy<Value = ConfigValue> {
    proptest::collection::vec((key(), inner), 0..5)
        .prop_map(|pairs| ConfigValue::Map(pairs.into_iter().collect::<ConfigMap>()))
}

/// Any value without nulls
pub fn value() -> impl Strategy<Value = ConfigValue> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(ConfigValue::List),
            map_of(inner),
        ]
    })
}

/// A mapping without nulls
pub fn tree() -> impl Strategy<Value = ConfigValue> {
    map_of(value())
}

/// A mapping that may contain null tombstones at any depth
pub fn override_tree() -> impl Strategy<Value = ConfigValue> {
    let leaf = prop_oneof![
        4 => scalar(),
        1 => Just(ConfigValue::Null),
    ];
    let nested = leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(ConfigValue::List),
            map_of(inner),
        ]
    });
    map_of(nested)
}

/// Top-level keys whose override value is null
pub fn tombstoned_keys(value: &ConfigValue) -> Vec<String> {
    value
        .as_map()
        .map(|m| {
            m.iter()
                .filter(|(_, v)| v.is_null())
                .map(|(k, _)| k.to_string())
                .collect()
        })
        .unwrap_or_default()
}
