//! Differ Domain Service
//!
//! Computes structural differences between two merged configs by walking
//! the key union at every nesting level.
//!
//! Lists are compared as opaque values: an unequal list is one `changed`
//! entry at the list's path, matching the merger's replace-wholesale policy.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::domain::entities::{DiffEntry, DiffKind};
use crate::domain::value_objects::{ConfigMap, ConfigValue};

/// Result of comparing two configs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffReport {
    pub entries: Vec<DiffEntry>,
}

impl DiffReport {
    /// True when the two configs are structurally equal
    pub fn is_identical(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: DiffKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Get a summary (e.g., "+1, -2, ~3")
    pub fn summary(&self) -> String {
        format!(
            "+{}, -{}, ~{}",
            self.count(DiffKind::Added),
            self.count(DiffKind::Removed),
            self.count(DiffKind::Changed)
        )
    }
}

impl Serialize for DiffReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DiffReport", 2)?;
        state.serialize_field("identical", &self.is_identical())?;
        state.serialize_field("differences", &self.entries)?;
        state.end()
    }
}

/// Diff `left` against `right`.
///
/// Keys only in `left` are `removed`, keys only in `right` are `added`.
/// Entries follow `left`'s key order, then `right`-only keys in `right`'s order.
pub fn diff(left: &ConfigValue, right: &ConfigValue) -> DiffReport {
    let mut entries = Vec::new();

    match (left, right) {
        (ConfigValue::Map(l), ConfigValue::Map(r)) => diff_maps(None, l, r, &mut entries),
        (l, r) if l != r => entries.push(DiffEntry::changed("", l.clone(), r.clone())),
        _ => {}
    }

    DiffReport { entries }
}

fn diff_maps(
    prefix: Option<&str>,
    left: &ConfigMap,
    right: &ConfigMap,
    out: &mut Vec<DiffEntry>,
) {
    for (key, left_value) in left.iter() {
        let path = join_path(prefix, key);
        match right.get(key) {
            None => out.push(DiffEntry::removed(path, left_value.clone())),
            Some(right_value) => match (left_value, right_value) {
                (ConfigValue::Map(l), ConfigValue::Map(r)) => diff_maps(Some(&path), l, r, out),
                (l, r) if l != r => out.push(DiffEntry::changed(path, l.clone(), r.clone())),
                _ => {}
            },
        }
    }

    for (key, right_value) in right.iter() {
        if !left.contains_key(key) {
            out.push(DiffEntry::added(join_path(prefix, key), right_value.clone()));
        }
    }
}

/// Dotted path below `prefix`; `None` is the document root. An empty key
/// keeps its empty segment, so `{"": {"x": 1}}` yields `.x`, not `x`.
fn join_path(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        None => key.to_string(),
        Some(prefix) => format!("{}.{}", prefix, key),
    }
}
