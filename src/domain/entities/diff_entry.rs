//! DiffEntry entity - one structural difference between two merged configs

use serde::Serialize;

use crate::domain::value_objects::ConfigValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Key only exists on the right-hand side
    Added,
    /// Key only exists on the left-hand side
    Removed,
    /// Key exists on both sides with unequal values
    Changed,
}

impl DiffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Changed => "changed",
        }
    }
}

/// A single difference at a dot-joined key path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub path: String,
    pub kind: DiffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<ConfigValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<ConfigValue>,
}

impl DiffEntry {
    pub fn added(path: impl Into<String>, after: ConfigValue) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Added,
            before: None,
            after: Some(after),
        }
    }

    pub fn removed(path: impl Into<String>, before: ConfigValue) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Removed,
            before: Some(before),
            after: None,
        }
    }

    pub fn changed(path: impl Into<String>, before: ConfigValue, after: ConfigValue) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Changed,
            before: Some(before),
            after: Some(after),
        }
    }
}
