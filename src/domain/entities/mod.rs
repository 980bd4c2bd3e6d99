//! Domain Entities
//!
//! - `Layer` - One loaded `config.yaml` tagged with its source
//! - `DiffEntry` - One difference between two merged configs
//! - `ValidationIssue` - One schema violation

mod diff_entry;
mod layer;
mod validation;

pub use diff_entry::{DiffEntry, DiffKind};
pub use layer::{Layer, LayerSource};
pub use validation::ValidationIssue;
