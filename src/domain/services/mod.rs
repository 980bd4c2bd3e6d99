//! Domain Services
//!
//! Pure business logic over configuration values.
//! These services have no I/O dependencies and are easily testable.

mod differ;
mod extractor;
mod layer_merger;
mod validator;

pub use differ::{diff, DiffReport};
pub use extractor::extract;
pub use layer_merger::{merge, merge_layers, MergedConfig};
pub use validator::SchemaValidator;
