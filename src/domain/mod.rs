//! Domain Layer
//!
//! The core of layered-config: pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Layer, DiffEntry, ValidationIssue
//! - `value_objects/` - ConfigValue, EnvName, SchemaDocument
//! - `services/` - Merger, Extractor, Validator, Differ
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Pure Functions** - Inputs are borrowed and never mutated
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
