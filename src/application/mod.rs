//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Merge, validate, extract and render one environment
//! - `ValidateUseCase` - Check one or every environment against the schema
//! - `DiffUseCase` - Compare two merged environments
//! - `AddEnvUseCase` - Create a new environment with an empty layer

pub mod add_env;
pub mod diff;
pub mod generate;
mod layers;
pub mod validate;


pub use add_env::{AddEnvResult, AddEnvUseCase};
pub use diff::{DiffOptions, DiffOutcome, DiffUseCase};
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use validate::{EnvFailure, EnvReport, SchemaStatus, ValidateOptions, ValidateResult, ValidateUseCase};
