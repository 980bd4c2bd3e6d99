//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{AddEnvUseCase, DiffUseCase, GenerateUseCase, ValidateUseCase};
use crate::infrastructure::{FsEnvironmentRepository, LocalFs};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<FsEnvironmentRepository, LocalFs>;

pub type ConcreteValidateUseCase = ValidateUseCase<FsEnvironmentRepository>;

pub type ConcreteDiffUseCase = DiffUseCase<FsEnvironmentRepository>;

pub type ConcreteAddEnvUseCase = AddEnvUseCase<FsEnvironmentRepository>;

/// Create a generate use case rooted at `root`
pub fn create_generate_use_case(root: &Path) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(FsEnvironmentRepository::new(root), LocalFs::new())
}

pub fn create_validate_use_case(root: &Path) -> ConcreteValidateUseCase {
    ValidateUseCase::new(FsEnvironmentRepository::new(root))
}

pub fn create_diff_use_case(root: &Path) -> ConcreteDiffUseCase {
    DiffUseCase::new(FsEnvironmentRepository::new(root))
}

pub fn create_add_env_use_case(root: &Path) -> ConcreteAddEnvUseCase {
    AddEnvUseCase::new(FsEnvironmentRepository::new(root))
}
