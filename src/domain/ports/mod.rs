//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod environment_repository;
pub mod file_system;

pub use environment_repository::EnvironmentRepository;
pub use file_system::FileSystem;
