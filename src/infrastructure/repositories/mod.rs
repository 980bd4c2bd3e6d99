//! Repository implementations

mod environment;

pub use environment::FsEnvironmentRepository;
