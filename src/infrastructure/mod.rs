//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `layout` - The fixed `components/config/` directory layout
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - Filesystem-backed environment repository

pub mod fs;
pub mod layout;
pub mod repositories;

pub use fs::LocalFs;
pub use layout::ConfigLayout;
pub use repositories::FsEnvironmentRepository;
