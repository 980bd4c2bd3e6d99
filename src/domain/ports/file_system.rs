//! FileSystem port - abstraction over output writes
//!
//! Generated configs and schema copies are written through this trait so the
//! generate use case can be exercised without touching disk.

use std::path::Path;

use crate::error::ConfigResult;

/// Abstract writable file system
///
/// Implementations:
/// - `LocalFs` - staged writes on local disk
pub trait FileSystem {
    /// Write a group of files, all or none, creating parent directories.
    ///
    /// On error no file of the group is left changed: targets that did not
    /// exist are absent and existing targets keep their previous contents.
    fn write_all_atomic(&self, files: &[(&Path, &str)]) -> ConfigResult<()>;
}
