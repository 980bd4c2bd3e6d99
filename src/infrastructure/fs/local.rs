//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::FileSystem;
use crate::error::{ConfigError, ConfigResult};

/// Local file system implementation
///
/// Every file of a group is first written to a temp file in its target
/// directory. Targets are only renamed into place once all of them staged,
/// and a rename failure restores the targets already replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// A staged write: the filled temp file plus what the target held before.
struct Staged<'a> {
    path: &'a Path,
    tmp: NamedTempFile,
    previous: Option<Vec<u8>>,
}

fn stage<'a>(path: &'a Path, content: &str) -> ConfigResult<Staged<'a>> {
    let previous = match fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(ConfigError::io(path, e)),
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| ConfigError::io(parent, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| ConfigError::io(path, e))?;

    Ok(Staged {
        path,
        tmp,
        previous,
    })
}

fn restore(path: &Path, previous: Option<&[u8]>) {
    let result = match previous {
        Some(bytes) => fs::write(path, bytes),
        None => fs::remove_file(path),
    };
    if let Err(e) = result {
        tracing::warn!(path = %path.display(), error = %e, "failed to roll back write");
    }
}

impl FileSystem for LocalFs {
    fn write_all_atomic(&self, files: &[(&Path, &str)]) -> ConfigResult<()> {
        // Temp files are removed on drop if a later file fails to stage.
        let staged = files
            .iter()
            .map(|&(path, content)| stage(path, content))
            .collect::<ConfigResult<Vec<_>>>()?;

        let mut committed: Vec<(&Path, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
        for Staged {
            path,
            tmp,
            previous,
        } in staged
        {
            if let Err(e) = tmp.persist(path) {
                for (done, before) in committed.iter().rev() {
                    restore(done, before.as_deref());
                }
                return Err(ConfigError::io(path, e.error));
            }
            tracing::debug!(path = %path.display(), "wrote file");
            committed.push((path, previous));
        }

        Ok(())
    }
}
