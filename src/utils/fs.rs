//! Filesystem utilities.
//!
//! Reading input resources and writing the rendered document, with I/O
//! failures mapped onto [`ResumeError`].

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ResourceKind, ResumeError, Result};

/// Read an input resource fully into a string.
///
/// A missing file is reported as [`ResumeError::ResourceNotFound`]; any other
/// failure as [`ResumeError::ResourceUnreadable`].
pub fn read_resource(kind: ResourceKind, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ResumeError::ResourceNotFound {
            kind,
            path: path.to_path_buf(),
        },
        _ => ResumeError::ResourceUnreadable {
            kind,
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Replace `path` with `contents`.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so a failed write leaves any previous file as it
/// was.
pub fn write_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let to_error = |source: io::Error| ResumeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    file.persist(path).map_err(|err| to_error(err.error))?;
    Ok(())
}
