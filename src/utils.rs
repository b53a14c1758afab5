use std::{fs, path::Path};

use crate::error::{IOError, MarkupError, MarkupErrorKind, Result};

/// Writes `content` to `path` as UTF-8 text, creating or truncating the file
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MarkupError::new(MarkupErrorKind::IO(
            IOError::FileNotFound(path.display().to_string()),
        )),
        std::io::ErrorKind::PermissionDenied => MarkupError::new(MarkupErrorKind::IO(
            IOError::PermissionDenied(path.display().to_string()),
        )),
        _ => MarkupError::new(MarkupErrorKind::IO(IOError::WriteError(e.to_string()))),
    })
}
