//! Writing rendered diagrams to disk.

use std::path::Path;

use tracing::info;

use crate::error::IoError;

/// Writes rendered Mermaid text to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be written.
pub fn write_mermaid(path: &Path, text: &str) -> Result<(), IoError> {
    std::fs::write(path, text).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "mermaid diagram written");
    Ok(())
}
