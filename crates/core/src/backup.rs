//! JSON backup of an aggregation view.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::CoreError;

/// Serialize `contents` as 4-space-indented JSON and write it to `path`,
/// creating missing parent directories. An existing file is overwritten.
pub async fn write_backup<T: Serialize>(path: &Path, contents: &T) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            CoreError::Internal(format!(
                "Failed to create backup directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let bytes = to_pretty_json(contents)?;

    tokio::fs::write(path, bytes).await.map_err(|e| {
        CoreError::Internal(format!("Failed to write backup file {}: {e}", path.display()))
    })?;

    tracing::info!(path = %path.display(), "Backup written");
    Ok(())
}

fn to_pretty_json<T: Serialize>(contents: &T) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    contents
        .serialize(&mut ser)
        .map_err(|e| CoreError::Internal(format!("Failed to serialize backup: {e}")))?;
    Ok(buf)
}
