use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for state and raw artifacts (512 MB).
///
/// A full ingest of 10,000 packages is a few megabytes; anything near this
/// limit is not a file we wrote.
pub const MAX_ARTIFACT_SIZE: u64 = 512 * 1024 * 1024;

/// Rejects a path that is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to inspect
/// * `operation` - Operation name for the error message (e.g. "read", "write")
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Checks that `path` is a regular file no larger than [`MAX_ARTIFACT_SIZE`].
pub fn ensure_readable_artifact(path: &Path, description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_ARTIFACT_SIZE {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_ARTIFACT_SIZE
        );
    }

    Ok(())
}

/// Checks that `key` can be used as a file stem inside a store directory.
///
/// Rejects path separators, `..` and empty keys so a key can never address a
/// file outside the store.
pub fn ensure_plain_key(key: &str, kind: &str) -> Result<()> {
    if key.is_empty() {
        anyhow::bail!("{} must not be empty", kind);
    }
    if key.contains('/') || key.contains('\\') || key.contains("..") {
        anyhow::bail!(
            "Security: {} '{}' contains path components which are not allowed",
            kind,
            key
        );
    }
    Ok(())
}

/// Writes `content` to `path` via a sibling temp file and a rename, so a crash
/// mid-write never leaves a truncated file behind.
pub fn write_atomically(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    fs::write(tmp_path, content)?;
    fs::rename(tmp_path, path)
}
