//! Atomic filesystem operations for linescope.
//!
//! Files are never rewritten in place byte by byte. All writes follow this
//! pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Copy the original file's permissions onto it
//! 3. Sync the file to disk (fsync)
//! 4. Atomically rename it over the original
//!
//! If any step fails the temporary file is removed and the original is left
//! untouched. Source and destination must be on the same filesystem for the
//! rename to be atomic, which holds because the temporary file is a sibling
//! named `.{filename}.tmp`.

use crate::error::{LinescopeError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The parent directory is created if needed. An existing file keeps its
/// permissions.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            LinescopeError::RewriteError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let permissions = fs::metadata(path).ok().map(|m| m.permissions());
    replace_with(path, permissions, |w| w.write_all(content).map_err(LinescopeError::from))
}

/// Rewrite a file through `transform`, replacing it atomically.
///
/// `transform` reads the current contents and writes the new contents. If it
/// fails, the original file is left as it was and the error is returned with
/// the path attached.
pub fn rewrite_file<P, F>(path: P, transform: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn BufRead, &mut dyn Write) -> Result<()>,
{
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        LinescopeError::RewriteError(format!("failed to open '{}': {}", path.display(), e))
    })?;
    let permissions = file
        .metadata()
        .map_err(|e| {
            LinescopeError::RewriteError(format!("failed to stat '{}': {}", path.display(), e))
        })?
        .permissions();
    let mut reader = BufReader::new(file);

    replace_with(path, Some(permissions), |w| transform(&mut reader, w)).map_err(|e| match e {
        LinescopeError::RewriteError(msg) => LinescopeError::RewriteError(msg),
        other => LinescopeError::RewriteError(format!("{}: {}", path.display(), other)),
    })
}

/// Write the new contents to a temporary sibling, then rename it over `target`.
fn replace_with<F>(target: &Path, permissions: Option<fs::Permissions>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let temp_path = generate_temp_path(target)?;

    let result = write_and_sync(&temp_path, permissions, write)
        .and_then(|()| atomic_replace(&temp_path, target));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            LinescopeError::RewriteError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync<F>(path: &Path, permissions: Option<fs::Permissions>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let file = File::create(path).map_err(|e| {
        LinescopeError::RewriteError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;

    let file = writer.into_inner().map_err(|e| {
        LinescopeError::RewriteError(format!("failed to write temporary file: {}", e.error()))
    })?;

    if let Some(permissions) = permissions {
        file.set_permissions(permissions).map_err(|e| {
            LinescopeError::RewriteError(format!("failed to copy permissions: {}", e))
        })?;
    }

    file.sync_all().map_err(|e| {
        LinescopeError::RewriteError(format!("failed to sync temporary file to disk: {}", e))
    })
}

/// Rename `source` over `target`, which replaces an existing file atomically.
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        LinescopeError::RewriteError(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
