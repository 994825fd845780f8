//! Atomic file write operations.
//!
//! Targets are rewritten through a hidden temporary file in the same
//! directory followed by a rename, so an interrupted run never leaves a
//! half-written manifest behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::TargetError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `path` under `root` atomically.
///
/// `path` must be relative and made of plain components; it may name a file
/// in a subdirectory of `root`.
///
/// # Errors
///
/// Returns [`TargetError::InvalidPath`] for paths that leave `root`, and
/// [`TargetError::Write`] if any write step fails.
pub(crate) fn write_atomic(root: &Dir, path: &Utf8Path, contents: &str) -> Result<(), TargetError> {
    let (parent, file_name) = split_target(path)?;
    let dir = open_parent(root, parent).map_err(|err| write_error(path, &err))?;

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    );

    write_to_temp_file(&dir, &tmp_name, path, contents)?;
    rename_temp_to_target(&dir, &tmp_name, file_name, path)?;
    sync_parent_directory(&dir);

    Ok(())
}

/// Splits a target path into its parent directory and file name.
pub(crate) fn split_target(path: &Utf8Path) -> Result<(&Utf8Path, &str), TargetError> {
    let is_plain = path
        .components()
        .all(|component| matches!(component, Utf8Component::Normal(_)));
    match (is_plain, path.file_name()) {
        (true, Some(file_name)) => Ok((
            path.parent().unwrap_or_else(|| Utf8Path::new("")),
            file_name,
        )),
        _ => Err(TargetError::InvalidPath {
            path: path.to_path_buf(),
        }),
    }
}

fn open_parent(root: &Dir, parent: &Utf8Path) -> io::Result<Dir> {
    if parent.as_str().is_empty() {
        root.try_clone()
    } else {
        root.open_dir(parent)
    }
}

fn write_error(path: &Utf8Path, err: &io::Error) -> TargetError {
    TargetError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target_path: &Utf8Path,
    contents: &str,
) -> Result<(), TargetError> {
    let tmp_path = target_path.with_file_name(tmp_name);
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| write_error(&tmp_path, &err))?;

    if let Err(err) = file.write_all(contents.as_bytes()) {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(write_error(&tmp_path, &err));
    }

    if let Err(err) = file.sync_all() {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(write_error(&tmp_path, &err));
    }

    Ok(())
}

fn rename_temp_to_target(
    dir: &Dir,
    tmp_name: &str,
    target_name: &str,
    target_path: &Utf8Path,
) -> Result<(), TargetError> {
    if let Err(err) = rename_temp_to_target_impl(dir, tmp_name, target_name) {
        // Best-effort cleanup of temp file on rename failure.
        drop(dir.remove_file(tmp_name));
        return Err(write_error(target_path, &err));
    }
    Ok(())
}

#[cfg(windows)]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_parent_directory(parent: &Dir) {
    // Best-effort; some platforms refuse to sync directories.
    if parent.open(".").and_then(|dir| dir.sync_all()).is_err() {
        // Ignore sync failures.
    }
}
