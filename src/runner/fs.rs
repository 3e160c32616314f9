//! File-tree operations behind the file built-ins
//!
//! `copy` and `mv` are not atomic: a failure halfway leaves whatever was
//! already written in place, and `mv` only removes the source after the copy
//! has fully succeeded.

use crate::error::{FsError, FsResult};
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically clean a path: drop `.`, fold `..` and trailing separators
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Copy a file or directory tree.
///
/// Directories are copied entry by entry with their permission bits;
/// symbolic links inside them are skipped. A file copied onto an existing
/// directory lands inside it under its own name.
pub fn copy(src: &Path, dst: &Path) -> FsResult<()> {
    let src = normalize(src);
    let dst = normalize(dst);

    let meta = fs::metadata(&src).map_err(FsError::io("stat", &src))?;

    if meta.is_dir() {
        if dst.is_file() {
            return Err(FsError::InvalidTarget {
                src,
                dst,
                reason: "cannot copy a directory onto a file",
            });
        }
        if dst.starts_with(&src) {
            return Err(FsError::InvalidTarget {
                src,
                dst,
                reason: "cannot copy a directory into itself",
            });
        }
        copy_dir(&src, &dst)
    } else {
        let target = if dst.is_dir() {
            let name = src.file_name().ok_or_else(|| FsError::InvalidTarget {
                src: src.clone(),
                dst: dst.clone(),
                reason: "source has no file name",
            })?;
            dst.join(name)
        } else {
            dst
        };
        if same_file(&src, &target) {
            return Err(FsError::InvalidTarget {
                src,
                dst: target,
                reason: "source and destination are the same file",
            });
        }
        copy_file(&src, &target)
    }
}

/// Whether two paths name the same existing file, through links or not
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_dir(src: &Path, dst: &Path) -> FsResult<()> {
    let meta = fs::metadata(src).map_err(FsError::io("stat", src))?;
    fs::create_dir_all(dst).map_err(FsError::io("create directory", dst))?;

    let entries = fs::read_dir(src).map_err(FsError::io("read directory", src))?;
    for entry in entries {
        let entry = entry.map_err(FsError::io("read directory", src))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(FsError::io("stat", &src_path))?;

        if file_type.is_symlink() {
            continue;
        } else if file_type.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }

    // Applied last so a read-only source still has its entries copied
    fs::set_permissions(dst, meta.permissions()).map_err(FsError::io("set permissions", dst))
}

/// Stream `src` into `dst`, sync it to disk, then copy the permission bits
pub fn copy_file(src: &Path, dst: &Path) -> FsResult<()> {
    let mut input = File::open(src).map_err(FsError::io("open", src))?;
    let mut output = File::create(dst).map_err(FsError::io("create", dst))?;

    io::copy(&mut input, &mut output).map_err(FsError::io("write", dst))?;
    output.sync_all().map_err(FsError::io("sync", dst))?;

    let perms = input
        .metadata()
        .map_err(FsError::io("stat", src))?
        .permissions();
    fs::set_permissions(dst, perms).map_err(FsError::io("set permissions", dst))
}

/// Copy then remove the source
pub fn mv(src: &Path, dst: &Path) -> FsResult<()> {
    copy(src, dst)?;
    rm(src)
}

/// Remove a file, symlink or directory tree; a missing path is fine
pub fn rm(path: &Path) -> FsResult<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsError::io("stat", path)(e)),
    };

    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(FsError::io("remove", path)(e)),
        _ => Ok(()),
    }
}

/// Create a directory and its parents; an existing directory is fine
pub fn mkdir(path: &Path) -> FsResult<()> {
    fs::create_dir_all(path).map_err(FsError::io("create directory", path))
}

/// Create an empty file, truncating any existing one
pub fn touch(path: &Path) -> FsResult<()> {
    File::create(path)
        .map(drop)
        .map_err(FsError::io("create", path))
}
