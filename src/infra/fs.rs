//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as listing the catalog files of a directory and resolving
//! catalog paths declared in the suite configuration.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如列出目录中的目录文件以及解析套件配置中声明的目录路径。

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The file extension recognized as a unit catalog.
pub const CATALOG_EXTENSION: &str = "toml";

/// Lists the catalog files directly inside a directory, sorted by path so the
/// indexing pass is deterministic. Subdirectories are not descended into.
///
/// # Arguments
/// * `dir` - The directory to scan
///
/// # Returns
/// The sorted list of `*.toml` files, or the I/O error that prevented the scan.
/// Entries that cannot be read are logged and skipped.
pub fn catalog_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(CATALOG_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Expands `~` and environment variables in a configured path and anchors relative
/// paths at `base_dir` (normally the directory holding `Suites.toml`).
///
/// 展开配置路径中的 `~` 和环境变量，并将相对路径锚定到 `base_dir`
/// （通常是 `Suites.toml` 所在的目录）。
pub fn resolve_config_path(raw: &str, base_dir: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand path: {raw}"))?
        .to_string();

    let path = PathBuf::from(expanded);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(base_dir.join(path))
    }
}

/// Returns the directory containing `config_path`, falling back to the current
/// directory for bare file names.
pub fn config_base_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
