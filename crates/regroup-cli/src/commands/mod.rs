//! Command implementations.

pub mod coverage;
pub mod split;

pub use self::coverage::execute_coverage;
pub use self::split::execute_split;

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Every file under `dir`, recursively, sorted by path.
///
/// With `extension`, only files carrying that extension are returned.
pub fn collect_files(dir: &Path, extension: Option<&str>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::NotFound(dir.to_path_buf()));
    }

    let files = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| extension.map_or(true, |ext| path.extension().is_some_and(|e| e == ext)))
        .collect();
    Ok(files)
}
