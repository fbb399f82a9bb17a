//! Output directory management.
//!
//! The output root is only ever created; the weather subfolder beneath it is
//! wiped at the start of every run so it only holds the current bundle.

use crate::errors::{AppError, AppResult};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// A pre-existing entry that could not be removed during a directory reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupWarning {
    pub path: PathBuf,
    pub error: String,
}

impl CleanupWarning {
    /// Warning for an entry listing that broke off part way through `dir`.
    fn listing(dir: &Path, err: &std::io::Error) -> Self {
        Self {
            path: dir.to_path_buf(),
            error: format!("listing stopped early: {err}"),
        }
    }
}

impl fmt::Display for CleanupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Creates `dir` and any missing parents. Existing contents are left alone.
pub async fn ensure_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create directory {}: {}",
            dir.display(),
            e
        ))
    })
}

/// Makes sure `dir` exists and holds nothing from a previous run.
///
/// # Behavior
///
/// - **Missing directory**: created together with any missing parents.
/// - **Existing directory**: every immediate entry is removed. Subdirectories
///   are removed recursively; files and symlinks are unlinked.
///
/// # Error Handling
///
/// Failing to create or open `dir` is an error. Failing to remove an individual
/// entry is not: it is logged, collected into the returned list and the reset
/// continues with the remaining entries. A read error while walking the listing
/// is recorded the same way and ends the walk.
pub async fn prepare_clean_dir(dir: &Path) -> AppResult<Vec<CleanupWarning>> {
    if !dir.exists() {
        ensure_dir(dir).await?;
        debug!(dir = %dir.display(), "Created output directory");
        return Ok(Vec::new());
    }

    let mut entries = fs::read_dir(dir).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to list directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut removed = 0;
    let mut warnings = Vec::new();

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Failed to read directory entry");
                warnings.push(CleanupWarning::listing(dir, &e));
                break;
            }
        };
        let path = entry.path();
        let result = match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => fs::remove_dir_all(&path).await,
            Ok(_) => fs::remove_file(&path).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => removed += 1,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to remove old entry"
                );
                warnings.push(CleanupWarning {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        dir = %dir.display(),
        removed = removed,
        failed = warnings.len(),
        "Output directory reset"
    );

    Ok(warnings)
}
