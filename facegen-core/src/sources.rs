//! Source font copy
//!
//! Copies raw outline fonts into the distribution fonts directory so the
//! external WOFF2 converter finds them next to its output.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source fonts directory not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to copy {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopySummary {
    pub dest_dir: PathBuf,
    /// Paths relative to the source directory, sorted.
    pub copied: Vec<PathBuf>,
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Copy every file under `source_dir` whose extension is in `extensions`
/// to the same relative path under `dest_dir`.
pub fn copy_sources(
    source_dir: &Path,
    dest_dir: &Path,
    extensions: &[String],
) -> Result<CopySummary, SourceError> {
    info!(
        source = %source_dir.display(),
        dest = %dest_dir.display(),
        "copying source fonts"
    );

    if !source_dir.is_dir() {
        return Err(SourceError::SourceMissing(source_dir.to_path_buf()));
    }

    let mut summary = CopySummary {
        dest_dir: dest_dir.to_path_buf(),
        copied: vec![],
    };

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.map_err(|source| SourceError::Walk {
            path: source_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, extensions) {
            continue;
        }

        // WalkDir yields paths rooted at source_dir.
        let relative = path.strip_prefix(source_dir).unwrap_or(path);
        let dest_path = dest_dir.join(relative);
        let io_err = |source| SourceError::Io {
            path: dest_path.clone(),
            source,
        };

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::copy(path, &dest_path).map_err(io_err)?;

        debug!(file = %relative.display(), "copied");
        summary.copied.push(relative.to_path_buf());
    }

    info!(count = summary.copied.len(), "source fonts copied");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["ttf".to_string(), "otf".to_string()]
    }

    #[test]
    fn test_copies_matching_extensions_only() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("roboto")).unwrap();
        fs::write(src.path().join("roboto/Roboto-Bold.ttf"), b"ttf").unwrap();
        fs::write(src.path().join("Inter.OTF"), b"otf").unwrap();
        fs::write(src.path().join("README.md"), b"docs").unwrap();

        let summary = copy_sources(src.path(), dest.path(), &exts()).unwrap();

        assert_eq!(
            summary.copied,
            [PathBuf::from("Inter.OTF"), PathBuf::from("roboto/Roboto-Bold.ttf")]
        );
        assert_eq!(fs::read(dest.path().join("roboto/Roboto-Bold.ttf")).unwrap(), b"ttf");
        assert!(!dest.path().join("README.md").exists());
    }

    #[test]
    fn test_missing_source_dir() {
        let dest = tempfile::tempdir().unwrap();
        let missing = dest.path().join("nope");
        let err = copy_sources(&missing, dest.path(), &exts()).unwrap_err();
        assert!(matches!(err, SourceError::SourceMissing(_)));
    }
}
