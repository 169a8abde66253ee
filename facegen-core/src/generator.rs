//! Font-Face Generator - Single Entry Point
//!
//! List the fonts directory, render everything in memory, then write once.
//! A failed listing never touches the output; a failed write leaves the
//! previous output in place.

use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::descriptor::{describe_listing, FontDescriptor};
use crate::hashing::fragment_hash;
use crate::stylesheet::{render_fragment, StylesheetFragment};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Fonts directory unreadable: {}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write stylesheet: {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub output_file: PathBuf,
    pub font_count: usize,
    pub skipped: usize,
    pub content_hash: String,
    pub fonts: Vec<FontDescriptor>,
}

/// Fragment computed from one directory listing, not yet persisted.
#[derive(Debug, Clone)]
pub struct PlannedStylesheet {
    pub descriptors: Vec<FontDescriptor>,
    pub fragment: StylesheetFragment,
    pub skipped: usize,
}

/// List entry names of a directory, sorted by name.
pub fn list_directory(dir: &Path) -> Result<Vec<OsString>, GenerationError> {
    let unreadable = |source| GenerationError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = vec![];
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

/// Pure planning step over an already-taken listing.
///
/// Names that are not valid UTF-8 cannot appear in a stylesheet; they are
/// counted as skipped like any other ineligible entry.
pub fn plan_from_listing<S: AsRef<OsStr>>(names: &[S]) -> PlannedStylesheet {
    let descriptors = describe_listing(names.iter().filter_map(|name| name.as_ref().to_str()));
    let fragment = render_fragment(&descriptors);
    PlannedStylesheet {
        skipped: names.len() - descriptors.len(),
        descriptors,
        fragment,
    }
}

/// List and plan without writing.
pub fn plan(fonts_dir: &Path) -> Result<PlannedStylesheet, GenerationError> {
    let names = list_directory(fonts_dir)?;
    Ok(plan_from_listing(names.as_slice()))
}

/// Generate the `@font-face` stylesheet for `fonts_dir` into `output_file`.
pub fn generate(fonts_dir: &Path, output_file: &Path) -> Result<GenerationReport, GenerationError> {
    let planned = plan(fonts_dir)?;
    write_atomic(output_file, planned.fragment.as_str())?;

    Ok(GenerationReport {
        output_file: output_file.to_path_buf(),
        font_count: planned.fragment.block_count(),
        skipped: planned.skipped,
        content_hash: fragment_hash(&planned.fragment),
        fonts: planned.descriptors,
    })
}

/// Write `content` to a temp file next to the real target and rename it
/// over that target. An existing target is resolved first so symlinks are
/// written through, and a read-only target is refused like a plain write.
fn write_atomic(target: &Path, content: &str) -> Result<(), GenerationError> {
    let write_failed = |source| GenerationError::WriteFailed {
        path: target.to_path_buf(),
        source,
    };

    let existing = fs::metadata(target).ok();
    let resolved = match &existing {
        Some(_) => fs::canonicalize(target).map_err(write_failed)?,
        None => target.to_path_buf(),
    };
    if let Some(meta) = &existing {
        if meta.permissions().readonly() {
            return Err(write_failed(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "output file is read-only",
            )));
        }
    }

    let parent = match resolved.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_failed)?;
    tmp.write_all(content.as_bytes()).map_err(write_failed)?;
    tmp.as_file().sync_all().map_err(write_failed)?;
    if let Some(meta) = existing {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_failed)?;
    }
    tmp.persist(&resolved).map_err(|e| write_failed(e.error))?;
    Ok(())
}
