//! Interrupted-run detection.
//!
//! OCR writes its output under an interim name (path date + sequence, no
//! sentinel letter) and the rename to the final name happens afterwards.
//! A crash in between leaves interim files in the process tree. They are
//! reported at the start of the next run and left untouched for review.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

static INTERIM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}-.+\.pdf$").unwrap());

/// Whether `file_name` is an OCR output that was never renamed.
pub fn is_interim_name(file_name: &str) -> bool {
    INTERIM_NAME.is_match(file_name)
}

/// List interim files below `process_dir`, logging each one.
pub fn find_interrupted(process_dir: &Path) -> Vec<PathBuf> {
    if !process_dir.exists() {
        return Vec::new();
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(process_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read process directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let is_interim = entry
            .file_name()
            .to_str()
            .map(is_interim_name)
            .unwrap_or(false);
        if is_interim {
            tracing::warn!(
                file = %entry.path().display(),
                "OCR output from an interrupted run was never renamed"
            );
            found.push(entry.into_path());
        }
    }
    found
}
