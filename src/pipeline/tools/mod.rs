//! External collaborators: OCR, first-page text extraction and archive sync.
//!
//! Each tool sits behind a trait so the driver can be exercised with the
//! mock implementations instead of the real binaries.

pub mod ocr;
pub mod text;
pub mod sync;

pub use ocr::*;
pub use text::*;
pub use sync::*;

use std::path::Path;
use std::process::{Command, Output};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },
}

/// Adds a searchable PDF text layer.
pub trait OcrEngine: Send + Sync {
    /// OCR `input` into a new PDF at `output`.
    fn ocr(&self, input: &Path, output: &Path, jobs: u32, languages: &str)
        -> Result<(), ToolError>;
}

/// Reads the text layer of a PDF.
pub trait TextExtractor: Send + Sync {
    /// Text of the first page only.
    fn first_page_text(&self, pdf: &Path) -> Result<String, ToolError>;
}

/// Captured output of a sync run, logged verbatim by the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub stdout: String,
    pub stderr: String,
}

/// Mirrors the process tree into the archive, removing synced sources.
pub trait ArchiveSync: Send + Sync {
    /// With `preview` set, only report what would be transferred.
    fn sync(&self, source: &str, target: &str, preview: bool) -> Result<SyncReport, ToolError>;
}

/// Run `command` to completion; a non-zero exit is an error.
pub(crate) fn run_tool(mut command: Command) -> Result<Output, ToolError> {
    let tool = command.get_program().to_string_lossy().into_owned();
    tracing::debug!(command = ?command, "Running external tool");

    let output = command
        .output()
        .map_err(|source| ToolError::Spawn {
            tool: tool.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            tool,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}
