use std::path::PathBuf;
use std::process::Command;
use std::sync::Mutex;

use super::{run_tool, ArchiveSync, SyncReport, ToolError};

/// `rsync` wrapper: mirrors the process directory into the archive and
/// removes transferred source files.
pub struct Rsync {
    program: String,
    log_file: PathBuf,
}

impl Rsync {
    pub fn new(program: &str, log_file: PathBuf) -> Self {
        Self {
            program: program.to_string(),
            log_file,
        }
    }

    /// `rsync -avzh [--dry-run] --remove-source-files --progress --log-file=<log> <source> <target>`
    ///
    /// Both directories must carry a trailing slash so the contents, not the
    /// directory itself, are mirrored.
    pub fn command(&self, source: &str, target: &str, preview: bool) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-avzh");
        if preview {
            command.arg("--dry-run");
        }
        command
            .arg("--remove-source-files")
            .arg("--progress")
            .arg(format!("--log-file={}", self.log_file.display()))
            .arg(source)
            .arg(target);
        command
    }
}

impl ArchiveSync for Rsync {
    fn sync(&self, source: &str, target: &str, preview: bool) -> Result<SyncReport, ToolError> {
        let output = run_tool(self.command(source, target, preview))?;
        Ok(SyncReport {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// One recorded `ArchiveSync::sync` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCall {
    pub source: String,
    pub target: String,
    pub preview: bool,
}

/// Mock sync that records its calls and transfers nothing.
#[derive(Default)]
pub struct MockArchiveSync {
    pub calls: Mutex<Vec<SyncCall>>,
}

impl MockArchiveSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<SyncCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl ArchiveSync for MockArchiveSync {
    fn sync(&self, source: &str, target: &str, preview: bool) -> Result<SyncReport, ToolError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(SyncCall {
                source: source.to_string(),
                target: target.to_string(),
                preview,
            });
        }
        Ok(SyncReport {
            stdout: format!("sending incremental file list\n{source} -> {target}"),
            stderr: String::new(),
        })
    }
}
