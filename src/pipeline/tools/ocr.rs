use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

use super::{run_tool, OcrEngine, ToolError};

/// `ocrmypdf` command-line wrapper.
pub struct OcrMyPdf {
    program: String,
}

impl OcrMyPdf {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// `ocrmypdf -j <jobs> -l <languages> <input> <output>`
    pub fn command(&self, input: &Path, output: &Path, jobs: u32, languages: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-j")
            .arg(jobs.to_string())
            .arg("-l")
            .arg(languages)
            .arg(input)
            .arg(output);
        command
    }
}

impl OcrEngine for OcrMyPdf {
    fn ocr(
        &self,
        input: &Path,
        output: &Path,
        jobs: u32,
        languages: &str,
    ) -> Result<(), ToolError> {
        let out = run_tool(self.command(input, output, jobs, languages))?;
        let stderr = String::from_utf8_lossy(&out.stderr);
        if !stderr.trim().is_empty() {
            tracing::debug!(tool = %self.program, output = %stderr.trim(), "OCR tool output");
        }
        Ok(())
    }
}

/// Mock OCR engine for unit testing without ocrmypdf.
/// Writes a placeholder PDF to the output path, or fails when configured to.
#[derive(Default)]
pub struct MockOcrEngine {
    pub fail: bool,
    pub calls: Mutex<Vec<(std::path::PathBuf, std::path::PathBuf)>>,
}

impl MockOcrEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

impl OcrEngine for MockOcrEngine {
    fn ocr(
        &self,
        input: &Path,
        output: &Path,
        _jobs: u32,
        _languages: &str,
    ) -> Result<(), ToolError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((input.to_path_buf(), output.to_path_buf()));
        }
        if self.fail {
            return Err(ToolError::Failed {
                tool: "mock-ocr".into(),
                status: "exit status: 2".into(),
                stderr: "input file is not a valid PDF".into(),
            });
        }
        let bytes = std::fs::read(input).map_err(|source| ToolError::Spawn {
            tool: "mock-ocr".into(),
            source,
        })?;
        std::fs::write(output, bytes).map_err(|source| ToolError::Spawn {
            tool: "mock-ocr".into(),
            source,
        })?;
        Ok(())
    }
}
