use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use super::{run_tool, TextExtractor, ToolError};

/// `pdftotext` wrapper, first page to stdout.
pub struct PdfToText {
    program: String,
}

impl PdfToText {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// `pdftotext -l 1 <pdf> -`
    pub fn command(&self, pdf: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-l").arg("1").arg(pdf).arg("-");
        command
    }
}

impl TextExtractor for PdfToText {
    fn first_page_text(&self, pdf: &Path) -> Result<String, ToolError> {
        let output = run_tool(self.command(pdf))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Mock text extractor keyed by file name. Files without an entry have no
/// text; files that do not exist fail like the real tool does.
#[derive(Default)]
pub struct MockTextExtractor {
    texts: HashMap<String, String>,
}

impl MockTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, file_name: &str, text: &str) -> Self {
        self.texts.insert(file_name.to_string(), text.to_string());
        self
    }
}

impl TextExtractor for MockTextExtractor {
    fn first_page_text(&self, pdf: &Path) -> Result<String, ToolError> {
        if !pdf.exists() {
            return Err(ToolError::Failed {
                tool: "mock-text".into(),
                status: "exit status: 1".into(),
                stderr: format!("I/O Error: Couldn't open file '{}'", pdf.display()),
            });
        }
        let name = pdf
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.texts.get(&name).cloned().unwrap_or_default())
    }
}
