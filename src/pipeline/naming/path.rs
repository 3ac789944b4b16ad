use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// Path is outside the input root or is not a `.pdf`.
    #[error("Pattern does not match file path: {0}")]
    NoMatch(String),

    /// Path is a PDF under the root but does not follow the naming grammar.
    #[error("Match failed for file {0}")]
    GrammarMismatch(String),
}

/// Fields decoded from an inbound scan path.
///
/// Numeric fields stay fixed-width strings so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    /// Everything between the input root and the file name; may contain `/`.
    pub category1: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub time: String,
    pub category2: String,
    /// Last three digits of the trailing numeric block.
    pub sequence: String,
    pub extension: String,
}

impl ParsedPath {
    /// `YYYYMMDD` as encoded in the scan file name.
    pub fn path_date(&self) -> String {
        format!("{}{}{}", self.year, self.month, self.day)
    }

    /// Category1 as it appears inside a file name. Nested category folders
    /// are joined with `-` because a file name cannot hold a `/`.
    pub fn category1_label(&self) -> String {
        self.category1.replace('/', "-")
    }

    /// `{process_dir}/{category1}/{category2}`
    pub fn output_dir(&self, process_dir: &Path) -> PathBuf {
        process_dir.join(&self.category1).join(&self.category2)
    }

    /// Name the OCR output carries until the date has been reconciled.
    /// It has no sentinel letter, which is how interrupted runs are detected.
    pub fn interim_filename(&self) -> String {
        format!(
            "{}{}-{}-{}.pdf",
            self.path_date(),
            self.sequence,
            self.category1_label(),
            self.category2
        )
    }
}

/// Decomposes paths below one input root.
#[derive(Debug, Clone)]
pub struct PathDecomposer {
    root: String,
    grammar: Regex,
}

impl PathDecomposer {
    /// `input_root` must already be slash-normalised (single trailing `/`).
    pub fn new(input_root: &str) -> Result<Self, regex::Error> {
        let grammar = Regex::new(&format!(
            r"^{}(.+)/([0-9]{{4}})([0-9]{{2}})([0-9]{{2}})_([0-9]{{6}})_([^/]+?)_[0-9]{{3}}([0-9]{{3}})\.([^./]+)$",
            regex::escape(input_root)
        ))?;
        Ok(Self {
            root: input_root.to_string(),
            grammar,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Decompose `path` into its category, date, time and sequence fields.
    pub fn decompose(&self, path: &Path) -> Result<ParsedPath, DecomposeError> {
        let text = path
            .to_str()
            .ok_or_else(|| DecomposeError::NoMatch(path.display().to_string()))?;

        if !text.starts_with(&self.root) || !text.ends_with(".pdf") {
            return Err(DecomposeError::NoMatch(text.to_string()));
        }

        let caps = self
            .grammar
            .captures(text)
            .ok_or_else(|| DecomposeError::GrammarMismatch(text.to_string()))?;

        Ok(ParsedPath {
            category1: caps[1].to_string(),
            year: caps[2].to_string(),
            month: caps[3].to_string(),
            day: caps[4].to_string(),
            time: caps[5].to_string(),
            category2: caps[6].to_string(),
            sequence: caps[7].to_string(),
            extension: caps[8].to_string(),
        })
    }
}
