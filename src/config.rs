//! Run configuration: directories, month-name table, execution settings and
//! the date pattern used to find the printed date in OCR text.
//!
//! The file is TOML with four mandatory sections. A missing file, section or
//! key is fatal and aborts the run before any document is touched.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::pipeline::naming::{DateExtractor, MonthTable};

/// Application-level constants
pub const APP_NAME: &str = "archivar";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV: &str = "ARCHIVAR_CONFIG";

pub const DEFAULT_LANGUAGES: &str = "deu+eng";

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "archivar=info,archivar_lib=info"
}

/// Default config file: `$ARCHIVAR_CONFIG`, else `<config_dir>/archivar/archivar.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_default()
        .join("archivar.toml")
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The configuration file '{0}' was not found")]
    NotFound(PathBuf),

    #[error("I/O error reading configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration file: {0}")]
    Parse(String),

    #[error("The section '{0}' is missing in the configuration file")]
    MissingSection(&'static str),

    #[error("Invalid section '{section}': {reason}")]
    InvalidSection {
        section: &'static str,
        reason: String,
    },

    #[error("Invalid date_pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("settings.jobs must be at least 1")]
    InvalidJobs,
}

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Execution mode. Only `hot` mutates the filesystem; every other value
/// in the config file means dry-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hot,
    DryRun,
}

impl Mode {
    pub fn from_setting(value: &str) -> Self {
        if value == "hot" {
            Self::Hot
        } else {
            Self::DryRun
        }
    }

    pub fn is_hot(&self) -> bool {
        matches!(self, Self::Hot)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hot => f.write_str("hot"),
            Self::DryRun => f.write_str("dry-run"),
        }
    }
}

/// Directory roots, slash-normalised with exactly one trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    pub input_dir: String,
    pub process_dir: String,
    pub target_dir: String,
    pub log_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    /// Worker count handed to the OCR tool.
    pub jobs: u32,
    /// Tesseract language list, e.g. "deu+eng".
    pub languages: String,
    pub ocr_command: String,
    pub text_command: String,
    pub sync_command: String,
}

/// Fully validated configuration.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub directories: Directories,
    pub months: MonthTable,
    pub settings: Settings,
    pub date_extractor: DateExtractor,
}

impl ArchiveConfig {
    /// Log file of the sync tool, next to the run log.
    pub fn sync_log_file(&self) -> PathBuf {
        Path::new(&self.directories.log_dir).join("rsync_debug.log")
    }
}

// -- On-disk sections -------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawDirectories {
    input_dir: String,
    process_dir: String,
    target_dir: String,
    log_dir: String,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    mode: String,
    jobs: u32,
    #[serde(default = "default_languages")]
    languages: String,
    #[serde(default = "default_ocr_command")]
    ocr_command: String,
    #[serde(default = "default_text_command")]
    text_command: String,
    #[serde(default = "default_sync_command")]
    sync_command: String,
}

fn default_languages() -> String {
    DEFAULT_LANGUAGES.to_string()
}

fn default_ocr_command() -> String {
    "ocrmypdf".to_string()
}

fn default_text_command() -> String {
    "pdftotext".to_string()
}

fn default_sync_command() -> String {
    "rsync".to_string()
}

#[derive(Debug, Deserialize)]
struct RawRegex {
    date_pattern: String,
}

// ═══════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════

/// Load and validate the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<ArchiveConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<ArchiveConfig, ConfigError> {
    let mut table: toml::Table =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let directories: RawDirectories = section(&mut table, "directories")?;
    let months: HashMap<String, String> = section(&mut table, "months")?;
    let settings: RawSettings = section(&mut table, "settings")?;
    let regex: RawRegex = section(&mut table, "regex")?;

    for (name, number) in &months {
        let is_month_number =
            (1..=2).contains(&number.len()) && number.chars().all(|c| c.is_ascii_digit());
        if !is_month_number {
            return Err(ConfigError::InvalidSection {
                section: "months",
                reason: format!("'{name}' maps to '{number}', expected a 1-2 digit month number"),
            });
        }
    }

    if settings.jobs == 0 {
        return Err(ConfigError::InvalidJobs);
    }

    let date_extractor = DateExtractor::new(&regex.date_pattern)?;

    Ok(ArchiveConfig {
        directories: Directories {
            input_dir: normalize_slashes(&directories.input_dir),
            process_dir: normalize_slashes(&directories.process_dir),
            target_dir: normalize_slashes(&directories.target_dir),
            log_dir: normalize_slashes(&directories.log_dir),
        },
        months: MonthTable::new(months),
        settings: Settings {
            mode: Mode::from_setting(&settings.mode),
            jobs: settings.jobs,
            languages: settings.languages,
            ocr_command: settings.ocr_command,
            text_command: settings.text_command,
            sync_command: settings.sync_command,
        },
        date_extractor,
    })
}

fn section<T: DeserializeOwned>(
    table: &mut toml::Table,
    name: &'static str,
) -> Result<T, ConfigError> {
    let value = table
        .remove(name)
        .ok_or(ConfigError::MissingSection(name))?;
    value
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::InvalidSection {
            section: name,
            reason: e.to_string(),
        })
}

/// Collapse repeated slashes and ensure exactly one trailing slash.
///
/// A source directory without its trailing slash makes rsync copy the
/// directory itself instead of its contents.
pub fn normalize_slashes(dir: &str) -> String {
    let mut out = String::with_capacity(dir.len() + 1);
    for c in dir.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}
