use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Secondary grammar applied to the matched date expression:
/// `<day>.<month digits | month text>.<year>`, the middle dot optional.
static DATE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})\.\s?([0-9]{1,2}|.*\s?)\.?([0-9]{2,4})$").unwrap()
});

static NUMERIC_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0?[1-9]|1[0-2])$").unwrap());

static CANONICAL_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

/// Month used when a textual month is missing from the table.
pub const FALLBACK_MONTH: &str = "01";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Could not find or extract date in text: {0:?}")]
pub struct DateParseFailure(pub String);

// ═══════════════════════════════════════════════════════════
// Month table
// ═══════════════════════════════════════════════════════════

/// Month name → month number, as configured. Keys are matched exactly
/// (case-sensitive) against the first three characters of a textual month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthTable {
    entries: HashMap<String, String>,
}

impl MonthTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Resolve a textual month via its three-character abbreviation.
    /// Unknown abbreviations silently become January.
    pub fn resolve(&self, month_text: &str) -> String {
        let abbreviation: String = month_text.chars().take(3).collect();
        match self.lookup(&abbreviation) {
            Some(number) => number.to_string(),
            None => {
                tracing::debug!(
                    month = %month_text,
                    abbreviation = %abbreviation,
                    "Unknown month name, falling back to {FALLBACK_MONTH}"
                );
                FALLBACK_MONTH.to_string()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MonthTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ═══════════════════════════════════════════════════════════
// Extraction
// ═══════════════════════════════════════════════════════════

/// Finds the printed date in OCR text with an operator-supplied pattern.
#[derive(Debug, Clone)]
pub struct DateExtractor {
    pattern: Regex,
}

impl DateExtractor {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// First substring of `text` matching the configured pattern.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}

// ═══════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════

/// Raw captures of the secondary grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDate {
    pub day: String,
    /// Digits or free text (e.g. "März").
    pub month: String,
    pub year: String,
}

impl ExtractedDate {
    pub fn parse(expression: &str) -> Result<Self, DateParseFailure> {
        let caps = DATE_GRAMMAR
            .captures(expression)
            .ok_or_else(|| DateParseFailure(expression.to_string()))?;
        Ok(Self {
            day: caps[1].to_string(),
            month: caps[2].to_string(),
            year: caps[3].to_string(),
        })
    }
}

/// Outcome of normalising an extracted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedDate {
    /// Canonical `YYYYMMDD`.
    Valid(String),
    /// The assembled string did not reduce to 8 digits, or the expression
    /// did not fit the date grammar at all.
    Invalid(String),
}

impl NormalizedDate {
    pub fn as_valid(&self) -> Option<&str> {
        match self {
            Self::Valid(date) => Some(date),
            Self::Invalid(_) => None,
        }
    }
}

/// Normalise a matched date expression to `YYYYMMDD`.
///
/// Two-digit years are placed in the 2000s. Textual months go through
/// `months`; numeric months outside 1-12 are treated as text too, which
/// means they end up as January unless the table knows them.
pub fn normalize_date(
    expression: &str,
    months: &MonthTable,
) -> Result<NormalizedDate, DateParseFailure> {
    let ExtractedDate { day, month, year } = ExtractedDate::parse(expression)?;

    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        year
    };

    let month = if NUMERIC_MONTH.is_match(&month) {
        month
    } else {
        months.resolve(&month)
    };

    let candidate = format!("{year}{month:0>2}{day:0>2}");
    if CANONICAL_DATE.is_match(&candidate) {
        Ok(NormalizedDate::Valid(candidate))
    } else {
        Ok(NormalizedDate::Invalid(candidate))
    }
}
