use std::fmt;

use super::date::NormalizedDate;
use super::path::ParsedPath;

/// Sentinel letters embedded in the final file name.
pub const SENTINEL_CORRECTED: char = 'x';
pub const SENTINEL_CONFIRMED: char = 'o';
pub const SENTINEL_UNRESOLVED: char = 'O';

/// Final naming decision for one document.
///
/// `x` and `o` mark dates resolved automatically; `O` flags a document
/// whose printed date could not be established and needs manual review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Printed date differs from the scan date; file is re-dated.
    CorrectedMismatch { filename: String },
    /// Printed date equals the scan date.
    ConfirmedMatch { filename: String },
    /// A date was found but did not normalise to `YYYYMMDD`.
    NormalizationFailed { filename: String },
    /// No date expression in the text.
    NoDateFound { filename: String },
}

impl RenameOutcome {
    pub fn filename(&self) -> &str {
        match self {
            Self::CorrectedMismatch { filename }
            | Self::ConfirmedMatch { filename }
            | Self::NormalizationFailed { filename }
            | Self::NoDateFound { filename } => filename,
        }
    }

    pub fn sentinel(&self) -> char {
        match self {
            Self::CorrectedMismatch { .. } => SENTINEL_CORRECTED,
            Self::ConfirmedMatch { .. } => SENTINEL_CONFIRMED,
            Self::NormalizationFailed { .. } | Self::NoDateFound { .. } => SENTINEL_UNRESOLVED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CorrectedMismatch { .. } => "corrected-mismatch",
            Self::ConfirmedMatch { .. } => "confirmed-match",
            Self::NormalizationFailed { .. } => "normalization-failed",
            Self::NoDateFound { .. } => "no-date-found",
        }
    }

    pub fn needs_review(&self) -> bool {
        self.sentinel() == SENTINEL_UNRESOLVED
    }
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the outcome for `parsed` given the normalised printed date.
/// `None` means the text contained no date expression at all.
pub fn synthesize(parsed: &ParsedPath, date: Option<&NormalizedDate>) -> RenameOutcome {
    let path_date = parsed.path_date();
    match date {
        Some(NormalizedDate::Valid(found)) if *found != path_date => {
            RenameOutcome::CorrectedMismatch {
                filename: compose(found, SENTINEL_CORRECTED, parsed),
            }
        }
        Some(NormalizedDate::Valid(found)) => RenameOutcome::ConfirmedMatch {
            filename: compose(found, SENTINEL_CONFIRMED, parsed),
        },
        Some(NormalizedDate::Invalid(_)) => RenameOutcome::NormalizationFailed {
            filename: compose(&path_date, SENTINEL_UNRESOLVED, parsed),
        },
        None => RenameOutcome::NoDateFound {
            filename: compose(&path_date, SENTINEL_UNRESOLVED, parsed),
        },
    }
}

fn compose(date: &str, sentinel: char, parsed: &ParsedPath) -> String {
    format!(
        "{date}{sentinel}{}-{}-{}.pdf",
        parsed.sequence,
        parsed.category1_label(),
        parsed.category2
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> ParsedPath {
        ParsedPath {
            category1: "Invoices".into(),
            year: "2024".into(),
            month: "03".into(),
            day: "05".into(),
            time: "101500".into(),
            category2: "Utility".into(),
            sequence: "007".into(),
            extension: "pdf".into(),
        }
    }

    #[test]
    fn matching_date_is_confirmed() {
        let outcome = synthesize(&invoice(), Some(&NormalizedDate::Valid("20240305".into())));
        assert_eq!(
            outcome,
            RenameOutcome::ConfirmedMatch {
                filename: "20240305o007-Invoices-Utility.pdf".into()
            }
        );
        assert_eq!(outcome.sentinel(), 'o');
        assert!(!outcome.needs_review());
    }

    #[test]
    fn differing_date_is_corrected() {
        let outcome = synthesize(&invoice(), Some(&NormalizedDate::Valid("20240228".into())));
        assert_eq!(outcome.filename(), "20240228x007-Invoices-Utility.pdf");
        assert_eq!(outcome.as_str(), "corrected-mismatch");
        assert!(!outcome.needs_review());
    }

    #[test]
    fn invalid_date_keeps_path_date_unresolved() {
        let outcome = synthesize(&invoice(), Some(&NormalizedDate::Invalid("2020305".into())));
        assert_eq!(
            outcome,
            RenameOutcome::NormalizationFailed {
                filename: "20240305O007-Invoices-Utility.pdf".into()
            }
        );
        assert!(outcome.needs_review());
    }

    #[test]
    fn absent_date_keeps_path_date_unresolved() {
        let outcome = synthesize(&invoice(), None);
        assert_eq!(
            outcome,
            RenameOutcome::NoDateFound {
                filename: "20240305O007-Invoices-Utility.pdf".into()
            }
        );
        assert_eq!(outcome.to_string(), "no-date-found");
    }

    #[test]
    fn synthesis_is_deterministic() {
        let parsed = invoice();
        let date = NormalizedDate::Valid("20231224".into());
        assert_eq!(synthesize(&parsed, Some(&date)), synthesize(&parsed, Some(&date)));
        assert_eq!(synthesize(&parsed, None), synthesize(&parsed, None));
    }

    #[test]
    fn nested_category1_is_flattened_in_filename() {
        let mut parsed = invoice();
        parsed.category1 = "Home/Insurance".into();
        let outcome = synthesize(&parsed, None);
        assert_eq!(outcome.filename(), "20240305O007-Home-Insurance-Utility.pdf");
    }
}
