//! Pipeline driver.
//!
//! Walks the input tree and takes each scan through
//! decompose → OCR → date resolution → rename, then mirrors the process
//! tree into the archive and removes the consumed originals.
//!
//! Per-file problems never abort the run: a path that does not fit the
//! naming grammar is skipped, a missing or unreadable date routes to the
//! `O` outcome, and failing external tools are logged and carried on from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::config::{ArchiveConfig, Mode};
use crate::pipeline::naming::{
    normalize_date, synthesize, DecomposeError, NormalizedDate, PathDecomposer, RenameOutcome,
};
use crate::pipeline::recovery::find_interrupted;
use crate::pipeline::tools::{
    ArchiveSync, OcrEngine, OcrMyPdf, PdfToText, Rsync, SyncReport, TextExtractor,
};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not walk input directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Input directory cannot be used as a path pattern: {0}")]
    InputRoot(#[from] regex::Error),
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Terminal state of one discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    /// Path did not fit the naming grammar; file left where it is.
    Skipped { reason: DecomposeError },
    /// The category folder under the process root could not be created.
    OutputDirFailed { dir: PathBuf, error: String },
    /// OCR output renamed to its final name.
    Renamed { outcome: RenameOutcome, target: PathBuf },
    /// Dry-run: the final name was decided and logged only.
    DryRun { outcome: RenameOutcome },
    /// Final name decided but the rename itself failed.
    RenameFailed { outcome: RenameOutcome, error: String },
}

impl FileState {
    pub fn outcome(&self) -> Option<&RenameOutcome> {
        match self {
            Self::Skipped { .. } | Self::OutputDirFailed { .. } => None,
            Self::Renamed { outcome, .. }
            | Self::DryRun { outcome }
            | Self::RenameFailed { outcome, .. } => Some(outcome),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub source: PathBuf,
    pub state: FileState,
}

/// Everything a run did, in processing order.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mode: Mode,
    pub files: Vec<FileRecord>,
    /// Interim OCR outputs left behind by an earlier, interrupted run.
    pub interrupted: Vec<PathBuf>,
    pub sync: Option<SyncReport>,
    pub originals_removed: usize,
}

impl RunReport {
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, FileState::Skipped { .. }))
    }

    pub fn renamed(&self) -> usize {
        self.count(|s| matches!(s, FileState::Renamed { .. }))
    }

    pub fn output_dir_failed(&self) -> usize {
        self.count(|s| matches!(s, FileState::OutputDirFailed { .. }))
    }

    pub fn rename_failed(&self) -> usize {
        self.count(|s| matches!(s, FileState::RenameFailed { .. }))
    }

    pub fn needs_review(&self) -> usize {
        self.count(|s| s.outcome().is_some_and(RenameOutcome::needs_review))
    }

    fn count(&self, pred: impl Fn(&FileState) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.state)).count()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

pub struct Pipeline {
    config: ArchiveConfig,
    decomposer: PathDecomposer,
    ocr: Arc<dyn OcrEngine>,
    text: Arc<dyn TextExtractor>,
    sync: Arc<dyn ArchiveSync>,
}

impl Pipeline {
    pub fn new(
        config: ArchiveConfig,
        ocr: Arc<dyn OcrEngine>,
        text: Arc<dyn TextExtractor>,
        sync: Arc<dyn ArchiveSync>,
    ) -> Result<Self, PipelineError> {
        let decomposer = PathDecomposer::new(&config.directories.input_dir)?;
        Ok(Self {
            config,
            decomposer,
            ocr,
            text,
            sync,
        })
    }

    /// Pipeline backed by ocrmypdf, pdftotext and rsync.
    pub fn from_config(config: ArchiveConfig) -> Result<Self, PipelineError> {
        let settings = &config.settings;
        let ocr = Arc::new(OcrMyPdf::new(&settings.ocr_command));
        let text = Arc::new(PdfToText::new(&settings.text_command));
        let sync = Arc::new(Rsync::new(&settings.sync_command, config.sync_log_file()));
        Self::new(config, ocr, text, sync)
    }

    pub fn mode(&self) -> Mode {
        self.config.settings.mode
    }

    /// Process every PDF below the input root, then archive.
    pub fn run(&self) -> Result<RunReport, PipelineError> {
        let dirs = &self.config.directories;
        let interrupted = find_interrupted(Path::new(&dirs.process_dir));

        let mut files = Vec::new();
        for path in self.discover()? {
            let state = self.process_file(&path)?;
            files.push(FileRecord {
                source: path,
                state,
            });
        }

        tracing::info!("Files are being moved and cleaned...");
        let sync = self.archive();

        let originals_removed = if self.mode().is_hot() {
            self.remove_originals(&files)?
        } else {
            tracing::info!("Dryrun mode: Files were not moved or deleted");
            0
        };

        let report = RunReport {
            mode: self.mode(),
            files,
            interrupted,
            sync,
            originals_removed,
        };
        tracing::info!(
            mode = %report.mode,
            discovered = report.files.len(),
            skipped = report.skipped(),
            renamed = report.renamed(),
            output_dir_failed = report.output_dir_failed(),
            rename_failed = report.rename_failed(),
            needs_review = report.needs_review(),
            originals_removed = report.originals_removed,
            "Run summary"
        );
        Ok(report)
    }

    /// All `*.pdf` files below the input root, sorted by path.
    pub fn discover(&self) -> Result<Vec<PathBuf>, PipelineError> {
        let mut found = Vec::new();
        for entry in WalkDir::new(&self.config.directories.input_dir).sort_by_file_name() {
            let entry = entry?;
            let is_pdf = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(".pdf"));
            if entry.file_type().is_file() && is_pdf {
                found.push(entry.into_path());
            }
        }
        Ok(found)
    }

    /// Take one scan from its inbound path to its final name.
    pub fn process_file(&self, path: &Path) -> Result<FileState, PipelineError> {
        let mode = self.mode();
        tracing::info!(file = %path.display(), %mode, "Start processing");

        let parsed = match self.decomposer.decompose(path) {
            Ok(parsed) => parsed,
            Err(reason) => {
                tracing::warn!(file = %path.display(), "{reason}");
                return Ok(FileState::Skipped { reason });
            }
        };
        tracing::info!(
            kat1 = %parsed.category1,
            year = %parsed.year,
            month = %parsed.month,
            day = %parsed.day,
            time = %parsed.time,
            kat2 = %parsed.category2,
            seqnum = %parsed.sequence,
            ext = %parsed.extension,
            "Extracted values"
        );

        let output_dir = parsed.output_dir(Path::new(&self.config.directories.process_dir));
        if !output_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&output_dir) {
                tracing::warn!(
                    file = %path.display(),
                    dir = %output_dir.display(),
                    error = %e,
                    "Could not create output directory"
                );
                return Ok(FileState::OutputDirFailed {
                    dir: output_dir,
                    error: e.to_string(),
                });
            }
            tracing::info!(dir = %output_dir.display(), "Created directory");
        }

        // Phase 1: OCR into the interim name
        let interim = output_dir.join(parsed.interim_filename());
        let settings = &self.config.settings;
        if mode.is_hot() {
            match self
                .ocr
                .ocr(path, &interim, settings.jobs, &settings.languages)
            {
                Ok(()) => tracing::info!(output = %interim.display(), "OCR -> PDF: Done"),
                Err(e) => tracing::warn!(file = %path.display(), error = %e, "OCR failed"),
            }
        } else {
            tracing::info!(
                input = %path.display(),
                output = %interim.display(),
                jobs = settings.jobs,
                languages = %settings.languages,
                "Dryrun mode: OCR -> PDF (not executed)"
            );
        }

        let text = match self.text.first_page_text(&interim) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(file = %interim.display(), error = %e, "Text extraction failed");
                String::new()
            }
        };

        let date = self.resolve_date(&text);
        let outcome = synthesize(&parsed, date.as_ref());
        tracing::info!(
            file = %path.display(),
            outcome = %outcome,
            name = %outcome.filename(),
            "Date reconciled"
        );

        // Phase 2: retarget the interim file to its final name
        if !mode.is_hot() {
            tracing::info!(name = %outcome.filename(), "Dryrun mode: Renamed file (not executed)");
            return Ok(FileState::DryRun { outcome });
        }

        let target = output_dir.join(outcome.filename());
        match std::fs::rename(&interim, &target) {
            Ok(()) => {
                tracing::info!(name = %outcome.filename(), "Renamed file");
                Ok(FileState::Renamed { outcome, target })
            }
            Err(e) => {
                tracing::warn!(
                    file = %interim.display(),
                    name = %outcome.filename(),
                    error = %e,
                    "Rename failed"
                );
                Ok(FileState::RenameFailed {
                    outcome,
                    error: e.to_string(),
                })
            }
        }
    }

    /// Find and normalise the printed date in `text`.
    ///
    /// `None` when no date expression is present. An expression that does
    /// not normalise comes back as `NormalizedDate::Invalid`.
    pub fn resolve_date(&self, text: &str) -> Option<NormalizedDate> {
        let Some(expression) = self.config.date_extractor.extract(text) else {
            tracing::warn!("No date found in text");
            return None;
        };
        tracing::info!(date = %expression, "Found date in text");

        match normalize_date(expression, &self.config.months) {
            Ok(date) => {
                match &date {
                    NormalizedDate::Valid(d) => tracing::info!(date = %d, "New date"),
                    NormalizedDate::Invalid(d) => {
                        tracing::warn!(date = %d, "Date does not normalise to YYYYMMDD")
                    }
                }
                Some(date)
            }
            Err(failure) => {
                tracing::warn!("{failure}");
                Some(NormalizedDate::Invalid(expression.to_string()))
            }
        }
    }

    /// Mirror the process tree into the archive. Runs in both modes; dry-run
    /// passes the preview flag.
    fn archive(&self) -> Option<SyncReport> {
        let dirs = &self.config.directories;
        let preview = !self.mode().is_hot();
        tracing::info!(
            source = %dirs.process_dir,
            target = %dirs.target_dir,
            preview,
            "Starting archive sync"
        );
        match self.sync.sync(&dirs.process_dir, &dirs.target_dir, preview) {
            Ok(report) => {
                tracing::info!("rsync output: {}", report.stdout);
                tracing::info!("rsync error: {}", report.stderr);
                Some(report)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Archive sync failed");
                None
            }
        }
    }

    /// Delete originals whose OCR output reached its final name.
    fn remove_originals(&self, files: &[FileRecord]) -> Result<usize, PipelineError> {
        let mut removed = 0;
        for record in files {
            if !matches!(record.state, FileState::Renamed { .. }) {
                continue;
            }
            if record.source.exists() {
                std::fs::remove_file(&record.source)?;
                tracing::debug!(file = %record.source.display(), "Removed original");
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Directories, Settings};
    use crate::pipeline::naming::DateExtractor;
    use crate::pipeline::tools::{MockArchiveSync, MockOcrEngine, MockTextExtractor};

    const DATE_PATTERN: &str = r"\d{1,2}\.\s?(\d{1,2}|[A-Za-zÄÖÜäöü]+)\.?\s?\d{2,4}";

    // -- Helpers -----------------------------------------------------------

    struct Fixture {
        _dir: tempfile::TempDir,
        input: PathBuf,
        process: PathBuf,
        ocr: Arc<MockOcrEngine>,
        sync: Arc<MockArchiveSync>,
    }

    fn fixture(ocr: MockOcrEngine) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("inbox");
        let process = dir.path().join("process");
        std::fs::create_dir_all(&input).unwrap();
        Fixture {
            input,
            process,
            _dir: dir,
            ocr: Arc::new(ocr),
            sync: Arc::new(MockArchiveSync::new()),
        }
    }

    fn dir_string(path: &Path) -> String {
        crate::config::normalize_slashes(path.to_str().unwrap())
    }

    fn config(fx: &Fixture, mode: Mode) -> ArchiveConfig {
        ArchiveConfig {
            directories: Directories {
                input_dir: dir_string(&fx.input),
                process_dir: dir_string(&fx.process),
                target_dir: dir_string(&fx._dir.path().join("archive")),
                log_dir: dir_string(&fx._dir.path().join("log")),
            },
            months: [("Jan", "01"), ("Feb", "02"), ("Mär", "03")].into_iter().collect(),
            settings: Settings {
                mode,
                jobs: 2,
                languages: "deu+eng".into(),
                ocr_command: "ocrmypdf".into(),
                text_command: "pdftotext".into(),
                sync_command: "rsync".into(),
            },
            date_extractor: DateExtractor::new(DATE_PATTERN).unwrap(),
        }
    }

    fn pipeline(fx: &Fixture, mode: Mode, text: MockTextExtractor) -> Pipeline {
        Pipeline::new(config(fx, mode), fx.ocr.clone(), Arc::new(text), fx.sync.clone()).unwrap()
    }

    fn create_scan(fx: &Fixture, relative: &str) -> PathBuf {
        let path = fx.input.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"%PDF-1.4 scanned page").unwrap();
        path
    }

    const INVOICE: &str = "Invoices/20240305_101500_Utility_000007.pdf";
    const INVOICE_INTERIM: &str = "20240305007-Invoices-Utility.pdf";

    fn leaf(fx: &Fixture) -> PathBuf {
        fx.process.join("Invoices").join("Utility")
    }

    // -- Tests -------------------------------------------------------------

    #[test]
    fn confirmed_date_renames_with_lowercase_o() {
        let fx = fixture(MockOcrEngine::new());
        let source = create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new()
            .with_text(INVOICE_INTERIM, "Stadtwerke\nRechnung vom 5.3.24\nBetrag 42,00");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        let target = leaf(&fx).join("20240305o007-Invoices-Utility.pdf");
        assert_eq!(
            report.files[0].state,
            FileState::Renamed {
                outcome: RenameOutcome::ConfirmedMatch {
                    filename: "20240305o007-Invoices-Utility.pdf".into()
                },
                target: target.clone(),
            }
        );
        assert!(target.exists());
        assert!(!leaf(&fx).join(INVOICE_INTERIM).exists());
        assert!(!source.exists());
        assert_eq!(report.originals_removed, 1);
        assert_eq!(report.needs_review(), 0);
    }

    #[test]
    fn differing_date_renames_with_x() {
        let fx = fixture(MockOcrEngine::new());
        create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new().with_text(INVOICE_INTERIM, "Datum: 28. Februar 2024");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        let outcome = report.files[0].state.outcome().unwrap();
        assert_eq!(outcome.filename(), "20240228x007-Invoices-Utility.pdf");
        assert!(leaf(&fx).join("20240228x007-Invoices-Utility.pdf").exists());
    }

    #[test]
    fn text_without_date_is_unresolved() {
        let fx = fixture(MockOcrEngine::new());
        create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new().with_text(INVOICE_INTERIM, "Kontoauszug ohne Datum");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        let outcome = report.files[0].state.outcome().unwrap();
        assert!(matches!(outcome, RenameOutcome::NoDateFound { .. }));
        assert_eq!(outcome.filename(), "20240305O007-Invoices-Utility.pdf");
        assert_eq!(report.needs_review(), 1);
    }

    #[test]
    fn unnormalisable_date_is_unresolved() {
        let fx = fixture(MockOcrEngine::new());
        create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new().with_text(INVOICE_INTERIM, "Beleg vom 5.3.202 erstellt");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        let outcome = report.files[0].state.outcome().unwrap();
        assert!(matches!(outcome, RenameOutcome::NormalizationFailed { .. }));
        assert_eq!(outcome.filename(), "20240305O007-Invoices-Utility.pdf");
    }

    #[test]
    fn resolve_date_maps_grammar_failure_to_invalid() {
        let fx = fixture(MockOcrEngine::new());
        let mut cfg = config(&fx, Mode::Hot);
        cfg.date_extractor = DateExtractor::new(r"Datum: \S+").unwrap();
        let pipeline = Pipeline::new(
            cfg,
            fx.ocr.clone(),
            Arc::new(MockTextExtractor::new()),
            fx.sync.clone(),
        )
        .unwrap();

        assert_eq!(
            pipeline.resolve_date("Datum: unleserlich"),
            Some(NormalizedDate::Invalid("Datum: unleserlich".into()))
        );
        assert_eq!(pipeline.resolve_date("kein Treffer"), None);
    }

    #[test]
    fn grammar_mismatch_is_skipped_and_kept() {
        let fx = fixture(MockOcrEngine::new());
        let stray = create_scan(&fx, "Invoices/scan_0001.pdf");
        create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new().with_text(INVOICE_INTERIM, "5.3.24");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.renamed(), 1);
        let skipped = report.files.iter().find(|f| f.source == stray).unwrap();
        assert!(matches!(
            skipped.state,
            FileState::Skipped {
                reason: DecomposeError::GrammarMismatch(_)
            }
        ));
        assert!(stray.exists(), "skipped files are neither moved nor deleted");
        assert_eq!(fx.ocr.call_count(), 1);
    }

    #[test]
    fn non_pdf_files_are_not_discovered() {
        let fx = fixture(MockOcrEngine::new());
        create_scan(&fx, INVOICE);
        std::fs::write(fx.input.join("Invoices").join("notes.txt"), "x").unwrap();

        let found = pipeline(&fx, Mode::DryRun, MockTextExtractor::new())
            .discover()
            .unwrap();
        assert_eq!(found, vec![fx.input.join(INVOICE)]);
    }

    #[test]
    fn dry_run_mutates_nothing() {
        let fx = fixture(MockOcrEngine::new());
        let source = create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new().with_text(INVOICE_INTERIM, "5.3.24");

        let report = pipeline(&fx, Mode::DryRun, text).run().unwrap();

        // OCR is not executed, so no text can be read and the date stays open
        assert_eq!(fx.ocr.call_count(), 0);
        assert_eq!(
            report.files[0].state,
            FileState::DryRun {
                outcome: RenameOutcome::NoDateFound {
                    filename: "20240305O007-Invoices-Utility.pdf".into()
                }
            }
        );
        assert!(source.exists());
        assert_eq!(report.originals_removed, 0);
        let entries: Vec<_> = std::fs::read_dir(leaf(&fx)).unwrap().collect();
        assert!(entries.is_empty());

        let calls = fx.sync.recorded();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].preview);
    }

    #[test]
    fn hot_run_syncs_process_into_target() {
        let fx = fixture(MockOcrEngine::new());
        create_scan(&fx, INVOICE);

        let report = pipeline(&fx, Mode::Hot, MockTextExtractor::new()).run().unwrap();

        let calls = fx.sync.recorded();
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].preview);
        assert_eq!(calls[0].source, dir_string(&fx.process));
        assert!(calls[0].source.ends_with('/'));
        assert!(calls[0].target.ends_with("archive/"));
        assert!(report.sync.is_some());
    }

    #[test]
    fn ocr_failure_keeps_original_and_flags_review() {
        let fx = fixture(MockOcrEngine::failing());
        let source = create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new().with_text(INVOICE_INTERIM, "5.3.24");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        match &report.files[0].state {
            FileState::RenameFailed { outcome, .. } => {
                assert!(matches!(outcome, RenameOutcome::NoDateFound { .. }));
            }
            other => panic!("unexpected state: {other:?}"),
        }
        assert_eq!(report.rename_failed(), 1);
        assert!(source.exists());
        assert_eq!(report.originals_removed, 0);
    }

    #[test]
    fn shared_category_pair_reuses_directory() {
        let fx = fixture(MockOcrEngine::new());
        create_scan(&fx, INVOICE);
        create_scan(&fx, "Invoices/20240306_090000_Utility_000008.pdf");
        let text = MockTextExtractor::new()
            .with_text(INVOICE_INTERIM, "5.3.24")
            .with_text("20240306008-Invoices-Utility.pdf", "6.3.24");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        assert_eq!(report.renamed(), 2);
        assert!(leaf(&fx).join("20240305o007-Invoices-Utility.pdf").exists());
        assert!(leaf(&fx).join("20240306o008-Invoices-Utility.pdf").exists());
    }

    #[test]
    fn blocked_output_directory_does_not_abort_run() {
        let fx = fixture(MockOcrEngine::new());
        // A plain file where the category folder should go
        std::fs::create_dir_all(&fx.process).unwrap();
        std::fs::write(fx.process.join("Bills"), b"not a directory").unwrap();
        let blocked = create_scan(&fx, "Bills/20240305_101500_Power_000003.pdf");
        let invoice = create_scan(&fx, INVOICE);
        let text = MockTextExtractor::new().with_text(INVOICE_INTERIM, "5.3.24");

        let report = pipeline(&fx, Mode::Hot, text).run().unwrap();

        assert_eq!(report.files.len(), 2);
        let first = report.files.iter().find(|f| f.source == blocked).unwrap();
        match &first.state {
            FileState::OutputDirFailed { dir, .. } => {
                assert_eq!(dir, &fx.process.join("Bills").join("Power"));
            }
            other => panic!("unexpected state: {other:?}"),
        }
        assert_eq!(report.output_dir_failed(), 1);
        assert_eq!(report.renamed(), 1);
        assert!(leaf(&fx).join("20240305o007-Invoices-Utility.pdf").exists());

        assert_eq!(fx.sync.recorded().len(), 1);
        assert!(report.sync.is_some());
        assert!(blocked.exists());
        assert!(!invoice.exists());
        assert_eq!(report.originals_removed, 1);
        assert_eq!(fx.ocr.call_count(), 1);
    }

    #[test]
    fn interrupted_outputs_are_reported_not_touched() {
        let fx = fixture(MockOcrEngine::new());
        std::fs::create_dir_all(leaf(&fx)).unwrap();
        let orphan = leaf(&fx).join("20240101001-Invoices-Utility.pdf");
        std::fs::write(&orphan, b"%PDF").unwrap();

        let report = pipeline(&fx, Mode::Hot, MockTextExtractor::new()).run().unwrap();

        assert_eq!(report.interrupted, vec![orphan.clone()]);
        assert!(orphan.exists());
        assert!(report.files.is_empty());
    }

    #[test]
    fn missing_input_directory_is_fatal() {
        let fx = fixture(MockOcrEngine::new());
        std::fs::remove_dir_all(&fx.input).unwrap();

        let result = pipeline(&fx, Mode::Hot, MockTextExtractor::new()).run();
        assert!(matches!(result, Err(PipelineError::Walk(_))));
    }
}
