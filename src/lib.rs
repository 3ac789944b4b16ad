pub mod config;
pub mod logging;
pub mod pipeline;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{ConfigError, Mode};
use crate::logging::LoggingError;
use crate::pipeline::{Pipeline, PipelineError, RunReport};

#[derive(Error, Debug)]
pub enum ArchivarError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error("Pipeline failed: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Options coming from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Config file; falls back to `config::default_config_path()`.
    pub config_path: Option<PathBuf>,
    /// Force dry-run whatever the config file says.
    pub force_dry_run: bool,
}

/// Load configuration, start logging and process the input tree once.
pub fn run(options: RunOptions) -> Result<RunReport, ArchivarError> {
    let config_path = options
        .config_path
        .unwrap_or_else(config::default_config_path);
    let mut config = config::load_config(&config_path)?;
    if options.force_dry_run {
        config.settings.mode = Mode::DryRun;
    }

    let _log_guard = logging::init_logging(Path::new(&config.directories.log_dir))?;

    let mode = config.settings.mode;
    tracing::info!(
        config = %config_path.display(),
        "<<<<<{} v{} start: Mode {mode}>>>>>",
        config::APP_NAME,
        config::APP_VERSION
    );

    let result = Pipeline::from_config(config).and_then(|pipeline| pipeline.run());
    match &result {
        Ok(_) => tracing::info!("<<<<<{} end: Mode {mode}>>>>>", config::APP_NAME),
        Err(e) => tracing::error!(error = %e, "Run aborted"),
    }
    result.map_err(ArchivarError::from)
}
