use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use archivar_lib::{run, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "archivar", version)]
#[command(about = "OCR scanned PDFs, reconcile their date and file them into the archive")]
struct Args {
    /// Configuration file (default: $ARCHIVAR_CONFIG or <config dir>/archivar/archivar.toml)
    #[arg(long, short, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Decide and log everything, but rename, move and delete nothing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(RunOptions {
        config_path: args.config,
        force_dry_run: args.dry_run,
    }) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("archivar: {e}");
            ExitCode::FAILURE
        }
    }
}
