//! Interactive console for the park plant registry.
//!
//! # Examples
//!
//! ```bash
//! # Prompt for the file on every pass
//! flora
//!
//! # Fixed input file, results saved as JSON under ./out, load events logged to stderr
//! flora --input plants.csv --output-dir out --format json --verbose
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use flora_table::console::Console;
use flora_table::export::OutputFormat;
use flora_table::ingestion::{
    CompositeObserver, FileObserver, IngestionObserver, IngestionOptions, IngestionSeverity, StdErrObserver,
};
use flora_table::session::{Session, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "flora")]
#[command(version, about = "Select and sort the park plant registry", long_about = None)]
struct Cli {
    /// Registry file to load on every pass (prompted for when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory saved results are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Output format for saved results: envelope, csv or json
    #[arg(short, long, default_value_t = OutputFormat::Envelope)]
    format: OutputFormat,

    /// Append load events to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log load events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.output_dir.is_dir() {
        anyhow::bail!("output directory {} does not exist", cli.output_dir.display());
    }

    let mut observers: Vec<Arc<dyn IngestionObserver>> = Vec::new();
    if cli.verbose {
        observers.push(Arc::new(StdErrObserver));
    }
    if let Some(path) = &cli.log_file {
        observers.push(Arc::new(FileObserver::new(path)));
    }
    let observer: Option<Arc<dyn IngestionObserver>> = if observers.is_empty() {
        None
    } else {
        Some(Arc::new(CompositeObserver::new(observers)))
    };

    let options = SessionOptions {
        input: cli.input,
        output_dir: cli.output_dir,
        output_format: cli.format,
        ingestion: IngestionOptions {
            observer,
            alert_at_or_above: IngestionSeverity::Critical,
            ..Default::default()
        },
    };

    let stdin = io::stdin();
    let mut console = Console::new(Session::new(options), stdin.lock(), io::stdout());
    console.run().context("console i/o failed")?;
    Ok(())
}
