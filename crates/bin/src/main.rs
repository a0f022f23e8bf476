//! Hobart CLI binary.
//!
//! Provides the command-line interface for the Hobart data-preparation
//! utilities: filtering a directory of stock files against a reference
//! symbol list, and inspecting a single ticker's history.

use clap::{Parser, Subcommand};
use hobart::reconcile::{self, DEFAULT_EMPTY_THRESHOLD};
use hobart::universe::Universe;
use hobart_data::discover::discover_candidates;
use hobart_data::error::DataError;
use hobart_data::series::{DATE_COLUMN, load_series, missing_value_report, resolve_series_path};
use hobart_data::symbols::load_symbols;
use hobart_output::manifest::{self, FileRecord};
use hobart_output::summary::RunSummary;
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: day-trading data preparation utilities", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter stock files down to a reference symbol list, handling empty files
    Filter {
        /// Directory with per-ticker stock files
        #[arg(long, default_value = "data/raw/Stocks")]
        stocks_dir: PathBuf,

        /// CSV with a Symbol column
        #[arg(long, default_value = "data/reference/sp500_symbols_template.csv")]
        symbols_file: PathBuf,

        /// Output CSV for matched valid files
        #[arg(long, default_value = "data/processed/sp500_filtered_files.csv")]
        output_file: PathBuf,

        /// If total empty files are above this, the run switches to explicit skip/report mode
        #[arg(long, default_value_t = DEFAULT_EMPTY_THRESHOLD)]
        empty_threshold: usize,

        /// Optional directory to copy filtered valid files into
        #[arg(long)]
        copy_dir: Option<PathBuf>,

        /// Summary output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Load one stock file, inspect schema, parse dates, and check missing values
    Inspect {
        /// Stock ticker symbol
        #[arg(long, default_value = "AAPL")]
        ticker: String,

        /// Directory containing stock files
        #[arg(long, default_value = "data/raw/Stocks")]
        data_dir: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            stocks_dir,
            symbols_file,
            output_file,
            empty_threshold,
            copy_dir,
            format,
        } => run_filter(
            &stocks_dir,
            &symbols_file,
            &output_file,
            empty_threshold,
            copy_dir.as_deref(),
            &format,
        ),
        Commands::Inspect { ticker, data_dir } => run_inspect(&ticker, &data_dir),
    }
}

fn run_filter(
    stocks_dir: &Path,
    symbols_file: &Path,
    output_file: &Path,
    empty_threshold: usize,
    copy_dir: Option<&Path>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate inputs before any output is written.
    if !stocks_dir.is_dir() {
        return Err(DataError::DirectoryNotFound(stocks_dir.to_path_buf()).into());
    }

    let symbols = load_symbols(symbols_file)?;
    if symbols.is_empty() {
        return Err(DataError::EmptySymbolSet(symbols_file.to_path_buf()).into());
    }

    let candidates = discover_candidates(stocks_dir)?;
    let outcome = reconcile::reconcile(&candidates, &symbols, empty_threshold);

    manifest::write_manifest(output_file, &outcome.records)?;

    let empty_report = if outcome.wants_empty_report() {
        let report_path = manifest::empty_report_path(output_file);
        manifest::write_empty_report(&report_path, &outcome.empty_files)?;
        Some(report_path)
    } else {
        None
    };

    let copied = match copy_dir {
        Some(dir) => Some(copy_records(dir, &outcome.records)?),
        None => None,
    };

    let summary = RunSummary {
        stocks_dir: display_path(stocks_dir),
        symbols_loaded: symbols.size(),
        files_found: candidates.len(),
        empty_files: outcome.empty_files.len(),
        mode: outcome.mode.to_string(),
        matched_valid: outcome.records.len(),
        matched_empty: outcome.matched_empty.len(),
        output_file: display_path(output_file),
        empty_report: empty_report.as_deref().map(display_path),
        copied,
        copy_dir: copy_dir.map(display_path),
        generated_at: chrono::Utc::now(),
    };

    if format.eq_ignore_ascii_case("json") {
        println!("{}", summary.to_json()?);
    } else {
        println!("\n{summary}");
    }

    Ok(())
}

/// Copy every matched record's source file into the destination directory,
/// preserving file names and overwriting on conflict. Any copy failure
/// propagates and halts the run.
fn copy_records(copy_dir: &Path, records: &[FileRecord]) -> Result<usize, std::io::Error> {
    fs::create_dir_all(copy_dir)?;

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.set_message("Copying matched files...");

    let mut copied = 0;
    for record in records {
        fs::copy(&record.file_path, copy_dir.join(&record.file_name))?;
        copied += 1;
        pb.inc(1);
    }
    pb.finish_with_message(format!("Copied {copied} files"));

    Ok(copied)
}

fn run_inspect(ticker: &str, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = resolve_series_path(data_dir, ticker);
    println!("Loading file: {}", file_path.display());

    let df = load_series(&file_path)?;

    println!("\n--- Basic Overview ---");
    println!("Rows: {}", df.height());
    println!("Columns: {}", df.width());

    println!("\n--- Columns ---");
    println!("{:?}", df.get_column_names_str());

    println!("\n--- Data Types ---");
    for (name, dtype) in df.schema().iter() {
        println!("  {name}: {dtype}");
    }

    println!("\n--- Date Checks ---");
    let dates = df.column(DATE_COLUMN)?;
    println!("Invalid/Unparsed dates: {}", dates.null_count());
    if df.height() > 0 {
        let bounds = df
            .clone()
            .lazy()
            .select([
                col(DATE_COLUMN).min().alias("min_date"),
                col(DATE_COLUMN).max().alias("max_date"),
            ])
            .collect()?;
        println!("Min date: {}", bounds.column("min_date")?.get(0)?);
        println!("Max date: {}", bounds.column("max_date")?.get(0)?);
    }

    println!("\n--- Missing Values (per column) ---");
    for (column, count) in missing_value_report(&df) {
        println!("  {column}: {count}");
    }

    println!("\n--- Head (first 5 rows) ---");
    println!("{}", df.head(Some(5)));

    Ok(())
}

/// Resolved path for display, falling back to the path as given.
fn display_path(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
