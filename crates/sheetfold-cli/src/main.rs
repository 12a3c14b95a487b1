//! Sheetfold CLI - consolidate every sheet of a workbook into one flat table

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sheetfold_core::{consolidate, ConsolidateOptions, OutputDir, MAX_HEADER_ROW};

#[derive(Parser)]
#[command(name = "sheetfold")]
#[command(
    author,
    version,
    about = "Consolidate every sheet of an Excel workbook into one flat table"
)]
struct Cli {
    /// Input workbook (.xlsx, .xls); prompted for interactively when omitted
    input: Option<PathBuf>,

    /// 1-based row containing the column headers
    #[arg(long, default_value_t = 1)]
    header_row: u32,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if !(1..=MAX_HEADER_ROW).contains(&cli.header_row) {
        anyhow::bail!("header row must be between 1 and {MAX_HEADER_ROW}");
    }

    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    if !input.exists() {
        println!("❌ File not found. Please check the path.");
        return Ok(ExitCode::FAILURE);
    }

    let options = ConsolidateOptions {
        header_row: cli.header_row,
        output_dir: OutputDir::WorkingDir,
    };

    match consolidate(&input, &options) {
        Ok(summary) => {
            println!(
                "✅ Consolidated file saved as: {}",
                summary.output_path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("❌ Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("📂 Enter the path to your Excel file: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(PathBuf::from(line.trim()))
}
