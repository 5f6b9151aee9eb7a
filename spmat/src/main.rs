use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use spmat::{render, run, OutputFormat, ParseConfig, RunRequest, ZeroEntries};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "Add, subtract or multiply two sparse integer matrices stored as text files"
)]
struct Cli {
    /// Operation to perform: add, subtract or multiply (prompted if omitted)
    operation: Option<String>,

    /// First matrix file (prompted if omitted)
    matrix1: Option<PathBuf>,

    /// Second matrix file (prompted if omitted)
    matrix2: Option<PathBuf>,

    /// Output format of the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject entries outside the declared rows/cols
    #[arg(long)]
    strict_bounds: bool,

    /// Reject zero-valued entries instead of dropping them
    #[arg(long)]
    reject_zero_entries: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let matrix1 = match cli.matrix1 {
        Some(path) => path,
        None => prompt("Enter path for first sparse matrix file: ")?.into(),
    };
    let matrix2 = match cli.matrix2 {
        Some(path) => path,
        None => prompt("Enter path for second sparse matrix file: ")?.into(),
    };
    let operation = match cli.operation {
        Some(operation) => operation,
        None => prompt("Enter the operation to perform (add, subtract, multiply): ")?,
    };

    let zero_entries = if cli.reject_zero_entries {
        ZeroEntries::Reject
    } else {
        ZeroEntries::Normalize
    };
    let parse = ParseConfig::default()
        .with_bounds_check(cli.strict_bounds)
        .with_zero_entries(zero_entries);
    debug!("Parse configuration: {parse:?}");

    let request = RunRequest::new(matrix1, matrix2, operation).with_parse_config(parse);
    let result = run(&request)?;

    println!("{}", render(&result, cli.format)?);
    Ok(())
}

/// Ask for one line on stdin, prompting on stderr so stdout stays clean
fn prompt(message: &str) -> Result<String> {
    let mut stderr = io::stderr();
    stderr.write_all(message.as_bytes())?;
    stderr.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    if read == 0 {
        anyhow::bail!("standard input closed before a value was entered");
    }

    Ok(line.trim().to_string())
}
