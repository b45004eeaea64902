mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use tabwriter::TabWriter;
use tracing::{debug, info};

use config::{Cli, Command};
use idfold_io::batch::{compact_lines, BatchReport, FoldSpec};
use idfold_io::json;
use idfold_io::prelude::*;

/// Compaction rejected the input. I/O failures exit with 1.
const EXIT_FOLD_ERROR: i32 = 2;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries results only.
    let env_filter = tracing_subscriber::EnvFilter::try_new(cli.log_filter())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    match cli.cmd {
        Command::Uuid16 { uuid } => print_or_exit(compact16(&uuid)),
        Command::Uuid8 { uuid } => print_or_exit(compact8(&uuid)),
        Command::Fold { hex, len } => {
            debug!(input_len = hex.len(), output_len = len, "folding hex");
            print_or_exit(fold_hex(&hex, len))
        }
        Command::Batch {
            path,
            width,
            len,
            json: as_json,
            min,
        } => {
            let spec = match len {
                Some(len) => FoldSpec::Hex(len),
                None => FoldSpec::Uuid(width.unwrap_or_default()),
            };

            let text = match read_input(path.as_deref()) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };

            let records = compact_lines(&text, spec);
            let report = BatchReport::new(spec, records);
            info!(mode = %report.mode, total = report.records.len(), failed = report.failed, "batch done");

            if as_json {
                let out = if min {
                    json::to_minified_json(&report)?
                } else {
                    json::to_pretty_json(&report)?
                };
                println!("{out}");
            } else {
                write_table(&report)?;
            }

            if report.failed > 0 {
                io::stdout().flush()?;
                process::exit(EXIT_FOLD_ERROR);
            }
        }
        Command::Gen { width, count } => {
            let width = width.unwrap_or_default();
            debug!(%width, count, "minting short ids");
            for _ in 0..count {
                println!("{}", short_id(width));
            }
        }
        Command::RandLetters { len } => {
            println!("{}", rand_letters(len));
        }
    }

    Ok(())
}

fn print_or_exit(result: Result<String, FoldError>) {
    match result {
        Ok(out) => println!("{out}"),
        Err(e) => {
            debug!(code = %e.code(), "compaction rejected");
            // Exact error string, stable for scripts.
            eprintln!("{e}");
            process::exit(EXIT_FOLD_ERROR);
        }
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p),
        _ => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

fn write_table(report: &BatchReport) -> io::Result<()> {
    let mut tw = TabWriter::new(io::stdout().lock());
    writeln!(tw, "input\toutput\terror")?;
    for r in &report.records {
        let output = r.output.as_deref().unwrap_or("-");
        let error = r.error.as_ref().map(|e| e.code.as_str()).unwrap_or("-");
        writeln!(tw, "{}\t{}\t{}", r.input, output, error)?;
    }
    tw.flush()
}
