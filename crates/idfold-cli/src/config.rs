use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use idfold_io::prelude::UuidWidth;

#[derive(Debug, Parser)]
#[command(name = "idfold", version, about = "Deterministic identifier compaction")]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "IDFOLD_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compact a UUID to 16 hex characters.
    Uuid16 {
        uuid: String,
    },
    /// Compact a UUID to 8 hex characters.
    Uuid8 {
        uuid: String,
    },
    /// XOR-fold a hex string to a shorter hex string.
    Fold {
        /// Even-length hex input
        hex: String,
        /// Output length in hex characters (even, proper divisor of the input length)
        #[arg(long)]
        len: usize,
    },
    /// Compact every line of a file (or stdin).
    Batch {
        /// Input path; `-` or absent reads stdin
        path: Option<PathBuf>,
        /// UUID preset width (16 or 8)
        #[arg(long, env = "IDFOLD_WIDTH")]
        width: Option<UuidWidth>,
        /// Fold raw hex lines to this many characters instead of using a UUID preset
        #[arg(long)]
        len: Option<usize>,
        /// Emit a JSON report instead of a table
        #[arg(long)]
        json: bool,
        /// Minify JSON output
        #[arg(long, requires = "json")]
        min: bool,
    },
    /// Mint short ids from fresh random UUIDs.
    Gen {
        /// UUID preset width (16 or 8)
        #[arg(long, env = "IDFOLD_WIDTH")]
        width: Option<UuidWidth>,
        /// How many ids to print
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Print a random string of ASCII letters.
    RandLetters {
        len: usize,
    },
}

impl Cli {
    /// Effective log filter after applying `-v` flags.
    pub fn log_filter(&self) -> &str {
        match self.verbose {
            0 => self.log_level.as_str(),
            1 => "debug",
            _ => "trace",
        }
    }
}
