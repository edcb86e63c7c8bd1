//! CLI argument definitions using clap.

use cellreader::{DEFAULT_LEADING_COLUMNS, DEFAULT_SAMPLE_ROWS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CellReader: find Type and Marker columns in CSV exports
#[derive(Parser)]
#[command(name = "cellreader")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the files in a folder and whether they can be scanned
    Files {
        /// Folder containing the exported files
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,
    },

    /// Discover candidate columns and classify them as Type or Marker
    Markers {
        /// Folder containing the exported files
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Only scan these files (repeatable; default: every CSV file)
        #[arg(short = 'f', long = "file", value_name = "NAME")]
        files: Vec<String>,

        /// Number of leading metadata columns to skip
        #[arg(long, default_value_t = DEFAULT_LEADING_COLUMNS)]
        leading_columns: usize,

        /// Maximum rows sampled per file
        #[arg(long, default_value_t = DEFAULT_SAMPLE_ROWS)]
        sample_rows: usize,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}
