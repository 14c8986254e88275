use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "nexp",
    version,
    about = "Export Sketch selections as a neutral component model for Noodl"
)]
pub struct Cli {
    /// Print progress details while exporting
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export a document snapshot's selection into an export directory
    Export {
        /// Path to the document snapshot JSON
        #[arg(long)]
        document: PathBuf,

        /// Export directory (defaults to a fresh directory under the
        /// configured export root or the system temp directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Pretty-print export.json
        #[arg(long)]
        pretty: bool,

        /// Format of the run summary
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputFormat,

        /// Write the run summary to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
