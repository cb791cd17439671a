//! Command line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.codecompass.toml):
  Create this file in your project root to set defaults.

  [codecompass]
  exclude_folders = [\"generated\", \"vendor\"]
  order = \"score\"            # Default ordering (score, lines, alpha)
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "codecompass - Cyclomatic complexity and Halstead metrics for JavaScript/TypeScript",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute (cc, hal). Without one, runs the
    /// directory comparison analysis.
    pub command: Option<Commands>,

    /// Directories to analyze and compare.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output raw JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Output sections to print (aggregate, detailed, both).
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Folders to exclude from analysis.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Ordering function for function listings (score, lines, alpha).
    #[arg(long, short = 'o')]
    pub order: Option<String>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'O')]
    pub output_file: Option<String>,
}

#[derive(Subcommand, Debug)]
/// Available subcommands for specific metric calculations.
pub enum Commands {
    /// Calculate Cyclomatic Complexity per function
    Cc {
        /// Path to analyze.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output JSON.
        #[arg(long)]
        json: bool,

        /// Folders to exclude from analysis.
        #[arg(long, alias = "exclude-folder")]
        exclude_folders: Vec<String>,

        /// Show average complexity.
        #[arg(long, short = 'a')]
        average: bool,

        /// Show only the average complexity, no individual rows.
        #[arg(long)]
        total_average: bool,

        /// Ordering function (score, lines, alpha).
        #[arg(long, short = 'o')]
        order: Option<String>,

        /// Exit with code 1 if any function has complexity higher than this value.
        #[arg(long)]
        fail_threshold: Option<usize>,

        /// Write output to this file instead of stdout.
        #[arg(long, short = 'O')]
        output_file: Option<String>,
    },
    /// Calculate Halstead Metrics
    Hal {
        /// Path to analyze.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output JSON.
        #[arg(long)]
        json: bool,

        /// Folders to exclude from analysis.
        #[arg(long, alias = "exclude-folder")]
        exclude_folders: Vec<String>,

        /// Compute metrics on function level instead of per-file averages.
        #[arg(long, short = 'f')]
        functions: bool,

        /// Write output to this file instead of stdout.
        #[arg(long, short = 'O')]
        output_file: Option<String>,
    },
}
