//! CLI argument definitions for the course catalog.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use catalog_model::{DEFAULT_SHUFFLE_SEED, LoadOptions, ShuffleMode};

#[derive(Parser)]
#[command(
    name = "course-catalog",
    version,
    about = "Course catalog - load a course file, list courses, look up prerequisites",
    long_about = "Load a comma-delimited course file and query it.\n\n\
                  Each line is `id,name,prereq1,prereq2,...`. The whole file is\n\
                  rejected if any prerequisite is not itself a course in the file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every course in ascending id order.
    List(ListArgs),

    /// Print one or more courses with their prerequisites.
    Show(ShowArgs),

    /// Validate a course file without printing its contents.
    Check(CheckArgs),

    /// Interactive menu (load, list, look up).
    Shell(ShellArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Course file to load.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    #[command(flatten)]
    pub load: LoadArgs,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Course file to load.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Course ids to look up (case-insensitive).
    #[arg(value_name = "COURSE_ID", required = true)]
    pub ids: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    #[command(flatten)]
    pub load: LoadArgs,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Course file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ShellArgs {
    /// Course file to load before the first prompt.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub load: LoadArgs,
}

/// Insertion-order options shared by every command that builds a catalog.
#[derive(Args, Clone, Copy)]
pub struct LoadArgs {
    /// Insert courses in file order.
    ///
    /// Sorted files then produce a degenerate tree with linear lookups.
    #[arg(long = "no-shuffle", conflicts_with_all = ["seed", "random_order"])]
    pub no_shuffle: bool,

    /// Seed for the insertion shuffle.
    #[arg(long = "seed", value_name = "SEED", default_value_t = DEFAULT_SHUFFLE_SEED)]
    pub seed: u64,

    /// Shuffle with a fresh random seed on every load.
    #[arg(long = "random-order", conflicts_with = "seed")]
    pub random_order: bool,
}

impl LoadArgs {
    pub fn load_options(&self) -> LoadOptions {
        let shuffle = if self.no_shuffle {
            ShuffleMode::Preserve
        } else if self.random_order {
            ShuffleMode::Random
        } else {
            ShuffleMode::Seeded(self.seed)
        };
        LoadOptions::new().with_shuffle(shuffle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// `ID, Name` lines.
    Text,
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
