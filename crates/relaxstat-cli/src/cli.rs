use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Replicate Simulation contributors",
    version,
    about = "relaxstat - Summarize Rosetta relax runs and compare groups of runs against a baseline.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S compare.top-n=20
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the runs of one relax directory by score and write its summary table.
    Summarize(SummarizeArgs),
    /// Compare one summary column across group directories against a baseline group.
    Compare(CompareArgs),
}

/// Arguments for the `summarize` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    /// Directory holding one subdirectory per relax run.
    #[arg(short, long, alias = "relax_dir", required = true, value_name = "DIR")]
    pub relax_dir: PathBuf,

    /// Number of best-scoring models to keep.
    #[arg(short, long, value_name = "INT")]
    pub nmodels: Option<usize>,

    /// Output path for the summary table. Defaults to <relax-dir>/summary.csv.
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Name of the log file inside each run directory.
    #[arg(long, value_name = "NAME")]
    pub log_name: Option<String>,

    /// Model files start with this prefix.
    #[arg(long, value_name = "PREFIX")]
    pub model_prefix: Option<String>,

    /// Model files end with this suffix.
    #[arg(long, value_name = "SUFFIX")]
    pub model_suffix: Option<String>,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Directory holding one subdirectory per group.
    #[arg(short = 'd', long, alias = "root_dir", default_value = ".", value_name = "DIR")]
    pub root_dir: PathBuf,

    /// Directory for the comparison chart.
    #[arg(short = 'p', long, alias = "out_plots", default_value = "./plots", value_name = "DIR")]
    pub out_plots: PathBuf,

    /// Write the raw per-group values to this CSV.
    #[arg(long, alias = "raw_intE", value_name = "PATH")]
    pub raw_inte: Option<PathBuf>,

    /// Write the baseline comparison statistics to this CSV.
    #[arg(long, alias = "stats_vs_relax", value_name = "PATH")]
    pub stats_vs_relax: Option<PathBuf>,

    /// Accepted for compatibility; ignored.
    #[arg(long, alias = "raw_ddg", value_name = "PATH", hide = true)]
    pub raw_ddg: Option<PathBuf>,

    /// Accepted for compatibility; ignored.
    #[arg(long, alias = "raw_custom", value_name = "PATH", hide = true)]
    pub raw_custom: Option<PathBuf>,

    /// Number of best-ranked rows taken from each group.
    #[arg(short = 'n', long, value_name = "INT")]
    pub top_n: Option<usize>,

    /// Name of the baseline group directory.
    #[arg(long, value_name = "NAME")]
    pub baseline: Option<String>,

    /// Summary column to compare.
    #[arg(long, value_name = "COLUMN")]
    pub column: Option<String>,

    /// Summary column used to pick the best rows.
    #[arg(long, value_name = "COLUMN")]
    pub rank_column: Option<String>,

    /// Skip the comparison chart.
    #[arg(long)]
    pub no_plot: bool,
}
