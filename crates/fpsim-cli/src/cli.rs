use clap::{Parser, ValueEnum};
use fpsim::core::io::InputFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "fpsim - Descriptive statistics of pairwise Tanimoto similarity for two molecular fingerprint encodings.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the molecule set: a JSON array of records, or a CSV file with a header row.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input file format. Detected from the file extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub input_format: Option<InputFormatArg>,

    /// Output format for the statistics report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the record field holding the primary fingerprint (default: new_fp).
    #[arg(long, value_name = "NAME")]
    pub primary_field: Option<String>,

    /// Override the record field holding the comparison fingerprint (default: morgan_fp).
    #[arg(long, value_name = "NAME")]
    pub comparison_field: Option<String>,

    /// Compare fingerprints of unequal length over their common prefix instead of failing.
    #[arg(long)]
    pub lenient_length: bool,

    /// Score a pair of all-zero fingerprints as 0.0 instead of failing.
    #[arg(long)]
    pub empty_as_zero: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S similarity.empty-policy=zero
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Hide the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable blocks, one per fingerprint kind.
    Text,
    /// The full report as a JSON document.
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormatArg {
    Json,
    Csv,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Json => InputFormat::Json,
            InputFormatArg::Csv => InputFormat::Csv,
        }
    }
}
