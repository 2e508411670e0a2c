use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trnapair::core::io::delimited::Delimiter;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "trnapair - classify codon-anticodon pairings and estimate the tRNA concentration available to each codon.",
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

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every tRNA-codon pair as Watson-Crick cognate, wobble cognate or near-cognate.
    Classify(ClassifyArgs),
    /// Classify pairs and sum the tRNA concentration available to each codon per category.
    Concentrations(ConcentrationsArgs),
}

/// Input tables and configuration shared by every subcommand.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to the codon table (needs a `codon` and a `three.letter` column).
    #[arg(long, value_name = "PATH")]
    pub codons: Option<PathBuf>,

    /// Path to the tRNA table (needs an `anticodon` and a `three.letter` column).
    #[arg(long, value_name = "PATH")]
    pub trnas: Option<PathBuf>,

    /// Field delimiter of every table read or written.
    /// Inferred from each file's extension when omitted (.tsv/.txt are tab-separated).
    #[arg(long, value_enum, value_name = "DELIMITER")]
    pub delimiter: Option<DelimiterArg>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S aggregation.total-trna=200
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write every classified pair, one per line, to this file.
    #[arg(long, value_name = "PATH")]
    pub pairs: Option<PathBuf>,

    /// Write the three 0/1 pairing matrices as grids into this directory.
    #[arg(long, value_name = "DIR")]
    pub matrix_dir: Option<PathBuf>,
}

/// Arguments for the `concentrations` subcommand.
#[derive(Args, Debug)]
pub struct ConcentrationsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path for the per-codon concentration table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the tRNA table column holding relative abundances.
    #[arg(long, value_name = "NAME")]
    pub abundance_column: Option<String>,

    /// Override the total tRNA pool (micromolar) abundances are scaled to.
    #[arg(long, value_name = "FLOAT")]
    pub total_trna: Option<f64>,

    /// Also write every classified pair, one per line, to this file.
    #[arg(long, value_name = "PATH")]
    pub pairs: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterArg {
    Comma,
    Tab,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Tab => Delimiter::Tab,
        }
    }
}
