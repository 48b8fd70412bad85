use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "peptigen CLI - A command-line interface for surface-aware peptide candidate generation from protein structures.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate surface-aware peptide candidates from a protein structure.
    Suggest(SuggestArgs),
    /// Classify or export the solvent-exposed residues of one chain.
    Surface(SurfaceArgs),
}

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Path to the input protein structure file (.pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Target chain identifier.
    #[arg(short, long, value_name = "CHAIN")]
    pub chain: Option<char>,

    /// Candidate-generation strategy (OpenAI, Anthropic, Groq, Mistral).
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<String>,

    /// Number of peptide candidates to generate (at most 50).
    #[arg(short = 'n', long, value_name = "INT")]
    pub num_peptides: Option<usize>,

    /// Path to a precomputed per-residue SASA table
    /// (CSV with chain,residue_number,residue_name,sasa columns).
    #[arg(long, value_name = "PATH")]
    pub sasa: Option<PathBuf>,

    /// Exposure threshold in Å²; residues at or below it are excluded.
    #[arg(short = 't', long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// Path to a configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `surface` subcommand.
#[derive(Args, Debug)]
pub struct SurfaceArgs {
    /// Path to the precomputed per-residue SASA table
    /// (CSV with chain,residue_number,residue_name,sasa columns).
    #[arg(long, required = true, value_name = "PATH")]
    pub sasa: PathBuf,

    /// Target chain identifier.
    #[arg(short, long, value_name = "CHAIN")]
    pub chain: Option<char>,

    /// Exposure threshold in Å²; residues at or below it are excluded.
    /// Defaults to 0 for the classified table and 25 for --exposed.
    #[arg(short = 't', long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// Export the unclassified exposed-residue list instead of the
    /// classified surface table.
    #[arg(long)]
    pub exposed: bool,

    /// Table output format.
    #[arg(long, value_enum, default_value_t = TableFormat::Text)]
    pub format: TableFormat,

    /// Write the table to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Text,
    Json,
    Csv,
}
