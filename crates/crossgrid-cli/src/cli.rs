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
    about = "Crossgrid - Generate crossword grids by placing words where their letters intersect.",
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
    /// Place a list of words onto a square grid and print the puzzle with its hints.
    Generate(GenerateArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFormat {
    /// One `WORD:HINT` pair per line.
    Txt,
    /// CSV with `word` and `hint` columns.
    Csv,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Core Arguments ---
    /// Path to the word list.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Format of the word list. Inferred from the file extension when omitted.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<WordListFormat>,

    /// Write the rendered puzzle to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Generation Overrides ---
    /// Side length of the square grid.
    #[arg(short = 'n', long, value_name = "INT")]
    pub size: Option<usize>,

    /// Accept a first word that crosses nothing when the grid is still empty.
    #[arg(long)]
    pub seed_first_word: bool,

    // --- Output Overrides ---
    /// Render filled cells as blank slots instead of showing their letters.
    #[arg(long)]
    pub blank: bool,

    /// Write a CSV report of where each word was placed.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Render the puzzle even if the finished grid fails validation.
    #[arg(long)]
    pub allow_invalid: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.size=12
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
