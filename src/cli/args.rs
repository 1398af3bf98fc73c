//! Command line argument parsing for the mixspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Demonstration sentence used when no input is given.
pub const DEMO_SENTENCE: &str = "今舔天氣好好，我想吃一個 Aple。";

/// Mixspell - spelling correction for mixed Chinese-English text
#[derive(Parser, Debug, Clone)]
#[command(name = "mixspell")]
#[command(about = "Spelling correction for mixed Chinese-English text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MixspellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MixspellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a sentence of mixed Chinese-English text
    Correct(CorrectArgs),

    /// Build the dictionary snapshot from a corpus
    #[command(name = "build-dict")]
    BuildDict(BuildDictArgs),
}

/// Arguments for sentence correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Sentence to correct
    #[arg(value_name = "SENTENCE", default_value = DEMO_SENTENCE)]
    pub sentence: String,

    /// Path to the dictionary snapshot
    #[arg(long, value_name = "PATH", default_value = "dictionary.bin")]
    pub snapshot: PathBuf,

    /// Path to the corpus used when no snapshot exists yet
    #[arg(long, value_name = "PATH", default_value = "corpus.txt")]
    pub corpus: PathBuf,

    /// Path to the confusion-set resource for the Chinese corrector
    #[arg(long, value_name = "PATH", default_value = "confusion.txt")]
    pub confusion: PathBuf,
}

/// Arguments for dictionary building
#[derive(Parser, Debug, Clone)]
pub struct BuildDictArgs {
    /// Path to the UTF-8 corpus file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Where to write the dictionary snapshot
    #[arg(short, long, value_name = "PATH", default_value = "dictionary.bin")]
    pub out: PathBuf,

    /// Maximum edit distance the index supports
    #[arg(long, default_value_t = 2)]
    pub max_distance: usize,

    /// Prefix length bounding delete-variant generation
    #[arg(long, default_value_t = 7)]
    pub prefix_length: usize,
}
