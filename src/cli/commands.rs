//! Command implementations for the mixspell CLI.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::cli::args::{BuildDictArgs, Command, CorrectArgs, MixspellArgs, OutputFormat};
use crate::correct::chinese::ConfusionCorrector;
use crate::correct::pipeline::SentenceCorrector;
use crate::error::{MixspellError, Result};
use crate::segment::Segment;
use crate::spelling::index::{DEFAULT_MAX_DISTANCE, DEFAULT_PREFIX_LENGTH, DictionaryIndex};
use crate::spelling::snapshot;

/// JSON-serializable result of a correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub original: String,
    pub segments: Vec<Segment>,
    pub corrected: String,
}

/// JSON-serializable result of a build-dict command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildReport {
    pub snapshot: String,
    pub terms: usize,
    pub total_frequency: u64,
}

/// Execute a CLI command.
pub fn execute_command(args: MixspellArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_sentence(correct_args.clone(), &args),
        Command::BuildDict(build_args) => build_dictionary(build_args.clone(), &args),
    }
}

/// Run one sentence through the pipeline and print the result.
fn correct_sentence(args: CorrectArgs, cli_args: &MixspellArgs) -> Result<()> {
    let index = snapshot::load_or_build(
        &args.snapshot,
        &args.corpus,
        DEFAULT_MAX_DISTANCE,
        DEFAULT_PREFIX_LENGTH,
    )?;
    let chinese = ConfusionCorrector::from_file(&args.confusion)?;

    let corrector = SentenceCorrector::new(&index, &chinese)?;
    let segments = corrector.segments(&args.sentence);
    let corrected = corrector.correct(&args.sentence)?;

    let report = CorrectionReport {
        original: args.sentence,
        segments,
        corrected,
    };

    match cli_args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if cli_args.verbosity() > 0 {
                println!("Original:  {}", report.original);
                for segment in &report.segments {
                    println!("  [{:?}] {:?}", segment.script, segment.text);
                }
            }
            println!("Corrected: {}", report.corrected);
        }
    }

    Ok(())
}

/// Build the dictionary index from a corpus and write the snapshot.
fn build_dictionary(args: BuildDictArgs, cli_args: &MixspellArgs) -> Result<()> {
    if !args.corpus.exists() {
        return Err(MixspellError::corpus_missing(
            args.corpus.display().to_string(),
        ));
    }

    let text = fs::read_to_string(&args.corpus)?;
    let index = DictionaryIndex::build(&text, args.max_distance, args.prefix_length);
    snapshot::save(&index, &args.out)?;

    let report = BuildReport {
        snapshot: args.out.display().to_string(),
        terms: index.word_count(),
        total_frequency: index.dictionary().total_frequency(),
    };

    match cli_args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!(
                "Wrote {} terms ({} occurrences) to {}",
                report.terms, report.total_frequency, report.snapshot
            );
            if cli_args.verbosity() > 1 {
                for (term, frequency) in index.dictionary().most_frequent(20) {
                    println!("  {term} {frequency}");
                }
            }
        }
    }

    Ok(())
}
