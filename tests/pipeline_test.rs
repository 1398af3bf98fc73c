//! End-to-end tests for the correction pipeline.

use std::fs;
use std::io::Write;

use mixspell::correct::chinese::{ChineseCorrector, ConfusionCorrector};
use mixspell::correct::pipeline::SentenceCorrector;
use mixspell::error::{MixspellError, Result};
use mixspell::segment::Script;
use mixspell::spelling::index::{DEFAULT_MAX_DISTANCE, DEFAULT_PREFIX_LENGTH, DictionaryIndex};
use mixspell::spelling::snapshot;
use tempfile::TempDir;

const DEMO_SENTENCE: &str = "今舔天氣好好，我想吃一個 Aple。";

/// Stub engine returning canned output, standing in for a real Chinese
/// correction service.
struct CannedCorrector;

impl ChineseCorrector for CannedCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        Ok(text.replace("今舔", "今天"))
    }
}

fn demo_index() -> DictionaryIndex {
    DictionaryIndex::build(
        "an apple a day keeps the doctor away apple pie is made from apple",
        DEFAULT_MAX_DISTANCE,
        DEFAULT_PREFIX_LENGTH,
    )
}

#[test]
fn demo_sentence_routes_runs_by_script() {
    let index = demo_index();
    let chinese = CannedCorrector;
    let corrector = SentenceCorrector::new(&index, &chinese).unwrap();

    let segments = corrector.segments(DEMO_SENTENCE);
    let scripts: Vec<Script> = segments.iter().map(|s| s.script).collect();
    assert_eq!(scripts, vec![Script::Han, Script::Latin, Script::Han]);
    assert_eq!(segments[1].text, " Aple");

    let corrected = corrector.correct(DEMO_SENTENCE).unwrap();
    assert_eq!(corrected, "今天天氣好好，我想吃一個 Apple。");
}

#[test]
fn demo_sentence_with_confusion_corrector() {
    let index = demo_index();
    let chinese = ConfusionCorrector::from_pairs([("今舔", "今天")]);
    let corrector = SentenceCorrector::new(&index, &chinese).unwrap();

    let corrected = corrector.correct(DEMO_SENTENCE).unwrap();
    assert_eq!(corrected, "今天天氣好好，我想吃一個 Apple。");
}

#[test]
fn snapshot_round_trip_feeds_the_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("dictionary.bin");

    snapshot::save(&demo_index(), &snapshot_path).unwrap();
    let index = snapshot::load(&snapshot_path).unwrap();

    let chinese = CannedCorrector;
    let corrector = SentenceCorrector::new(&index, &chinese).unwrap();
    assert_eq!(
        corrector.correct(DEMO_SENTENCE).unwrap(),
        "今天天氣好好，我想吃一個 Apple。"
    );
}

#[test]
fn startup_fails_before_any_correction_without_resources() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("dictionary.bin");
    let corpus_path = temp_dir.path().join("corpus.txt");

    let result = snapshot::load_or_build(
        &snapshot_path,
        &corpus_path,
        DEFAULT_MAX_DISTANCE,
        DEFAULT_PREFIX_LENGTH,
    );
    assert!(matches!(result, Err(MixspellError::CorpusMissing(_))));

    let result = ConfusionCorrector::from_file(temp_dir.path().join("confusion.txt"));
    assert!(matches!(
        result,
        Err(MixspellError::ConfusionResourceMissing(_))
    ));
}

#[test]
fn corrupt_snapshot_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("dictionary.bin");
    let corpus_path = temp_dir.path().join("corpus.txt");
    fs::write(&snapshot_path, b"\x00\xff garbage").unwrap();

    let result = snapshot::load_or_build(
        &snapshot_path,
        &corpus_path,
        DEFAULT_MAX_DISTANCE,
        DEFAULT_PREFIX_LENGTH,
    );
    assert!(matches!(result, Err(MixspellError::SnapshotCorrupt(_))));
}

#[test]
fn corpus_build_writes_reusable_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("dictionary.bin");
    let corpus_path = temp_dir.path().join("corpus.txt");

    let mut corpus = fs::File::create(&corpus_path).unwrap();
    writeln!(corpus, "apple pie, apple tart: an APPLE!").unwrap();

    let index = snapshot::load_or_build(
        &snapshot_path,
        &corpus_path,
        DEFAULT_MAX_DISTANCE,
        DEFAULT_PREFIX_LENGTH,
    )
    .unwrap();
    assert_eq!(index.dictionary().frequency("apple"), 3);

    let chinese = CannedCorrector;
    let corrector = SentenceCorrector::new(&index, &chinese).unwrap();
    assert_eq!(corrector.correct("吃一個 Aple。").unwrap(), "吃一個 Apple。");
}

#[test]
fn pass_through_tokens_survive_unchanged() {
    let index = demo_index();
    let chinese = CannedCorrector;
    let corrector = SentenceCorrector::new(&index, &chinese).unwrap();

    // Digit tokens never reach the dictionary; punctuation forms Han runs
    // the canned corrector leaves alone.
    assert_eq!(corrector.correct("123 4 5").unwrap(), "123 4 5");
    assert_eq!(corrector.correct("。。！").unwrap(), "。。！");
}
