//! Bincode snapshot persistence for the dictionary index.
//!
//! The index is built once from a corpus and reloaded from a snapshot on
//! later startups. Snapshots are written atomically: the bytes go to a
//! temporary file in the target directory which is then persisted over the
//! final path.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{MixspellError, Result};
use crate::spelling::index::DictionaryIndex;

/// Write the index to `path` atomically.
pub fn save(index: &DictionaryIndex, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, index)
        .map_err(|e| MixspellError::serialization(format!("{}: {e}", path.display())))?;

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Restore a previously saved index verbatim.
pub fn load(path: &Path) -> Result<DictionaryIndex> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    bincode::deserialize_from(reader)
        .map_err(|e| MixspellError::snapshot_corrupt(format!("{}: {e}", path.display())))
}

/// Load the index from `snapshot` if it exists, otherwise build it from
/// `corpus` and write the snapshot out.
///
/// Fails with [`MixspellError::CorpusMissing`] when neither resource is
/// available, and with [`MixspellError::SnapshotCorrupt`] when a snapshot
/// exists but cannot be deserialized.
pub fn load_or_build(
    snapshot: &Path,
    corpus: &Path,
    max_distance: usize,
    prefix_length: usize,
) -> Result<DictionaryIndex> {
    if snapshot.exists() {
        return load(snapshot);
    }

    if !corpus.exists() {
        return Err(MixspellError::corpus_missing(format!(
            "no snapshot at {} and no corpus at {}",
            snapshot.display(),
            corpus.display()
        )));
    }

    let text = fs::read_to_string(corpus)?;
    let index = DictionaryIndex::build(&text, max_distance, prefix_length);
    save(&index, snapshot)?;
    Ok(index)
}
