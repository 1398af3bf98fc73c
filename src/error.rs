//! Error types for the mixspell library.
//!
//! All errors are represented by the [`MixspellError`] enum. Startup errors
//! (missing or unreadable resources) are fatal and abort before any
//! correction runs; per-token conditions such as an empty lookup result are
//! never errors and are handled by pass-through in the pipeline.

use std::io;

use thiserror::Error;

/// The main error type for mixspell operations.
#[derive(Error, Debug)]
pub enum MixspellError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Neither a dictionary snapshot nor a corpus file is available.
    #[error("Corpus missing: {0}")]
    CorpusMissing(String),

    /// A persisted dictionary snapshot could not be deserialized.
    #[error("Snapshot corrupt: {0}")]
    SnapshotCorrupt(String),

    /// The confusion-set resource for the Chinese corrector is absent.
    #[error("Confusion resource missing: {0}")]
    ConfusionResourceMissing(String),

    /// The Chinese correction collaborator could not process a request.
    #[error("External corrector unavailable: {0}")]
    ExternalCorrector(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MixspellError.
pub type Result<T> = std::result::Result<T, MixspellError>;

impl MixspellError {
    /// Create a new corpus-missing error.
    pub fn corpus_missing<S: Into<String>>(msg: S) -> Self {
        MixspellError::CorpusMissing(msg.into())
    }

    /// Create a new snapshot-corrupt error.
    pub fn snapshot_corrupt<S: Into<String>>(msg: S) -> Self {
        MixspellError::SnapshotCorrupt(msg.into())
    }

    /// Create a new confusion-resource-missing error.
    pub fn confusion_missing<S: Into<String>>(msg: S) -> Self {
        MixspellError::ConfusionResourceMissing(msg.into())
    }

    /// Create a new external-corrector error.
    pub fn external_corrector<S: Into<String>>(msg: S) -> Self {
        MixspellError::ExternalCorrector(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        MixspellError::Serialization(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MixspellError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MixspellError::corpus_missing("corpus.txt");
        assert_eq!(error.to_string(), "Corpus missing: corpus.txt");

        let error = MixspellError::snapshot_corrupt("dictionary.bin");
        assert_eq!(error.to_string(), "Snapshot corrupt: dictionary.bin");

        let error = MixspellError::confusion_missing("confusion.txt");
        assert_eq!(
            error.to_string(),
            "Confusion resource missing: confusion.txt"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = MixspellError::from(io_error);

        match error {
            MixspellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
