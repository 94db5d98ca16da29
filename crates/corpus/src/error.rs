use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Corpus has no meditations")]
    NoMeditations,
}
