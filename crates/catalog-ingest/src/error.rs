use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reading the raw input, before any record is interpreted.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("error opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error: empty file: {source_name}")]
    EmptyInput { source_name: String },
    #[error("error reading {source_name} near line {line}: {source}")]
    Read {
        source_name: String,
        line: u64,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
