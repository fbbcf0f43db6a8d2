use std::fmt;

use thiserror::Error;

use catalog_ingest::IngestError;

/// Required field of a catalog line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => f.write_str("id"),
            Self::Name => f.write_str("name"),
        }
    }
}

/// Reason a batch was rejected. One error aborts the whole batch.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("error in input file (line {line}): not enough values in line")]
    MalformedLine { line: u64 },
    #[error(
        "error in input file (line {line}): prerequisite `{prerequisite}` does not exist as a course"
    )]
    UnknownPrerequisite { line: u64, prerequisite: String },
    #[error("error in input file (line {line}): empty {field} value")]
    EmptyField { line: u64, field: Field },
}

impl ValidationError {
    /// Input line the error refers to, when it refers to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Ingest(IngestError::Read { line, .. }) => Some(*line),
            Self::Ingest(_) => None,
            Self::MalformedLine { line }
            | Self::UnknownPrerequisite { line, .. }
            | Self::EmptyField { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
