use thiserror::Error;

use catalog_ingest::IngestError;
use catalog_validate::ValidationError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Validation(ValidationError),
}

impl From<ValidationError> for LoadError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::Ingest(inner) => Self::Ingest(inner),
            other => Self::Validation(other),
        }
    }
}

impl LoadError {
    /// True for failures reading the input rather than interpreting it.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Ingest(_))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Ingest(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
