pub mod batch;
pub mod error;

pub use batch::{DuplicateId, ValidatedBatch, validate_reader, validate_stream};
pub use error::{Field, Result, ValidationError};
