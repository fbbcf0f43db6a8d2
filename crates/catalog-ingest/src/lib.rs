pub mod error;
pub mod token_stream;

pub use error::{IngestError, Result};
pub use token_stream::{LineState, StreamState, TokenStream};
