//! Course catalog loading and querying.
//!
//! Data flows from a [`catalog_ingest::TokenStream`] through the batch
//! validator into a [`catalog_tree::SearchTree`]:
//!
//! ```ignore
//! let mut catalog = Catalog::new();
//! catalog.load_path(Path::new("courses.csv"), &LoadOptions::default())?;
//! for course in &catalog {
//!     println!("{course}");
//! }
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{Catalog, LoadSummary, shuffle_courses};
pub use error::{LoadError, Result};
