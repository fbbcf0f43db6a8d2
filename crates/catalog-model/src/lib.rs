pub mod course;
pub mod id;
pub mod lookup;
pub mod options;

pub use course::Course;
pub use id::CourseId;
pub use lookup::CourseIdSet;
pub use options::{DEFAULT_SHUFFLE_SEED, LoadOptions, ShuffleMode};
