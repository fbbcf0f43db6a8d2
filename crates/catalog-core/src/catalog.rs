use std::io::Read;
use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, info_span};

use catalog_ingest::TokenStream;
use catalog_model::{Course, CourseId, LoadOptions, ShuffleMode};
use catalog_tree::{Iter, SearchTree};
use catalog_validate::{DuplicateId, ValidatedBatch, validate_reader, validate_stream};

use crate::error::Result;

/// Outcome of a successful load.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    /// Courses inserted, duplicates included.
    pub courses: usize,
    /// Height of the resulting tree.
    pub height: usize,
    pub shuffle: ShuffleMode,
    pub duplicates: Vec<DuplicateId>,
}

/// In-memory course catalog backed by a [`SearchTree`].
///
/// Loading is all-or-nothing: input is fully validated before the current
/// contents are touched, so a rejected file leaves the catalog as it was.
#[derive(Debug, Default)]
pub struct Catalog {
    tree: SearchTree<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Courses in ascending id order.
    pub fn courses(&self) -> Iter<'_, Course> {
        self.tree.iter()
    }

    /// Case-insensitive lookup by id. `None` means the id is not loaded.
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.find_id(&CourseId::new(id))
    }

    pub fn find_id(&self, id: &CourseId) -> Option<&Course> {
        self.tree.search(id)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Replaces the catalog contents with `courses`.
    ///
    /// The batch is assumed to be validated already; it is reordered
    /// according to `options.shuffle` and inserted one course at a time.
    pub fn load(&mut self, mut courses: Vec<Course>, options: &LoadOptions) -> LoadSummary {
        let start = Instant::now();
        self.tree.clear();
        shuffle_courses(&mut courses, options.shuffle);
        self.tree.extend(courses);
        let summary = LoadSummary {
            courses: self.tree.len(),
            height: self.tree.height(),
            shuffle: options.shuffle,
            duplicates: Vec::new(),
        };
        info!(
            courses = summary.courses,
            height = summary.height,
            shuffle = ?summary.shuffle,
            duration_ms = start.elapsed().as_millis(),
            "catalog loaded"
        );
        summary
    }

    pub fn load_batch(&mut self, batch: ValidatedBatch, options: &LoadOptions) -> LoadSummary {
        let ValidatedBatch {
            courses,
            duplicates,
        } = batch;
        let mut summary = self.load(courses, options);
        summary.duplicates = duplicates;
        summary
    }

    /// Validates the file at `path` and, if it passes, replaces the catalog
    /// contents with it.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`](crate::LoadError) when the file cannot be read
    /// or fails validation; the catalog is unchanged in that case.
    pub fn load_path(&mut self, path: &Path, options: &LoadOptions) -> Result<LoadSummary> {
        let span = info_span!("load", path = %path.display());
        let _guard = span.enter();
        let mut stream = TokenStream::open(path)?;
        let batch = validate_stream(&mut stream)?;
        debug!(courses = batch.len(), "validated catalog file");
        Ok(self.load_batch(batch, options))
    }

    /// Same as [`load_path`](Self::load_path) for any reader.
    ///
    /// # Errors
    ///
    /// See [`load_path`](Self::load_path).
    pub fn load_reader<R: Read>(
        &mut self,
        source_name: &str,
        reader: R,
        options: &LoadOptions,
    ) -> Result<LoadSummary> {
        let span = info_span!("load", source = source_name);
        let _guard = span.enter();
        let batch = validate_reader(source_name, reader)?;
        Ok(self.load_batch(batch, options))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses()
    }
}

/// Reorders `courses` in place according to `mode`.
pub fn shuffle_courses(courses: &mut [Course], mode: ShuffleMode) {
    match mode {
        ShuffleMode::Preserve => {}
        ShuffleMode::Seeded(seed) => courses.shuffle(&mut StdRng::seed_from_u64(seed)),
        ShuffleMode::Random => courses.shuffle(&mut rand::thread_rng()),
    }
}
