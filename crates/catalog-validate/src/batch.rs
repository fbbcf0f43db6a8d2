//! All-or-nothing validation of a catalog batch.
//!
//! ## Rules
//!
//! - Every non-blank line needs at least an id and a name → `MalformedLine`
//! - Every prerequisite must be the id of some course in the batch →
//!   `UnknownPrerequisite`
//! - Id and name must not be empty → `EmptyField`
//!
//! The first pass builds candidates while reading; referential checks need
//! the complete id set and run in a second pass once the stream is drained.

use std::io::{BufRead, BufReader, Read};

use tracing::{debug, warn};

use catalog_ingest::TokenStream;
use catalog_model::{Course, CourseId, CourseIdSet};

use crate::error::{Field, Result, ValidationError};

/// A course id defined on more than one line.
///
/// The later definition stays in the batch; once inserted into the tree it is
/// shadowed by the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub id: CourseId,
    pub first_line: u64,
    pub line: u64,
}

/// Courses that passed validation, in input order.
#[derive(Debug, Clone, Default)]
pub struct ValidatedBatch {
    pub courses: Vec<Course>,
    pub duplicates: Vec<DuplicateId>,
}

impl ValidatedBatch {
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }
}

struct Candidate {
    line: u64,
    course: Course,
}

/// Drains `stream` and validates every course it describes.
///
/// # Errors
///
/// Returns the first violation found. Nothing is returned for a batch with
/// any violation.
pub fn validate_stream<R: BufRead>(stream: &mut TokenStream<R>) -> Result<ValidatedBatch> {
    let mut candidates = Vec::new();
    let mut seen = CourseIdSet::new();
    let mut duplicates = Vec::new();

    while stream.has_more_lines() {
        stream.next_line()?;
        if !stream.has_more_tokens() {
            continue;
        }
        let line = stream.line_number();

        let id = stream.next_token();
        if let Some(first_line) = seen.insert(&id, line) {
            warn!(
                course_id = %id,
                first_line,
                line,
                "duplicate course id; later definition will be shadowed"
            );
            duplicates.push(DuplicateId {
                id: CourseId::new(id.clone()),
                first_line,
                line,
            });
        }

        if !stream.has_more_tokens() {
            return Err(ValidationError::MalformedLine { line });
        }
        let name = stream.next_token();

        let mut prerequisites = Vec::new();
        while stream.has_more_tokens() {
            prerequisites.push(CourseId::new(stream.next_token()));
        }

        candidates.push(Candidate {
            line,
            course: Course {
                id: CourseId::new(id),
                name,
                prerequisites,
            },
        });
    }

    check_candidates(&candidates, &seen)?;
    debug!(
        source = stream.source_name(),
        courses = candidates.len(),
        duplicates = duplicates.len(),
        "batch validated"
    );

    Ok(ValidatedBatch {
        courses: candidates.into_iter().map(|c| c.course).collect(),
        duplicates,
    })
}

/// Validates text from any reader. `source_name` is used in messages only.
///
/// # Errors
///
/// See [`validate_stream`]; also fails when the reader is empty.
pub fn validate_reader<R: Read>(source_name: &str, reader: R) -> Result<ValidatedBatch> {
    let mut stream = TokenStream::from_buf_read(source_name, BufReader::new(reader))?;
    validate_stream(&mut stream)
}

fn check_candidates(candidates: &[Candidate], seen: &CourseIdSet) -> Result<()> {
    for candidate in candidates {
        let course = &candidate.course;
        if let Some(missing) = course
            .prerequisites
            .iter()
            .find(|prerequisite| !seen.contains(prerequisite.as_str()))
        {
            return Err(ValidationError::UnknownPrerequisite {
                line: candidate.line,
                prerequisite: missing.to_string(),
            });
        }
        if course.id.is_empty() {
            return Err(ValidationError::EmptyField {
                line: candidate.line,
                field: Field::Id,
            });
        }
        if course.name.is_empty() {
            return Err(ValidationError::EmptyField {
                line: candidate.line,
                field: Field::Name,
            });
        }
    }
    Ok(())
}
