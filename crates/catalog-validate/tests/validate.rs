//! Batch validation tests.

use std::io::Cursor;

use catalog_ingest::IngestError;
use catalog_model::CourseId;
use catalog_validate::{Field, ValidatedBatch, ValidationError, validate_reader};

fn validate(lines: &[&str]) -> Result<ValidatedBatch, ValidationError> {
    validate_reader("test", Cursor::new(lines.join("\n")))
}

#[test]
fn accepts_batch_with_resolved_prerequisites() {
    let batch = validate(&["CS101,Intro to CS", "CS201,Data Structures,CS101"]).expect("valid");

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.courses[0].id.as_str(), "CS101");
    assert!(batch.courses[0].prerequisites.is_empty());
    assert_eq!(batch.courses[1].name, "Data Structures");
    assert_eq!(batch.courses[1].prerequisites, vec![CourseId::new("CS101")]);
    assert!(batch.duplicates.is_empty());
}

#[test]
fn prerequisites_may_be_defined_later_in_the_file() {
    let batch = validate(&["CS300,Algorithms,CS200,MATH201", "CS200,Data Structures", "MATH201,Discrete Math"])
        .expect("forward references are allowed");
    assert_eq!(batch.len(), 3);
}

#[test]
fn preserves_input_order() {
    let batch = validate(&["Z9,Last", "A1,First", "M5,Middle"]).expect("valid");
    let ids: Vec<&str> = batch.courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["Z9", "A1", "M5"]);
}

#[test]
fn prerequisite_lookup_ignores_case() {
    let batch = validate(&["CS101,Intro", "CS201,Data Structures,cs101"]).expect("valid");
    assert_eq!(batch.courses[1].prerequisites[0].as_str(), "cs101");
}

#[test]
fn unknown_prerequisite_rejects_batch() {
    let error = validate(&["CS201,Data Structures,CS999"]).expect_err("unknown prerequisite");
    match &error {
        ValidationError::UnknownPrerequisite { line, prerequisite } => {
            assert_eq!(*line, 1);
            assert_eq!(prerequisite, "CS999");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(error.line(), Some(1));
    assert_eq!(
        error.to_string(),
        "error in input file (line 1): prerequisite `CS999` does not exist as a course"
    );
}

#[test]
fn first_failing_line_is_reported() {
    let error = validate(&["A,a", "B,b,X", "C,c,Y"]).expect_err("unknown prerequisite");
    assert_eq!(error.line(), Some(2));
}

#[test]
fn empty_name_is_rejected() {
    let error = validate(&["CS101,"]).expect_err("empty name");
    assert!(matches!(
        error,
        ValidationError::EmptyField {
            line: 1,
            field: Field::Name
        }
    ));
    assert_eq!(
        error.to_string(),
        "error in input file (line 1): empty name value"
    );
}

#[test]
fn empty_id_is_rejected() {
    let error = validate(&["CS101,Intro", ",Nameless"]).expect_err("empty id");
    assert!(matches!(
        error,
        ValidationError::EmptyField {
            line: 2,
            field: Field::Id
        }
    ));
}

#[test]
fn trailing_empty_prerequisite_is_unknown() {
    let error = validate(&["CS101,Intro,"]).expect_err("empty prerequisite");
    match error {
        ValidationError::UnknownPrerequisite { line, prerequisite } => {
            assert_eq!(line, 1);
            assert_eq!(prerequisite, "");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_prerequisite_resolves_against_empty_id() {
    // The empty id satisfies the reference check, then fails the field check.
    let error = validate(&[",Nameless", "CS101,Intro,"]).expect_err("empty id");
    assert!(matches!(
        error,
        ValidationError::EmptyField {
            line: 1,
            field: Field::Id
        }
    ));
}

#[test]
fn single_field_line_is_malformed() {
    let error = validate(&["CS101,Intro", "CS102"]).expect_err("malformed");
    assert!(matches!(error, ValidationError::MalformedLine { line: 2 }));
    assert_eq!(
        error.to_string(),
        "error in input file (line 2): not enough values in line"
    );
}

#[test]
fn blank_lines_are_skipped_but_counted() {
    let batch = validate(&["A,a", "", "B,b,A", ""]).expect("valid");
    assert_eq!(batch.len(), 2);

    let error = validate(&["A,a", "", "", "B"]).expect_err("malformed");
    assert_eq!(error.line(), Some(4));
}

#[test]
fn duplicates_are_reported_not_rejected() {
    let batch = validate(&["CS101,Intro", "cs101,Intro again"]).expect("valid");
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.duplicates.len(), 1);
    assert_eq!(batch.duplicates[0].first_line, 1);
    assert_eq!(batch.duplicates[0].line, 2);
}

#[test]
fn empty_input_is_an_ingest_error() {
    let error = validate_reader("empty", Cursor::new("")).expect_err("empty input");
    assert!(matches!(
        error,
        ValidationError::Ingest(IngestError::EmptyInput { .. })
    ));
    assert_eq!(error.line(), None);
}

#[test]
fn only_blank_lines_is_an_empty_batch() {
    let batch = validate_reader("blank", Cursor::new("\n\n")).expect("valid");
    assert!(batch.is_empty());
}
