//! Tests for catalog-model types.

use std::borrow::Borrow;

use catalog_model::{Course, CourseId, LoadOptions, ShuffleMode};

#[test]
fn course_display_is_id_and_name() {
    let course = Course::new("CSCI301", "Advanced Programming in C++");
    assert_eq!(course.to_string(), "CSCI301, Advanced Programming in C++");
}

#[test]
fn prerequisite_list_formats() {
    let none = Course::new("MATH201", "Discrete Mathematics");
    assert!(!none.has_prerequisites());
    assert_eq!(none.prerequisite_list(), "None");

    let some = Course::new("CSCI300", "Introduction to Algorithms")
        .with_prerequisites(["CSCI200", "MATH201"]);
    assert_eq!(some.prerequisite_list(), "CSCI200, MATH201");
}

#[test]
fn course_borrows_its_id() {
    let course = Course::new("CSCI100", "Introduction to Computer Science");
    let id: &CourseId = course.borrow();
    assert_eq!(id, &CourseId::new("csci100"));
}

#[test]
fn course_serializes_ids_as_strings() {
    let course = Course::new("CSCI200", "Data Structures").with_prerequisites(["CSCI101"]);
    let json = serde_json::to_value(&course).expect("serialize course");
    assert_eq!(
        json,
        serde_json::json!({
            "id": "CSCI200",
            "name": "Data Structures",
            "prerequisites": ["CSCI101"],
        })
    );
}

#[test]
fn course_deserializes_without_prerequisites() {
    let course: Course =
        serde_json::from_str(r#"{"id":"CSCI100","name":"Intro"}"#).expect("deserialize course");
    assert!(course.prerequisites.is_empty());
}

#[test]
fn default_shuffle_is_seeded() {
    assert_eq!(LoadOptions::default().shuffle, ShuffleMode::Seeded(0));
    assert_eq!(LoadOptions::preserve_order().shuffle, ShuffleMode::Preserve);
}

#[test]
fn shuffle_mode_serializes_lowercase() {
    let json = serde_json::to_string(&ShuffleMode::Random).expect("serialize mode");
    assert_eq!(json, "\"random\"");
    let json = serde_json::to_string(&ShuffleMode::Seeded(3)).expect("serialize mode");
    assert_eq!(json, r#"{"seeded":3}"#);
}
