//! Rendering snapshots.

use catalog_cli::render::{Lookup, course_detail, course_lines, to_json};
use catalog_model::Course;

fn algorithms() -> Course {
    Course::new("CSCI300", "Introduction to Algorithms").with_prerequisites(["CSCI200", "MATH201"])
}

#[test]
fn detail_lists_prerequisites() {
    insta::assert_snapshot!(course_detail(&algorithms()), @r"
    CSCI300, Introduction to Algorithms
    Prerequisites: CSCI200, MATH201
    ");
}

#[test]
fn detail_without_prerequisites_says_none() {
    let course = Course::new("CSCI100", "Introduction to Computer Science");
    insta::assert_snapshot!(course_detail(&course), @r"
    CSCI100, Introduction to Computer Science
    Prerequisites: None
    ");
}

#[test]
fn lines_keep_iteration_order() {
    let courses = [
        Course::new("CSCI100", "Introduction to Computer Science"),
        algorithms(),
    ];
    assert_eq!(
        course_lines(&courses),
        "CSCI100, Introduction to Computer Science\nCSCI300, Introduction to Algorithms\n"
    );
    assert_eq!(course_lines(&[] as &[Course]), "");
}

#[test]
fn lookup_json_reports_found_and_missing() {
    let course = algorithms();
    let lookup = Lookup {
        found: vec![&course],
        missing: vec!["CSCI999".to_string()],
    };
    let json: serde_json::Value =
        serde_json::from_str(&to_json(&lookup).expect("serialize")).expect("valid json");
    assert_eq!(
        json,
        serde_json::json!({
            "found": [{
                "id": "CSCI300",
                "name": "Introduction to Algorithms",
                "prerequisites": ["CSCI200", "MATH201"]
            }],
            "missing": ["CSCI999"]
        })
    );
}
