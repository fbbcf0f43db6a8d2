//! Text, table and JSON rendering of courses.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use catalog_model::Course;

/// `ID, Name` followed by the prerequisite line.
pub fn course_detail(course: &Course) -> String {
    format!(
        "{course}\nPrerequisites: {}",
        course.prerequisite_list()
    )
}

/// One `ID, Name` line per course.
pub fn course_lines<'a, I>(courses: I) -> String
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut out = String::new();
    for course in courses {
        out.push_str(&course.to_string());
        out.push('\n');
    }
    out
}

pub fn course_table<'a, I>(courses: I) -> Table
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Course"),
        header_cell("Name"),
        header_cell("Prerequisites"),
    ]);
    apply_table_style(&mut table);
    for course in courses {
        let prerequisites = if course.has_prerequisites() {
            Cell::new(course.prerequisite_list())
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(course.id.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&course.name),
            prerequisites,
        ]);
    }
    table
}

#[derive(Debug, Serialize)]
pub struct Lookup<'a> {
    pub found: Vec<&'a Course>,
    pub missing: Vec<String>,
}

/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
