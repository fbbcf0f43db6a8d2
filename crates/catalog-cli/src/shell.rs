//! Interactive menu for loading and browsing a catalog.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, warn};

use catalog_core::Catalog;
use catalog_model::{CourseId, LoadOptions};

use crate::render::course_detail;

/// Menu entries. Any other positive number is "not a valid option".
const LOAD: u32 = 1;
const LIST: u32 = 2;
const SHOW: u32 = 3;
const EXIT: u32 = 9;

/// Menu loop state.
pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    options: LoadOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, options: LoadOptions) -> Self {
        Self {
            input,
            output,
            catalog: Catalog::new(),
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;
        while self.step()? {}
        Ok(())
    }

    /// Loads `path` as if chosen from the menu.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing output fails.
    pub fn load(&mut self, path: &Path) -> io::Result<()> {
        match self.catalog.load_path(path, &self.options) {
            Ok(summary) => {
                debug!(courses = summary.courses, height = summary.height, "shell load");
                writeln!(self.output, "{} loaded successfully!", path.display())
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "load rejected");
                writeln!(self.output, "{error}")
            }
        }
    }

    fn step(&mut self) -> io::Result<bool> {
        self.print_menu()?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        match parse_choice(&line) {
            None | Some(0) => writeln!(self.output, "Invalid input.")?,
            Some(LOAD) => {
                write!(self.output, "Please enter file name with extension: ")?;
                self.output.flush()?;
                let Some(path) = self.read_line()? else {
                    return Ok(false);
                };
                self.load(Path::new(&path))?;
            }
            Some(LIST) => self.print_list()?,
            Some(SHOW) => {
                if !self.print_course()? {
                    return Ok(false);
                }
            }
            Some(EXIT) => {
                writeln!(self.output, "Thank you for using the course planner!")?;
                return Ok(false);
            }
            Some(other) => writeln!(self.output, "{other} is not a valid option.")?,
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{LOAD}. Load Data Structure.")?;
        writeln!(self.output, "{LIST}. Print Course List.")?;
        writeln!(self.output, "{SHOW}. Print Course.")?;
        writeln!(self.output, "{EXIT}. Exit")?;
        writeln!(self.output)?;
        write!(self.output, "What would you like to do? ")?;
        self.output.flush()
    }

    fn print_list(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return writeln!(
                self.output,
                "No courses to display. Please load courses first."
            );
        }
        writeln!(self.output, "Here is a sample schedule:")?;
        writeln!(self.output)?;
        for course in self.catalog.courses() {
            writeln!(self.output, "{course}")?;
        }
        Ok(())
    }

    /// Returns false when input ended at the prompt.
    fn print_course(&mut self) -> io::Result<bool> {
        if self.catalog.is_empty() {
            writeln!(
                self.output,
                "No courses to search for. Please load courses first."
            )?;
            return Ok(true);
        }
        write!(self.output, "What course do you want to know about? ")?;
        self.output.flush()?;
        let Some(query) = self.read_line()? else {
            return Ok(false);
        };
        let id = CourseId::new(query);
        match self.catalog.find_id(&id) {
            Some(course) => writeln!(self.output, "{}", course_detail(course))?,
            None => writeln!(self.output, "{id} not found.")?,
        }
        Ok(true)
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Accepts a single non-negative integer, surrounding whitespace allowed.
pub fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}
