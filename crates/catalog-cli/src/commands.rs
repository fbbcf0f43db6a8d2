use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use catalog_cli::render::{Lookup, course_detail, course_lines, course_table, to_json};
use catalog_cli::shell::Shell;
use catalog_core::Catalog;
use catalog_ingest::TokenStream;
use catalog_validate::validate_stream;

use crate::cli::{CheckArgs, ListArgs, OutputFormatArg, ShellArgs, ShowArgs};

fn load_catalog(path: &std::path::Path, options: &catalog_model::LoadOptions) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog
        .load_path(path, options)
        .with_context(|| format!("load {}", path.display()))?;
    Ok(catalog)
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let catalog = load_catalog(&args.file, &args.load.load_options())?;
    match args.format {
        OutputFormatArg::Text => print!("{}", course_lines(&catalog)),
        OutputFormatArg::Table => println!("{}", course_table(&catalog)),
        OutputFormatArg::Json => {
            let courses: Vec<_> = catalog.courses().collect();
            println!("{}", to_json(&courses).context("serialize courses")?);
        }
    }
    Ok(())
}

/// Returns whether every requested id was found.
pub fn run_show(args: &ShowArgs) -> Result<bool> {
    let catalog = load_catalog(&args.file, &args.load.load_options())?;
    let mut lookup = Lookup {
        found: Vec::new(),
        missing: Vec::new(),
    };
    for id in &args.ids {
        match catalog.find(id) {
            Some(course) => lookup.found.push(course),
            None => lookup.missing.push(id.clone()),
        }
    }
    match args.format {
        OutputFormatArg::Text => {
            for course in &lookup.found {
                println!("{}", course_detail(course));
            }
            for id in &lookup.missing {
                println!("{id} not found.");
            }
        }
        OutputFormatArg::Table => {
            println!("{}", course_table(lookup.found.iter().copied()));
            for id in &lookup.missing {
                eprintln!("{id} not found.");
            }
        }
        OutputFormatArg::Json => {
            println!("{}", to_json(&lookup).context("serialize lookup")?);
        }
    }
    Ok(lookup.missing.is_empty())
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let span = info_span!("check", path = %args.file.display());
    let _guard = span.enter();
    let mut stream = TokenStream::open(&args.file)?;
    let batch = validate_stream(&mut stream)?;
    info!(courses = batch.len(), "check passed");
    println!(
        "{}: {} courses, all prerequisites resolved",
        args.file.display(),
        batch.len()
    );
    for duplicate in &batch.duplicates {
        println!(
            "warning: {} on line {} duplicates line {}; the later entry is unreachable by lookup",
            duplicate.id, duplicate.line, duplicate.first_line
        );
    }
    Ok(())
}

pub fn run_shell(args: &ShellArgs) -> Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        info!("reading menu choices from non-terminal input");
    }
    let mut shell = Shell::new(stdin.lock(), io::stdout(), args.load.load_options());
    if let Some(path) = &args.file {
        shell.load(path).context("write output")?;
    }
    shell.run().context("interactive session")?;
    Ok(())
}
