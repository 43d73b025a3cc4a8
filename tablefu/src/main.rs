//! # tablefu
//!
//! A CLI tool for sorting, filtering, faceting and rendering delimited tables.
//!
//! ## Overview
//!
//! tablefu is built on top of tablefulib. It reads a CSV file (or stdin),
//! applies the requested operations and prints the result as CSV, HTML or JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Render a CSV file as HTML
//! tablefu books.csv --format html
//!
//! # Only some columns, sorted descending by author
//! tablefu books.csv --columns Author,Style --sort Author --reverse
//!
//! # Rows matching every filter
//! tablefu books.csv --filter Style=Modernism --filter Author="James Joyce"
//!
//! # One table per distinct value, or a total per group
//! tablefu books.csv --facet Style
//! tablefu books.csv --facet Style --total "Number of Pages"
//!
//! # Formatting, styles and the initial sort from a JSON file
//! tablefu books.csv --config table.json --format html
//! ```
//!
//! Operations run in a fixed order: config, filters, sort, columns.

mod render;

use std::fs::File;
use std::io;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Style;
use tablefulib::{Dialect, Table, TableOptions};
use tracing::Level;

use render::{render_facets, render_table, render_total, OutputFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tablefu")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Chris Amico")
        .about("Sort, filter, facet and render delimited tables")
        .arg(
            Arg::new("path")
                .help("CSV file to read, or - for stdin")
                .default_value("-"),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .value_delimiter(',')
                .help("Columns to show, in order (comma-separated)"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .help("Sort rows by a column"),
        )
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .action(ArgAction::SetTrue)
                .help("Sort in descending order"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .action(ArgAction::Append)
                .value_name("COLUMN=VALUE")
                .help("Keep rows where COLUMN equals VALUE (can be specified multiple times)"),
        )
        .arg(
            Arg::new("facet")
                .long("facet")
                .help("Split into one table per distinct value of a column"),
        )
        .arg(
            Arg::new("total")
                .long("total")
                .help("Print the sum of a numeric column"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["csv", "html", "json"])
                .default_value("csv")
                .help("Output format"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("JSON file with table options (columns, formatting, style, sorted_by, dialect)"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .value_parser(value_parser!(char))
                .help("Field delimiter for input and output"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log table operations to stderr"),
        )
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Load `--config` and apply the flags that override it
fn build_options(matches: &ArgMatches) -> anyhow::Result<TableOptions> {
    let mut options = match matches.get_one::<String>("config") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open config {path}"))?;
            serde_json::from_reader(file).with_context(|| format!("invalid config {path}"))?
        }
        None => TableOptions::new(),
    };

    if let Some(delimiter) = matches.get_one::<char>("delimiter") {
        if !delimiter.is_ascii() {
            bail!("delimiter must be an ASCII character, got {delimiter:?}");
        }
        options.dialect = Dialect {
            delimiter: *delimiter as u8,
            ..options.dialect
        };
    }
    Ok(options)
}

/// Split `COLUMN=VALUE` filter arguments
fn extract_filters(matches: &ArgMatches) -> anyhow::Result<Vec<(String, String)>> {
    matches
        .get_many::<String>("filter")
        .map(|v| v.collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .map(|arg| match arg.split_once('=') {
            Some((column, value)) => Ok((column.to_string(), value.to_string())),
            None => bail!("filter '{arg}' should look like COLUMN=VALUE"),
        })
        .collect()
}

fn load_table(path: &str, options: TableOptions) -> anyhow::Result<Table> {
    if path == "-" {
        return Ok(Table::from_reader(io::stdin().lock(), options)?);
    }
    Table::from_path(path, options).with_context(|| format!("cannot load table from {path}"))
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("csv")
        .parse()?;

    let options = build_options(matches)?;
    let mut table = load_table(path, options)?;

    let filters = extract_filters(matches)?;
    if !filters.is_empty() {
        table = table.filter_by(filters)?;
    }

    let sort = matches.get_one::<String>("sort");
    let reverse = matches.get_flag("reverse");
    if sort.is_some() || reverse {
        table.sort(sort.map(|s| s.as_str()), reverse)?;
    }

    if let Some(columns) = matches.get_many::<String>("columns") {
        table.set_columns(columns.cloned());
    }

    let total = matches.get_one::<String>("total").map(|s| s.as_str());
    match (matches.get_one::<String>("facet"), total) {
        (Some(column), total) => {
            let facets = table.facet_by(column)?;
            render_facets(&facets, format, total)
        }
        (None, Some(column)) => render_total(&table, column),
        (None, None) => render_table(&table, format),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", Style::new().red().bold().apply_to("Error:"), e);
            ExitCode::FAILURE
        }
    }
}
