//! Output rendering for the CLI

use std::str::FromStr;

use serde_json::{Map, Value as Json};
use tablefulib::Table;

/// Export format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow::anyhow!("unknown output format '{other}'")),
        }
    }
}

/// Render one table in the chosen format, always ending with a newline
pub fn render_table(table: &Table, format: OutputFormat) -> anyhow::Result<String> {
    let mut out = match format {
        OutputFormat::Html => table.to_html()?,
        OutputFormat::Csv => table.to_csv()?,
        OutputFormat::Json => table.to_json()?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// `{column}: {sum}`
pub fn render_total(table: &Table, column: &str) -> anyhow::Result<String> {
    Ok(format!("{}: {}\n", column, table.total(column)?))
}

/// Render facets one after another, each preceded by a `# {value}` line.
///
/// With a total column, each facet shows its total instead of its rows. JSON
/// output is a single object keyed by facet value, in facet order.
pub fn render_facets(
    facets: &[Table],
    format: OutputFormat,
    total: Option<&str>,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        let mut object = Map::new();
        for facet in facets {
            let value = match total {
                Some(column) => Json::from(facet.total(column)?),
                None => serde_json::to_value(facet.to_dict()?)?,
            };
            object.insert(facet_label(facet), value);
        }
        return Ok(format!("{}\n", serde_json::to_string_pretty(&object)?));
    }

    let mut out = String::new();
    for facet in facets {
        out.push_str(&format!("# {}\n", facet_label(facet)));
        match total {
            Some(column) => out.push_str(&render_total(facet, column)?),
            None => out.push_str(&render_table(facet, format)?),
        }
    }
    Ok(out)
}

fn facet_label(facet: &Table) -> String {
    facet
        .faceted_on()
        .map(ToString::to_string)
        .unwrap_or_default()
}
