//! Implementation of the `routemap export` command.

use crate::colors;
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use routemap::introspection::{EndpointDescriptor, RouteTable, SkippedNode};
use serde::Serialize;

use super::load_table;

/// Smoke-test manifest written by `export`.
#[derive(Serialize)]
struct Export<'a> {
    generated_at: String,
    endpoints: &'a [EndpointDescriptor],
    skipped: &'a [SkippedNode],
}

fn render(table: &RouteTable, generated_at: String) -> Result<String, String> {
    let export = Export {
        generated_at,
        endpoints: table.endpoints(),
        skipped: table.skipped(),
    };
    serde_json::to_string_pretty(&export).map_err(|e| format!("Failed to serialize routes: {}", e))
}

/// Export the route table as JSON to stdout or a file.
pub fn execute(tree: &str, output: Option<String>) -> Result<(), String> {
    let table = load_table(tree)?;
    let json = render(&table, Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))
                .map_err(|e| format!("Failed to write {}: {}", path, e))?;
            println!(
                "{} Exported {} endpoint(s) to {}",
                "✓".custom_color(colors::green()),
                table.len(),
                path.custom_color(colors::sky())
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
