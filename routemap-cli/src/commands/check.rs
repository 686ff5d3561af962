//! Implementation of the `routemap check` command.

use crate::colors;
use crate::manifest::{self, Expectation};
use colored::Colorize;
use routemap::introspection::RouteTable;

use super::{load_table, print_skipped};

/// Check that every route in the manifest is registered.
pub fn execute(tree: &str, manifest_path: &str) -> Result<(), String> {
    let table = load_table(tree)?;
    let expected = manifest::load(manifest_path)?;

    println!();
    println!(
        "{} Checking {} expected route(s) from {}",
        "INFO".custom_color(colors::blue()).bold(),
        expected.len(),
        manifest_path.custom_color(colors::sky())
    );
    println!();

    let missing = report(&table, &expected);

    if !table.skipped().is_empty() {
        println!();
        print_skipped(&table);
    }

    println!();
    if missing.is_empty() {
        println!(
            "{} All expected routes are registered.",
            "✓".custom_color(colors::green()).bold()
        );
        Ok(())
    } else {
        Err(format!("{} expected route(s) missing", missing.len()))
    }
}

/// Print one line per expectation and return the missing ones.
fn report(table: &RouteTable, expected: &[Expectation]) -> Vec<Expectation> {
    let missing = table.missing(expected);

    for expectation in expected {
        let (method, path) = expectation;
        if missing.contains(expectation) {
            println!(
                "  {} {} {}",
                "✗".custom_color(colors::red()),
                method.as_str().custom_color(colors::method(method)).bold(),
                path.custom_color(colors::subtext())
            );
        } else {
            println!(
                "  {} {} {}",
                "✓".custom_color(colors::green()),
                method.as_str().custom_color(colors::method(method)).bold(),
                path
            );
        }
    }

    missing
}
