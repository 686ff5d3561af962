//! CLI command implementations.

pub mod check;
pub mod export;
pub mod list;

use std::path::Path;

use colored::Colorize;
use routemap::dump;
use routemap::introspection::RouteTable;
use tracing::debug;

use crate::colors;

/// Tree argument value that reads the dump from stdin.
pub const STDIN: &str = "-";

/// Read a routing tree dump and extract its route table.
pub fn load_table(tree: &str) -> Result<RouteTable, String> {
    let value = if tree == STDIN {
        dump::from_reader(std::io::stdin().lock())
    } else {
        if !Path::new(tree).exists() {
            return Err(format!(
                "No routing tree found at {}. Dump your application's routes to JSON first.",
                tree
            ));
        }
        dump::from_file(tree)
    };
    let value = value.map_err(|e| e.to_string())?;

    let table =
        dump::extract_value(&value).map_err(|e| format!("Failed to read {}: {}", tree, e))?;
    debug!(tree, endpoints = table.len(), skipped = table.skipped().len(), "loaded routing tree");

    Ok(table)
}

/// Print one warning line per skipped layer.
pub fn print_skipped(table: &RouteTable) {
    for node in table.skipped() {
        println!(
            "  {} {} {}",
            "WARN".custom_color(colors::yellow()).bold(),
            node.location().custom_color(colors::subtext()),
            node.reason
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "mountPath": "/api", "children": [
                {{ "isRoute": true, "path": "/items", "methods": {{ "get": true }} }}
            ] }}]"#
        )
        .unwrap();

        let table = load_table(file.path().to_str().unwrap()).unwrap();
        assert_eq!(table.endpoints()[0].path, "/api/items");
    }

    #[test]
    fn test_load_table_missing_file() {
        let err = load_table("/no/such/routes.json").unwrap_err();
        assert!(err.starts_with("No routing tree found"));
    }

    #[test]
    fn test_load_table_rejects_scalar_root() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "42").unwrap();

        let err = load_table(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("must be an object or an array"));
    }
}
