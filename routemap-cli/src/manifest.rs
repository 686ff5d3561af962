//! Expected-routes manifest.
//!
//! ```toml
//! [[route]]
//! method = "GET"
//! path = "/api/products"
//!
//! [[route]]
//! methods = ["GET", "DELETE"]
//! path = "/api/orders/:id"
//! ```

use std::path::Path;

use http::Method;
use routemap::method::parse_method;
use routemap::path::normalize_path;
use serde::Deserialize;

#[derive(Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "route")]
    routes: Vec<ExpectedEntry>,
}

#[derive(Deserialize)]
struct ExpectedEntry {
    path: String,
    method: Option<String>,
    #[serde(default)]
    methods: Vec<String>,
}

/// One (method, path) pair that must be present.
pub type Expectation = (Method, String);

/// Parses manifest contents into expectations, in file order.
pub fn parse(content: &str) -> Result<Vec<Expectation>, String> {
    let file: ManifestFile =
        toml::from_str(content).map_err(|e| format!("Failed to parse manifest: {}", e))?;

    let mut expectations = Vec::new();
    for entry in file.routes {
        let path = normalize_path(&entry.path).into_owned();
        let names: Vec<&String> = entry.method.iter().chain(entry.methods.iter()).collect();

        if names.is_empty() {
            return Err(format!("Route {} in manifest lists no methods", path));
        }

        for name in names {
            let method = parse_method(name)
                .ok_or_else(|| format!("Invalid method '{}' for route {}", name, path))?;
            let expectation = (method, path.clone());
            if !expectations.contains(&expectation) {
                expectations.push(expectation);
            }
        }
    }

    Ok(expectations)
}

/// Reads and parses a manifest file.
pub fn load(path: &str) -> Result<Vec<Expectation>, String> {
    if !Path::new(path).exists() {
        return Err(format!("No manifest found at {}", path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;

    parse(&content)
}
