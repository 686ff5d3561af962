use std::fmt;

use http::Method;
use serde::Serialize;

use crate::layer::Malformed;
use crate::path;

use super::{EndpointDescriptor, RouteInfo};

/// A layer the extractor could not read.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedNode {
    /// Composed prefix of the enclosing mount ("/" at top level).
    pub prefix: String,
    /// Index of the layer at each nesting level, outermost first.
    pub position: Vec<usize>,
    pub reason: Malformed,
}

impl SkippedNode {
    pub fn new(prefix: &str, position: Vec<usize>, reason: Malformed) -> Self {
        Self {
            prefix: path::normalize_path(prefix).into_owned(),
            position,
            reason,
        }
    }

    /// Human-readable location, e.g. `/api [0.2]`.
    pub fn location(&self) -> String {
        let indices: Vec<String> = self.position.iter().map(|i| i.to_string()).collect();
        format!("{} [{}]", self.prefix, indices.join("."))
    }
}

/// Snapshot of an application's endpoints.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RouteTable {
    endpoints: Vec<EndpointDescriptor>,
    #[serde(skip)]
    routes: Vec<RouteInfo>,
    skipped: Vec<SkippedNode>,
}

impl RouteTable {
    pub(crate) fn new(
        endpoints: Vec<EndpointDescriptor>,
        routes: Vec<RouteInfo>,
        skipped: Vec<SkippedNode>,
    ) -> Self {
        Self {
            endpoints,
            routes,
            skipped,
        }
    }

    /// Endpoints in first-seen order.
    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    /// One entry per (path, method), first-seen order.
    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }

    /// Layers that were skipped as malformed.
    pub fn skipped(&self) -> &[SkippedNode] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Looks up an endpoint by path. The path is normalized first.
    pub fn get(&self, path: &str) -> Option<&EndpointDescriptor> {
        let path = path::normalize_path(path);
        self.endpoints.iter().find(|e| e.path == path)
    }

    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.get(path).is_some_and(|e| e.handles(method))
    }

    /// Returns the expectations that this table does not satisfy.
    pub fn missing(&self, expected: &[(Method, String)]) -> Vec<(Method, String)> {
        expected
            .iter()
            .filter(|(method, path)| !self.contains(method, path))
            .cloned()
            .collect()
    }
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.endpoints.is_empty() {
            return writeln!(f, "(no routes)");
        }

        let columns: Vec<String> = self.endpoints.iter().map(|e| e.methods.to_string()).collect();
        let width = columns.iter().map(String::len).max().unwrap_or(0);

        for (methods, endpoint) in columns.iter().zip(&self.endpoints) {
            writeln!(f, "{:<width$}  {}", methods, endpoint.path, width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspection::extract;
    use crate::layer::RouteLayer;

    fn sample() -> RouteTable {
        extract(&[
            RouteLayer::route("/", ["GET"]),
            RouteLayer::mount(
                "/api",
                vec![
                    RouteLayer::route("/users", ["GET", "POST"]),
                    RouteLayer::route("/users/:id", ["DELETE"]),
                ],
            ),
        ])
    }

    #[test]
    fn test_get_normalizes_lookup_path() {
        let table = sample();
        assert!(table.get("/api/users/").is_some());
        assert!(table.get("api//users").is_some());
        assert!(table.get("/api").is_none());
    }

    #[test]
    fn test_missing_reports_absent_routes() {
        let table = sample();
        let expected = vec![
            (Method::GET, "/api/users".to_string()),
            (Method::PUT, "/api/users/:id".to_string()),
            (Method::GET, "/metrics".to_string()),
        ];
        let missing = table.missing(&expected);
        assert_eq!(
            missing,
            vec![
                (Method::PUT, "/api/users/:id".to_string()),
                (Method::GET, "/metrics".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_aligns_methods_column() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "GET        /");
        assert_eq!(lines[1], "GET, POST  /api/users");
        assert_eq!(lines[2], "DELETE     /api/users/:id");
    }

    #[test]
    fn test_display_empty_table() {
        assert_eq!(RouteTable::default().to_string(), "(no routes)\n");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["endpoints"][1]["path"], "/api/users");
        assert_eq!(json["endpoints"][1]["methods"], serde_json::json!(["GET", "POST"]));
        assert!(json["skipped"].as_array().unwrap().is_empty());
        assert!(json.get("routes").is_none());
    }

    #[test]
    fn test_skipped_location() {
        let node = SkippedNode::new("", vec![3], Malformed::MissingPath);
        assert_eq!(node.location(), "/ [3]");
        let node = SkippedNode::new("/api/users", vec![1, 0, 2], Malformed::NoMethods);
        assert_eq!(node.location(), "/api/users [1.0.2]");
    }
}
