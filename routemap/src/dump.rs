//! Routing trees read from JSON.
//!
//! A dump is what a host application writes out after route registration:
//! either a single layer object or an array of top-level layers. Layer
//! objects use these keys (unknown keys are ignored):
//!
//! | key         | meaning                                             |
//! |-------------|-----------------------------------------------------|
//! | `isRoute`   | `true` for a terminal route                         |
//! | `path`      | route path, may contain `:param` placeholders       |
//! | `methods`   | object of verb to bool, or an array of verb names;  |
//! |             | `_all` stands for every standard verb               |
//! | `children`  | layers of a mounted sub-router                      |
//! | `mountPath` | prefix for `children`, defaults to `""`             |
//! | `name`      | handler or middleware name                          |
//!
//! A layer with neither `isRoute` nor `children` is a passthrough
//! (middleware) layer.
//!
//! ```
//! use routemap::dump;
//!
//! let tree = dump::from_str(r#"
//!     [
//!       { "name": "jsonParser" },
//!       { "mountPath": "/api", "children": [
//!           { "isRoute": true, "path": "/products", "methods": { "get": true } }
//!       ] }
//!     ]
//! "#).unwrap();
//!
//! let table = dump::extract_value(&tree).unwrap();
//! assert_eq!(table.endpoints()[0].path, "/api/products");
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::introspection::{RouteTable, extract};
use crate::layer::{LayerView, Malformed, RoutingLayer};
use crate::method::STANDARD_METHODS;

impl RoutingLayer for Value {
    fn view(&self) -> std::result::Result<LayerView<'_, Self>, Malformed> {
        let object = self.as_object().ok_or(Malformed::NotAnObject)?;
        let handler = object.get("name").and_then(Value::as_str);

        let is_route = match object.get("isRoute") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(is_route)) => *is_route,
            Some(_) => return Err(Malformed::InvalidIsRoute),
        };

        if is_route {
            let path = object
                .get("path")
                .and_then(Value::as_str)
                .ok_or(Malformed::MissingPath)?;
            let mut methods = Vec::new();
            match object.get("methods") {
                Some(Value::Object(flags)) => {
                    for (verb, flag) in flags {
                        push_flag(&mut methods, verb, flag.as_bool().unwrap_or(false));
                    }
                }
                Some(Value::Array(verbs)) => {
                    for verb in verbs.iter().filter_map(Value::as_str) {
                        push_flag(&mut methods, verb, true);
                    }
                }
                _ => {}
            }
            return Ok(LayerView::Route {
                path,
                methods,
                handler,
            });
        }

        match object.get("children") {
            None | Some(Value::Null) => Ok(LayerView::Passthrough),
            Some(Value::Array(children)) => {
                let mount_path = match object.get("mountPath") {
                    None | Some(Value::Null) => "",
                    Some(Value::String(mount_path)) => mount_path.as_str(),
                    Some(_) => return Err(Malformed::InvalidMountPath),
                };
                Ok(LayerView::Mount {
                    mount_path,
                    children,
                })
            }
            Some(_) => Err(Malformed::InvalidChildren),
        }
    }
}

/// Verb key Express records for `router.all()`.
const ALL_METHODS_KEY: &str = "_all";

/// Appends one verb flag, expanding the catch-all key to every standard
/// verb the way [`Router::all`](crate::router::Router::all) registers it.
fn push_flag<'a>(methods: &mut Vec<(&'a str, bool)>, verb: &'a str, enabled: bool) {
    if verb.eq_ignore_ascii_case(ALL_METHODS_KEY) {
        methods.extend(STANDARD_METHODS.iter().map(|m| (m.as_str(), enabled)));
    } else {
        methods.push((verb, enabled));
    }
}

/// Returns the top-level layers of a dump.
///
/// A single object is treated as the root layer; an array as the list of
/// top-level layers. Anything else is not a routing tree.
pub fn top_level(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Object(_) => Ok(std::slice::from_ref(value)),
        Value::Array(layers) => Ok(layers),
        Value::Null => Err(Error::invalid_input("routing tree is null")),
        other => Err(Error::invalid_input(format!(
            "routing tree must be an object or an array, found {}",
            kind(other)
        ))),
    }
}

/// Extracts the route table of a parsed dump.
pub fn extract_value(value: &Value) -> Result<RouteTable> {
    top_level(value).map(extract)
}

pub fn from_str(s: &str) -> Result<Value> {
    Ok(serde_json::from_str(s)?)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn from_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open {}: {}", path.display(), e)))?;
    from_reader(BufReader::new(file))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_top_level_single_object() {
        let value = json!({ "isRoute": true, "path": "/", "methods": { "get": true } });
        assert_eq!(top_level(&value).unwrap().len(), 1);
    }

    #[test]
    fn test_top_level_null_is_invalid_input() {
        let err = top_level(&Value::Null).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert_eq!(err.message, "routing tree is null");
    }

    #[test]
    fn test_top_level_scalar_is_invalid_input() {
        let err = extract_value(&json!("routes")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert!(err.message.contains("found a string"));
    }

    #[test]
    fn test_empty_array_is_empty_table() {
        let table = extract_value(&json!([])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_view_route_with_method_array() {
        let value = json!({ "isRoute": true, "path": "/a", "methods": ["get", "put"] });
        match value.view().unwrap() {
            LayerView::Route { methods, .. } => {
                assert_eq!(methods, vec![("get", true), ("put", true)]);
            }
            other => panic!("expected route, got {:?}", other),
        }
    }

    #[test]
    fn test_view_route_without_path() {
        let value = json!({ "isRoute": true, "methods": { "get": true } });
        assert_eq!(value.view().unwrap_err(), Malformed::MissingPath);
    }

    #[test]
    fn test_view_non_bool_is_route() {
        let value = json!({ "isRoute": "true", "path": "/x", "methods": { "get": true } });
        assert_eq!(value.view().unwrap_err(), Malformed::InvalidIsRoute);
    }

    #[test]
    fn test_view_all_key_expands_to_standard_verbs() {
        let value = json!({ "isRoute": true, "path": "/y", "methods": ["_all"] });
        match value.view().unwrap() {
            LayerView::Route { methods, .. } => {
                assert_eq!(methods.len(), STANDARD_METHODS.len());
                assert_eq!(methods[0], ("GET", true));
            }
            other => panic!("expected route, got {:?}", other),
        }
    }

    #[test]
    fn test_view_non_object() {
        assert_eq!(json!(42).view().unwrap_err(), Malformed::NotAnObject);
    }

    #[test]
    fn test_view_mount_defaults_to_empty_prefix() {
        let value = json!({ "children": [] });
        match value.view().unwrap() {
            LayerView::Mount { mount_path, children } => {
                assert_eq!(mount_path, "");
                assert!(children.is_empty());
            }
            other => panic!("expected mount, got {:?}", other),
        }
    }

    #[test]
    fn test_view_bad_mount_path_and_children() {
        let value = json!({ "mountPath": 7, "children": [] });
        assert_eq!(value.view().unwrap_err(), Malformed::InvalidMountPath);
        let value = json!({ "mountPath": "/x", "children": {} });
        assert_eq!(value.view().unwrap_err(), Malformed::InvalidChildren);
    }

    #[test]
    fn test_view_middleware() {
        let value = json!({ "name": "jsonParser" });
        assert!(matches!(value.view(), Ok(LayerView::Passthrough)));
    }

    #[test]
    fn test_from_str_syntax_error() {
        let err = from_str("[{").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_from_file_missing() {
        let err = from_file("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(err.message.contains("/definitely/not/here.json"));
    }
}
