//! Per-verb route metadata.

use serde::Serialize;

/// One (method, path) registration.
///
/// Where [`EndpointDescriptor`](super::EndpointDescriptor) groups verbs by
/// path, `RouteInfo` keeps one entry per verb together with the handler
/// that registered it first.
///
/// # Examples
///
/// ```
/// use routemap::introspection::RouteInfo;
///
/// let info = RouteInfo::new("GET", "/users/:id", Some("get_user"));
/// assert_eq!(info.method, "GET");
/// assert_eq!(info.path, "/users/:id");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteInfo {
    /// The HTTP method (GET, POST, PUT, DELETE, etc.).
    pub method: String,
    /// The composed path pattern (e.g., "/users/:id").
    pub path: String,
    /// The name of the handler, when the routing tree records one.
    pub handler_name: Option<String>,
}

impl RouteInfo {
    /// Creates a new RouteInfo with the given metadata.
    pub fn new(method: impl Into<String>, path: impl Into<String>, handler_name: Option<&str>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            handler_name: handler_name.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_info_new() {
        let info = RouteInfo::new("GET", "/users", Some("list_users"));
        assert_eq!(info.method, "GET");
        assert_eq!(info.path, "/users");
        assert_eq!(info.handler_name.as_deref(), Some("list_users"));
    }

    #[test]
    fn test_route_info_without_handler() {
        let info = RouteInfo::new("DELETE", "/users/:id", None);
        assert_eq!(info.handler_name, None);
    }

    #[test]
    fn test_route_info_serialize() {
        let info = RouteInfo::new("GET", "/health", Some("health_check"));
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"method\":\"GET\""));
        assert!(json.contains("\"path\":\"/health\""));
        assert!(json.contains("\"handler_name\":\"health_check\""));
    }
}
