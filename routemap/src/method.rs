//! HTTP verb handling.

use std::fmt;

use http::Method;
use serde::{Serialize, Serializer, ser::SerializeSeq};

/// Standard verbs in the order they are listed in reports.
pub static STANDARD_METHODS: [Method; 9] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
    Method::CONNECT,
    Method::TRACE,
];

/// Parses a verb name in any case into an uppercase [`Method`].
///
/// Returns `None` for empty names and names that are not valid HTTP
/// method tokens.
///
/// ```
/// use http::Method;
/// use routemap::method::parse_method;
///
/// assert_eq!(parse_method("get"), Some(Method::GET));
/// assert_eq!(parse_method("Purge").unwrap().as_str(), "PURGE");
/// assert_eq!(parse_method("not a verb"), None);
/// ```
pub fn parse_method(name: &str) -> Option<Method> {
    let upper = name.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return None;
    }
    Method::from_bytes(upper.as_bytes()).ok()
}

fn rank(method: &Method) -> usize {
    STANDARD_METHODS
        .iter()
        .position(|m| m == method)
        .unwrap_or(STANDARD_METHODS.len())
}

/// A set of HTTP verbs kept in canonical report order.
///
/// Standard verbs come first in [`STANDARD_METHODS`] order, extension
/// verbs follow alphabetically. Because the order is canonical, two sets
/// compare equal exactly when they hold the same verbs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    methods: Vec<Method>,
}

impl MethodSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a verb. Returns `false` if it was already present.
    pub fn insert(&mut self, method: Method) -> bool {
        if self.contains(&method) {
            return false;
        }
        let at = self
            .methods
            .partition_point(|m| (rank(m), m.as_str()) < (rank(&method), method.as_str()));
        self.methods.insert(at, method);
        true
    }

    /// Set union in place.
    pub fn union_with(&mut self, other: &MethodSet) {
        for method in &other.methods {
            self.insert(method.clone());
        }
    }

    pub fn contains(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut set = MethodSet::new();
        for method in iter {
            set.insert(method);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MethodSet {
    type Item = &'a Method;
    type IntoIter = std::slice::Iter<'a, Method>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.iter()
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.methods.iter().map(Method::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl Serialize for MethodSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.methods.len()))?;
        for method in &self.methods {
            seq.serialize_element(method.as_str())?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_uppercases() {
        assert_eq!(parse_method("delete"), Some(Method::DELETE));
        assert_eq!(parse_method(" Patch "), Some(Method::PATCH));
    }

    #[test]
    fn test_parse_method_rejects_empty_and_invalid() {
        assert_eq!(parse_method(""), None);
        assert_eq!(parse_method("   "), None);
        assert_eq!(parse_method("GE T"), None);
    }

    #[test]
    fn test_method_set_canonical_order() {
        let set: MethodSet = [Method::DELETE, Method::POST, Method::GET].into_iter().collect();
        let names: Vec<&str> = set.iter().map(Method::as_str).collect();
        assert_eq!(names, vec!["GET", "POST", "DELETE"]);
    }

    #[test]
    fn test_method_set_extension_verbs_sort_last() {
        let purge = parse_method("purge").unwrap();
        let bind = parse_method("bind").unwrap();
        let set: MethodSet = [purge, Method::TRACE, bind, Method::GET].into_iter().collect();
        assert_eq!(set.to_string(), "GET, TRACE, BIND, PURGE");
    }

    #[test]
    fn test_method_set_insert_is_idempotent() {
        let mut set = MethodSet::new();
        assert!(set.insert(Method::GET));
        assert!(!set.insert(Method::GET));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_method_set_union() {
        let mut left: MethodSet = [Method::GET].into_iter().collect();
        let right: MethodSet = [Method::POST, Method::GET].into_iter().collect();
        left.union_with(&right);
        assert_eq!(left, [Method::POST, Method::GET].into_iter().collect());
    }

    #[test]
    fn test_method_set_equality_ignores_insertion_order() {
        let a: MethodSet = [Method::GET, Method::DELETE].into_iter().collect();
        let b: MethodSet = [Method::DELETE, Method::GET].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_method_set_serialize() {
        let set: MethodSet = [Method::POST, Method::GET].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["GET","POST"]"#);
    }
}
