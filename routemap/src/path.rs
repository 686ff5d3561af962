//! Path normalization and prefix composition.
//!
//! Route and mount paths are treated as opaque text: parameter
//! placeholders such as `:id` or `*rest` pass through untouched. The only
//! structure that matters is the `/` separator.

use std::borrow::Cow;

/// Returns `true` if `path` is already in canonical form.
///
/// Canonical means: starts with `/`, contains no `//`, and does not end
/// with `/` unless it is exactly `/`.
///
/// ```
/// use routemap::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/users/:id"));
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("users"));
/// assert!(!is_canonical("/users/"));
/// assert!(!is_canonical("/api//users"));
/// ```
pub fn is_canonical(path: &str) -> bool {
    if !path.starts_with('/') || path.contains("//") {
        return false;
    }
    path == "/" || !path.ends_with('/')
}

/// Normalizes a path to canonical form.
///
/// Collapses runs of `/` into one, strips a trailing `/` unless the path is
/// the root, and adds a missing leading `/`. The empty string becomes `/`.
/// Canonical input is returned borrowed.
///
/// ```
/// use routemap::path::normalize_path;
///
/// assert_eq!(normalize_path("/api//users/"), "/api/users");
/// assert_eq!(normalize_path("users/:id"), "/users/:id");
/// assert_eq!(normalize_path("///"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}

/// Composes a prefix and a segment with exactly one separator between
/// them, then normalizes the result.
///
/// ```
/// use routemap::path::join;
///
/// assert_eq!(join("", "/"), "/");
/// assert_eq!(join("/api/users", "/"), "/api/users");
/// assert_eq!(join("/api/", "/users/:id"), "/api/users/:id");
/// assert_eq!(join("/api", "users"), "/api/users");
/// ```
pub fn join(prefix: &str, segment: &str) -> String {
    let composed = format!("{}/{}", prefix, segment);
    normalize_path(&composed).into_owned()
}

/// Composes the prefix for the children of a mount point.
///
/// Same as [`join`], except that the root is represented by the empty
/// string so nested joins never start from `/`.
///
/// ```
/// use routemap::path::mount_prefix;
///
/// assert_eq!(mount_prefix("", "/"), "");
/// assert_eq!(mount_prefix("", ""), "");
/// assert_eq!(mount_prefix("", "/api"), "/api");
/// assert_eq!(mount_prefix("/api", "/users/"), "/api/users");
/// ```
pub fn mount_prefix(prefix: &str, mount_path: &str) -> String {
    let composed = join(prefix, mount_path);
    if composed == "/" {
        String::new()
    } else {
        composed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_is_borrowed() {
        assert!(matches!(normalize_path("/users"), Cow::Borrowed("/users")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        assert_eq!(normalize_path("//api///users////:id"), "/api/users/:id");
    }

    #[test]
    fn test_normalize_strips_trailing_separator() {
        assert_eq!(normalize_path("/api/users/"), "/api/users");
        assert_eq!(normalize_path("/api/users//"), "/api/users");
    }

    #[test]
    fn test_normalize_keeps_placeholders() {
        assert_eq!(normalize_path("/files/*rest"), "/files/*rest");
        assert_eq!(normalize_path("/a/:b?/c"), "/a/:b?/c");
    }

    #[test]
    fn test_join_root_prefix_does_not_double() {
        assert_eq!(join("", "/health"), "/health");
        assert_eq!(join("", "health"), "/health");
    }

    #[test]
    fn test_join_empty_segment_yields_prefix() {
        assert_eq!(join("/api", ""), "/api");
        assert_eq!(join("", ""), "/");
    }

    #[test]
    fn test_mount_prefix_nests() {
        let api = mount_prefix("", "/api");
        let users = mount_prefix(&api, "/users");
        assert_eq!(users, "/api/users");
        assert_eq!(join(&users, "/:id"), "/api/users/:id");
    }

    #[test]
    fn test_mount_prefix_at_root_is_empty() {
        assert_eq!(mount_prefix("", "//"), "");
        assert_eq!(join(&mount_prefix("", "/"), "/"), "/");
    }
}
