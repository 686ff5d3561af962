use std::collections::{HashMap, HashSet};

use http::Method;
use tracing::{debug, warn};

use crate::layer::{LayerView, Malformed, RoutingLayer};
use crate::method::{MethodSet, parse_method};
use crate::path;

use super::{EndpointDescriptor, RouteInfo, RouteTable, SkippedNode};

/// Walks a routing tree and returns its route table.
///
/// Layers are visited depth-first in registration order. Each terminal
/// route contributes its verbs to the path formed by all enclosing mount
/// prefixes plus its own path. A path seen again has its verbs unioned
/// into the existing entry, which keeps its first-seen position.
///
/// Malformed layers are recorded in [`RouteTable::skipped`] and never stop
/// the walk. An empty tree yields an empty table.
///
/// ```
/// use routemap::introspection::extract;
/// use routemap::layer::RouteLayer;
///
/// let tree = vec![RouteLayer::mount(
///     "/api",
///     vec![RouteLayer::mount(
///         "/users",
///         vec![
///             RouteLayer::route("/", ["GET", "POST"]),
///             RouteLayer::route("/:id", ["GET", "DELETE"]),
///         ],
///     )],
/// )];
///
/// let table = extract(&tree);
/// let paths: Vec<&str> = table.endpoints().iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(paths, vec!["/api/users", "/api/users/:id"]);
/// ```
pub fn extract<L: RoutingLayer>(roots: &[L]) -> RouteTable {
    let mut walk = Walk::default();
    let mut position = Vec::new();
    walk.layers(roots, "", &mut position);

    debug!(
        endpoints = walk.endpoints.len(),
        skipped = walk.skipped.len(),
        "extracted route table"
    );

    RouteTable::new(walk.endpoints, walk.routes, walk.skipped)
}

#[derive(Default)]
struct Walk {
    endpoints: Vec<EndpointDescriptor>,
    by_path: HashMap<String, usize>,
    routes: Vec<RouteInfo>,
    seen_routes: HashSet<(String, Method)>,
    skipped: Vec<SkippedNode>,
}

impl Walk {
    fn layers<L: RoutingLayer>(&mut self, layers: &[L], prefix: &str, position: &mut Vec<usize>) {
        for (index, layer) in layers.iter().enumerate() {
            position.push(index);
            match layer.view() {
                Ok(LayerView::Route {
                    path,
                    methods,
                    handler,
                }) => self.route(prefix, path, &methods, handler, position),
                Ok(LayerView::Mount {
                    mount_path,
                    children,
                }) => {
                    let nested = path::mount_prefix(prefix, mount_path);
                    self.layers(children, &nested, position);
                }
                Ok(LayerView::Passthrough) => {}
                Err(reason) => self.skip(prefix, position, reason),
            }
            position.pop();
        }
    }

    fn route(
        &mut self,
        prefix: &str,
        route_path: &str,
        flags: &[(&str, bool)],
        handler: Option<&str>,
        position: &[usize],
    ) {
        let mut methods = MethodSet::new();
        for &(name, enabled) in flags {
            if !enabled {
                continue;
            }
            match parse_method(name) {
                Some(method) => {
                    methods.insert(method);
                }
                None => warn!(
                    verb = name,
                    path = route_path,
                    "ignoring invalid HTTP method"
                ),
            }
        }

        if methods.is_empty() {
            self.skip(prefix, position, Malformed::NoMethods);
            return;
        }

        let full_path = path::join(prefix, route_path);

        for method in &methods {
            if self.seen_routes.insert((full_path.clone(), method.clone())) {
                self.routes
                    .push(RouteInfo::new(method.as_str(), full_path.as_str(), handler));
            }
        }

        match self.by_path.get(&full_path) {
            Some(&at) => self.endpoints[at].merge(&methods, handler),
            None => {
                let mut endpoint = EndpointDescriptor::new(full_path.clone(), MethodSet::new());
                endpoint.merge(&methods, handler);
                self.by_path.insert(full_path, self.endpoints.len());
                self.endpoints.push(endpoint);
            }
        }
    }

    fn skip(&mut self, prefix: &str, position: &[usize], reason: Malformed) {
        let node = SkippedNode::new(prefix, position.to_vec(), reason);
        warn!(location = %node.location(), %reason, "skipping malformed routing layer");
        self.skipped.push(node);
    }
}
