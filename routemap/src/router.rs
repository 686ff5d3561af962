//! Express-style route registration.
//!
//! [`Router`] records registrations the way a framework's router does:
//! every call appends one layer, in call order. Nothing is deduplicated at
//! registration time; merging happens when the table is extracted.
//!
//! ```
//! use routemap::router::Router;
//!
//! let api = Router::new()
//!     .get("/products", "list_products")
//!     .post("/products", "create_product")
//!     .get("/products/:id", "get_product");
//!
//! let app = Router::new().middleware("jsonParser").mount("/api", api);
//! let table = app.route_table();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.endpoints()[0].path, "/api/products");
//! ```

use http::Method;

use crate::introspection::{RouteTable, extract};
use crate::layer::{RouteLayer, RouteNode};
use crate::method::STANDARD_METHODS;

#[derive(Debug, Clone, Default)]
pub struct Router {
    layers: Vec<RouteLayer>,
}

impl Router {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn route(mut self, method: Method, path: &str, handler: &str) -> Self {
        let node = RouteNode::new(path, [method.as_str()]).with_handler(handler);
        self.layers.push(RouteLayer::Route(node));
        self
    }

    pub fn get(self, path: &str, handler: &str) -> Self {
        self.route(Method::GET, path, handler)
    }

    pub fn post(self, path: &str, handler: &str) -> Self {
        self.route(Method::POST, path, handler)
    }

    pub fn put(self, path: &str, handler: &str) -> Self {
        self.route(Method::PUT, path, handler)
    }

    pub fn patch(self, path: &str, handler: &str) -> Self {
        self.route(Method::PATCH, path, handler)
    }

    pub fn delete(self, path: &str, handler: &str) -> Self {
        self.route(Method::DELETE, path, handler)
    }

    /// Registers `handler` for every standard verb as a single layer.
    pub fn all(mut self, path: &str, handler: &str) -> Self {
        let node = RouteNode::new(path, STANDARD_METHODS.iter().map(Method::as_str))
            .with_handler(handler);
        self.layers.push(RouteLayer::Route(node));
        self
    }

    /// Registers a layer that handles no endpoints (body parser, logger).
    pub fn middleware(mut self, name: &str) -> Self {
        self.layers.push(RouteLayer::middleware(name));
        self
    }

    /// Mounts `router` under `path`. Mounting the same router twice is
    /// allowed and registers its routes twice.
    pub fn mount(mut self, path: &str, router: Router) -> Self {
        self.layers.push(RouteLayer::mount(path, router.layers));
        self
    }

    pub fn layers(&self) -> &[RouteLayer] {
        &self.layers
    }

    pub fn into_layers(self) -> Vec<RouteLayer> {
        self.layers
    }

    /// Extracts the current route table. Later registrations are not
    /// reflected in the returned snapshot.
    pub fn route_table(&self) -> RouteTable {
        extract(&self.layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_registration_is_a_layer() {
        let router = Router::new()
            .get("/users", "list_users")
            .post("/users", "create_user");
        assert_eq!(router.layers().len(), 2);
    }

    #[test]
    fn test_middleware_adds_passthrough_layer() {
        let router = Router::new().middleware("jsonParser").get("/", "index");
        assert_eq!(router.layers()[0], RouteLayer::middleware("jsonParser"));
        assert_eq!(router.route_table().len(), 1);
    }

    #[test]
    fn test_all_registers_standard_verbs() {
        let table = Router::new().all("/echo", "echo").route_table();
        assert_eq!(table.endpoints()[0].methods.len(), STANDARD_METHODS.len());
    }

    #[test]
    fn test_mount_records_prefix() {
        let router = Router::new().mount("/api", Router::new().get("/ping", "ping"));
        match &router.layers()[0] {
            RouteLayer::Mount(node) => {
                assert_eq!(node.mount_path, "/api");
                assert_eq!(node.children.len(), 1);
            }
            other => panic!("expected mount, got {:?}", other),
        }
    }

    #[test]
    fn test_route_table_is_a_snapshot() {
        let router = Router::new().get("/a", "a");
        let before = router.route_table();
        let router = router.get("/b", "b");
        assert_eq!(before.len(), 1);
        assert_eq!(router.route_table().len(), 2);
    }

    #[test]
    fn test_into_layers() {
        let layers = Router::new().delete("/x", "remove").into_layers();
        assert_eq!(layers.len(), 1);
    }
}
