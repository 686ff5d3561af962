//! Route table introspection for web applications.
//!
//! Given the routing tree an application registered at startup, `routemap`
//! produces a normalized, deduplicated list of endpoints: every path fully
//! composed from its mount prefixes, every verb it answers to. The result
//! is a plain value, ready to print at startup, serialize for tooling, or
//! check against a list of routes that must exist.
//!
//! # Quick Start
//!
//! ```
//! use http::Method;
//! use routemap::prelude::*;
//!
//! let users = Router::new()
//!     .get("/", "list_users")
//!     .post("/", "create_user")
//!     .get("/:id", "get_user")
//!     .delete("/:id", "delete_user");
//!
//! let app = Router::new()
//!     .middleware("jsonParser")
//!     .mount("/api", Router::new().mount("/users", users));
//!
//! let table = app.route_table();
//! assert_eq!(table.endpoints()[0].path, "/api/users");
//! assert!(table.contains(&Method::DELETE, "/api/users/:id"));
//! print!("{}", table);
//! ```
//!
//! Trees from other frameworks are read through the
//! [`RoutingLayer`](layer::RoutingLayer) trait, and JSON dumps through
//! [`dump`].

pub mod dump;
pub mod error;
pub mod introspection;
pub mod layer;
pub mod method;
pub mod path;
pub mod router;

pub use error::{Error, ErrorKind, Result};

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::introspection::{EndpointDescriptor, RouteInfo, RouteTable, extract};
    pub use crate::layer::{RouteLayer, RoutingLayer};
    pub use crate::method::MethodSet;
    pub use crate::router::Router;
}
