//! Routing tree data model.
//!
//! A routing tree is an ordered sequence of layers. Each layer is either a
//! terminal route, a mount point holding a nested sub-router, or a
//! middleware layer that contributes no endpoints. The extractor never
//! looks at concrete types: it reads layers through [`RoutingLayer`], so
//! any framework representation (including a raw JSON dump, see
//! [`crate::dump`]) can be walked.

use std::fmt;

/// Why a layer was skipped during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The node is not an object at all.
    NotAnObject,
    /// The route flag is present but is not a boolean.
    InvalidIsRoute,
    /// A terminal route without a string path.
    MissingPath,
    /// A terminal route with no valid verb flagged `true`.
    NoMethods,
    /// A mount point whose mount path is not a string.
    InvalidMountPath,
    /// A mount point whose children are not a sequence.
    InvalidChildren,
}

impl Malformed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Malformed::NotAnObject => "layer is not an object",
            Malformed::InvalidIsRoute => "isRoute is not a boolean",
            Malformed::MissingPath => "route has no path",
            Malformed::NoMethods => "route handles no methods",
            Malformed::InvalidMountPath => "mount path is not a string",
            Malformed::InvalidChildren => "children is not a list",
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Malformed {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Borrowed view of one layer, as the extractor sees it.
#[derive(Debug)]
pub enum LayerView<'a, L> {
    /// Terminal route: its own path, verb flags in declaration order, and
    /// the handler name if the framework knows it.
    Route {
        path: &'a str,
        methods: Vec<(&'a str, bool)>,
        handler: Option<&'a str>,
    },
    /// Mounted sub-router.
    Mount { mount_path: &'a str, children: &'a [L] },
    /// Neither a route nor a router.
    Passthrough,
}

/// A node in some framework's routing tree.
pub trait RoutingLayer: Sized {
    /// Classifies this layer, or reports why it cannot be read.
    fn view(&self) -> Result<LayerView<'_, Self>, Malformed>;
}

/// Terminal route registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub path: String,
    /// Verb name to "handles this verb" flag, in declaration order.
    pub methods: Vec<(String, bool)>,
    pub handler: Option<String>,
}

impl RouteNode {
    /// Creates a route handling each of `methods`.
    pub fn new<I, S>(path: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            methods: methods.into_iter().map(|m| (m.into(), true)).collect(),
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }
}

/// Sub-router mounted under a path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountNode {
    pub mount_path: String,
    pub children: Vec<RouteLayer>,
}

/// Layer that handles no endpoints of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareNode {
    pub name: Option<String>,
}

/// One layer of a framework-agnostic routing tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLayer {
    Route(RouteNode),
    Mount(MountNode),
    Middleware(MiddlewareNode),
}

impl RouteLayer {
    pub fn route<I, S>(path: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RouteLayer::Route(RouteNode::new(path, methods))
    }

    pub fn mount(mount_path: impl Into<String>, children: Vec<RouteLayer>) -> Self {
        RouteLayer::Mount(MountNode {
            mount_path: mount_path.into(),
            children,
        })
    }

    pub fn middleware(name: impl Into<String>) -> Self {
        RouteLayer::Middleware(MiddlewareNode {
            name: Some(name.into()),
        })
    }
}

impl From<RouteNode> for RouteLayer {
    fn from(node: RouteNode) -> Self {
        RouteLayer::Route(node)
    }
}

impl RoutingLayer for RouteLayer {
    fn view(&self) -> Result<LayerView<'_, Self>, Malformed> {
        Ok(match self {
            RouteLayer::Route(node) => LayerView::Route {
                path: &node.path,
                methods: node
                    .methods
                    .iter()
                    .map(|(name, on)| (name.as_str(), *on))
                    .collect(),
                handler: node.handler.as_deref(),
            },
            RouteLayer::Mount(node) => LayerView::Mount {
                mount_path: &node.mount_path,
                children: &node.children,
            },
            RouteLayer::Middleware(_) => LayerView::Passthrough,
        })
    }
}
