use http::Method;
use serde::Serialize;

use crate::method::MethodSet;

/// A fully composed path and every verb it answers to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Absolute, normalized path (e.g. "/api/users/:id").
    pub path: String,
    /// Verbs registered for this path across all registrations.
    pub methods: MethodSet,
    /// Handler names seen for this path, first-seen order, no repeats.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<String>,
}

impl EndpointDescriptor {
    pub fn new(path: impl Into<String>, methods: MethodSet) -> Self {
        Self {
            path: path.into(),
            methods,
            handlers: Vec::new(),
        }
    }

    /// Returns `true` if this endpoint answers to `method`.
    pub fn handles(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    /// Folds another registration of the same path into this one.
    pub(crate) fn merge(&mut self, methods: &MethodSet, handler: Option<&str>) {
        self.methods.union_with(methods);
        if let Some(handler) = handler {
            if !self.handlers.iter().any(|h| h == handler) {
                self.handlers.push(handler.to_string());
            }
        }
    }
}
