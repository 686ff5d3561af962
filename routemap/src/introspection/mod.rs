//! Route table introspection.
//!
//! [`extract`] walks a routing tree once and produces a [`RouteTable`]:
//! one [`EndpointDescriptor`] per distinct composed path, in first-seen
//! order, with verbs merged across registrations. The table is a snapshot
//! and does not follow later changes to the tree.

mod endpoint;
mod extractor;
mod route_info;
mod table;

pub use endpoint::EndpointDescriptor;
pub use extractor::extract;
pub use route_info::RouteInfo;
pub use table::{RouteTable, SkippedNode};
