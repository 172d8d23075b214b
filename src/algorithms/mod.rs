//! Algorithms built on the traversal engine.
//!
//! Each one works against the [`Graph`](crate::Graph) traits only, so it runs
//! unchanged on a store, a [`Reversed`](crate::graph::Reversed) view or a custom
//! graph.

pub mod closure;
pub mod scc;
pub mod toposort;

pub use closure::transitive_closure;
pub use scc::{strong_component_sets, strong_components};
pub use toposort::{is_acyclic, topological_sort};
