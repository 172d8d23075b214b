//! Graph handles, the graph interface, the store and its views.
//!
//! - `handle`: reference-free `Node`/`Edge` identifiers
//! - `traits`: the [`Graph`]/[`GraphMut`] interface
//! - `adapter`: forwarding wrappers around an inner graph
//! - `store`: the concrete [`DiGraph`] store
//! - `reversed`: a zero-copy view with every edge flipped
//! - `export`: DOT and dump formatting

pub mod adapter;
pub mod export;
pub mod handle;
pub mod reversed;
pub mod store;
pub mod traits;

pub use adapter::{GraphAdapter, GraphAdapterMut};
pub use export::{dump, to_dot, Dot, DotConfig, Dump};
pub use handle::{Edge, Node};
pub use reversed::Reversed;
pub use store::DiGraph;
pub use traits::{Graph, GraphMut};
