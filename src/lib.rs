//! # `handlegraph` - Handle-Based Directed Graphs
//!
//! An in-memory directed multigraph engine: a store addressed by plain integer
//! handles, an abstract graph interface with adapter views, and a visitor-driven
//! traversal framework with the classic algorithms built on top.
//!
//! ## Architecture
//!
//! 1. **Handles** (`Node`, `Edge`):
//!    - Integer identifiers with no reference to their graph
//!    - Never reused, so stale handles fail lookups instead of aliasing
//!
//! 2. **Store** (`DiGraph<N, E>`):
//!    - Owns node and edge values
//!    - Keeps endpoint and adjacency indices in lockstep
//!    - Parallel edges and self-loops allowed
//!
//! 3. **Interface** (`Graph`, `GraphMut`):
//!    - Everything downstream is written against the traits
//!    - `GraphAdapter` + [`forward_graph!`] let wrappers delegate the whole surface
//!    - `Reversed` flips every edge without copying
//!
//! 4. **Traversal** (`breadth_first_search`, `depth_first_search`):
//!    - Three-color state machine local to each call
//!    - Iterative depth-first search with an explicit frame stack
//!    - Hooks on a [`Visitor`](traversal::Visitor); a failing hook aborts the search
//!
//! 5. **Algorithms**: strongly connected components, topological sort and
//!    transitive closure, each a visitor over the traversal engine.
//!
//! ## Invariants
//!
//! After every mutation of a `DiGraph`:
//! - every edge has one endpoint entry and both endpoints exist;
//! - out/in adjacency agrees with the endpoint table;
//! - the `(tail, head)` index agrees with it and keeps no empty sets;
//! - removing a node has removed every incident edge first.
//!
//! ## Example
//!
//! ```rust
//! use handlegraph::{algorithms, DiGraph, Graph, GraphError, GraphMut};
//!
//! let mut g: DiGraph<&str, ()> = DiGraph::new();
//! let fetch = g.new_node("fetch");
//! let build = g.new_node("build");
//! let test = g.new_node("test");
//! g.new_edge(fetch, build, ());
//! g.new_edge(build, test, ());
//!
//! assert_eq!(algorithms::topological_sort(&g), Ok(vec![fetch, build, test]));
//!
//! algorithms::transitive_closure(&mut g);
//! assert!(g.has_edge(fetch, test));
//!
//! g.new_edge(test, fetch, ());
//! assert_eq!(algorithms::topological_sort(&g), Err(GraphError::NOT_A_DAG));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod traversal;

pub use error::GraphError;
pub use graph::{DiGraph, Edge, Graph, GraphAdapter, GraphAdapterMut, GraphMut, Node};
