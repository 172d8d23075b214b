//! Breadth-first and depth-first search over any [`Graph`].
//!
//! Both searches color nodes *new → working → done*, keep that coloring local
//! to the call, and report progress through a [`Visitor`]. Mutating the graph
//! while a search is running is not supported.

mod bfs;
mod dfs;
mod state;
pub mod visitor;

use core::convert::Infallible;
use std::collections::HashSet;

pub use bfs::breadth_first_search;
pub use dfs::{depth_first_search, depth_first_search_from};
pub use visitor::{Callbacks, LoggingVisitor, Visitor};

use crate::graph::{Graph, Node};

/// Nodes reachable from `roots` (the roots included).
pub fn reachable<G: Graph>(graph: &G, roots: impl IntoIterator<Item = Node>) -> HashSet<Node> {
    struct Collect(HashSet<Node>);

    impl Visitor for Collect {
        type Error = Infallible;

        fn discover(&mut self, node: Node) -> Result<(), Infallible> {
            self.0.insert(node);
            Ok(())
        }
    }

    let mut collect = Collect(HashSet::new());
    match breadth_first_search(graph, roots, &mut collect) {
        Ok(()) => collect.0,
        Err(never) => match never {},
    }
}
