//! Topological sort by depth-first reverse postorder.

use std::collections::VecDeque;

use crate::error::GraphError;
use crate::graph::{Edge, Graph, Node};
use crate::traversal::{depth_first_search, Visitor};

#[derive(Default)]
struct ReversePostorder {
    order: VecDeque<Node>,
}

impl Visitor for ReversePostorder {
    type Error = GraphError;

    fn back_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        tracing::debug!(edge = %edge, "back edge found, graph is cyclic");
        Err(GraphError::NOT_A_DAG)
    }

    fn finish_node(&mut self, node: Node) -> Result<(), GraphError> {
        self.order.push_front(node);
        Ok(())
    }
}

/// Orders the nodes so that every edge goes from an earlier node to a later one.
///
/// # Errors
/// Returns [`GraphError::NOT_A_DAG`] as soon as a cycle is found (a self-loop
/// counts). No partial order is returned.
///
/// ```rust
/// use handlegraph::{algorithms::topological_sort, DiGraph, GraphError, GraphMut};
///
/// let mut g: DiGraph<(), ()> = DiGraph::new();
/// let a = g.new_node(());
/// let b = g.new_node(());
/// g.new_edge(b, a, ());
/// assert_eq!(topological_sort(&g), Ok(vec![b, a]));
///
/// g.new_edge(a, b, ());
/// assert_eq!(topological_sort(&g), Err(GraphError::NOT_A_DAG));
/// ```
pub fn topological_sort<G: Graph>(graph: &G) -> Result<Vec<Node>, GraphError> {
    let mut visitor = ReversePostorder::default();
    depth_first_search(graph, core::iter::empty(), &mut visitor)?;
    Ok(visitor.order.into())
}

/// Returns `true` if the graph has no cycle.
pub fn is_acyclic<G: Graph>(graph: &G) -> bool {
    topological_sort(graph).is_ok()
}
