//! A zero-copy view with every edge flipped.

use super::adapter::{GraphAdapter, GraphAdapterMut};
use super::handle::{Edge, Node};
use super::traits::{Graph, GraphMut};

/// A view of `G` in which every edge points the other way.
///
/// `tail`/`head`, `out_edges`/`in_edges` and `successors`/`predecessors` are
/// swapped relative to the wrapped graph. Nothing is copied: mutations through
/// the view land in the wrapped graph, and `new_edge(tail, head, ..)` creates
/// `head -> tail` there.
///
/// Wrap a reference to keep ownership: `Reversed::new(&graph)`.
///
/// ```rust
/// use handlegraph::{graph::Reversed, DiGraph, Graph, GraphMut};
///
/// let mut g: DiGraph<(), ()> = DiGraph::new();
/// let a = g.new_node(());
/// let b = g.new_node(());
/// let e = g.new_edge(a, b, ());
///
/// let r = Reversed::new(&g);
/// assert_eq!(r.tail(e), b);
/// assert!(r.has_edge(b, a));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<G> {
    graph: G,
}

impl<G: Graph> Reversed<G> {
    /// Wraps `graph`.
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Unwraps the view.
    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<G: Graph> GraphAdapter for Reversed<G> {
    type Inner = G;

    fn inner(&self) -> &G {
        &self.graph
    }
}

impl<G: GraphMut> GraphAdapterMut for Reversed<G> {
    fn inner_mut(&mut self) -> &mut G {
        &mut self.graph
    }
}

impl<G: Graph> Graph for Reversed<G> {
    type NodeValue = G::NodeValue;
    type EdgeValue = G::EdgeValue;

    fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.nodes()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edges()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_node(&self, node: Node) -> bool {
        self.graph.contains_node(node)
    }

    fn contains_edge(&self, edge: Edge) -> bool {
        self.graph.contains_edge(edge)
    }

    fn node_value(&self, node: Node) -> &G::NodeValue {
        self.graph.node_value(node)
    }

    fn edge_value(&self, edge: Edge) -> &G::EdgeValue {
        self.graph.edge_value(edge)
    }

    fn tail(&self, edge: Edge) -> Node {
        self.graph.head(edge)
    }

    fn head(&self, edge: Edge) -> Node {
        self.graph.tail(edge)
    }

    fn out_edges(&self, node: Node) -> impl Iterator<Item = Edge> + '_ {
        self.graph.in_edges(node)
    }

    fn in_edges(&self, node: Node) -> impl Iterator<Item = Edge> + '_ {
        self.graph.out_edges(node)
    }

    fn edges_between(&self, tail: Node, head: Node) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edges_between(head, tail)
    }

    fn has_edge(&self, tail: Node, head: Node) -> bool {
        self.graph.has_edge(head, tail)
    }
}

impl<G: GraphMut> GraphMut for Reversed<G> {
    fn new_node(&mut self, value: G::NodeValue) -> Node {
        self.graph.new_node(value)
    }

    fn new_edge(&mut self, tail: Node, head: Node, value: G::EdgeValue) -> Edge {
        self.graph.new_edge(head, tail, value)
    }

    fn remove_node(&mut self, node: Node) -> Option<G::NodeValue> {
        self.graph.remove_node(node)
    }

    fn remove_edge(&mut self, edge: Edge) -> Option<G::EdgeValue> {
        self.graph.remove_edge(edge)
    }

    fn set_node_value(&mut self, node: Node, value: G::NodeValue) -> G::NodeValue {
        self.graph.set_node_value(node, value)
    }

    fn set_edge_value(&mut self, edge: Edge, value: G::EdgeValue) -> G::EdgeValue {
        self.graph.set_edge_value(edge, value)
    }

    fn set_endpoints(&mut self, edge: Edge, tail: Node, head: Node) {
        self.graph.set_endpoints(edge, head, tail);
    }
}
