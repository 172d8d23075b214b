//! The abstract graph interface.
//!
//! [`Graph`] is the read side: enumeration, value lookups, endpoints and
//! adjacency. [`GraphMut`] adds the mutation contract. Traversals and the
//! derived algorithms only ever see these traits, so any type implementing them
//! (a [`DiGraph`](crate::DiGraph), a [`Reversed`](crate::graph::Reversed) view, or a
//! virtual graph computed on demand) is accepted unmodified.
//!
//! Derived queries (`successors`, `predecessors`, `incident_edges`, `has_edge`,
//! `any_node`, labels) have default bodies written against the primitives.

use core::any::Any;
use std::borrow::Cow;

use super::handle::{Edge, Node};

/// Read access to a directed multigraph.
///
/// Lookups on handles that are not part of the graph are precondition
/// violations and may panic. Adjacency queries on an absent node yield nothing.
pub trait Graph {
    /// Value stored on each node.
    type NodeValue;
    /// Value stored on each edge.
    type EdgeValue;

    /// All nodes, in a stable order.
    fn nodes(&self) -> impl Iterator<Item = Node> + '_;

    /// All edges, in a stable order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns `true` if `node` belongs to this graph.
    fn contains_node(&self, node: Node) -> bool;

    /// Returns `true` if `edge` belongs to this graph.
    fn contains_edge(&self, edge: Edge) -> bool;

    /// The value of `node`.
    fn node_value(&self, node: Node) -> &Self::NodeValue;

    /// The value of `edge`.
    fn edge_value(&self, edge: Edge) -> &Self::EdgeValue;

    /// Source node of `edge`.
    fn tail(&self, edge: Edge) -> Node;

    /// Destination node of `edge`.
    fn head(&self, edge: Edge) -> Node;

    /// Edges whose tail is `node`.
    fn out_edges(&self, node: Node) -> impl Iterator<Item = Edge> + '_;

    /// Edges whose head is `node`.
    fn in_edges(&self, node: Node) -> impl Iterator<Item = Edge> + '_;

    /// Every edge going from `tail` to `head` (parallel edges included).
    fn edges_between(&self, tail: Node, head: Node) -> impl Iterator<Item = Edge> + '_;

    /// Returns `true` if at least one edge goes from `tail` to `head`.
    fn has_edge(&self, tail: Node, head: Node) -> bool {
        self.edges_between(tail, head).next().is_some()
    }

    /// Union of the in- and out-edges of `node`. A self-loop is yielded once.
    fn incident_edges(&self, node: Node) -> impl Iterator<Item = Edge> + '_ {
        self.out_edges(node)
            .chain(self.in_edges(node).filter(move |&e| self.tail(e) != node))
    }

    /// Heads of the out-edges of `node`, one entry per edge.
    fn successors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_edges(node).map(move |e| self.head(e))
    }

    /// Tails of the in-edges of `node`, one entry per edge.
    fn predecessors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_edges(node).map(move |e| self.tail(e))
    }

    /// Some node of the graph, or `None` if it is empty.
    fn any_node(&self) -> Option<Node> {
        self.nodes().next()
    }

    /// The value of `node` if it is string-typed.
    fn node_label(&self, node: Node) -> Option<&str>
    where
        Self::NodeValue: 'static,
    {
        as_label(self.node_value(node))
    }

    /// The value of `edge` if it is string-typed.
    fn edge_label(&self, edge: Edge) -> Option<&str>
    where
        Self::EdgeValue: 'static,
    {
        as_label(self.edge_value(edge))
    }
}

/// Mutation contract of a directed multigraph.
///
/// Every method leaves the graph consistent: no edge ever refers to a node that
/// is not in the graph.
pub trait GraphMut: Graph {
    /// Inserts a node holding `value`.
    fn new_node(&mut self, value: Self::NodeValue) -> Node;

    /// Inserts a node holding the default value.
    fn new_default_node(&mut self) -> Node
    where
        Self::NodeValue: Default,
    {
        self.new_node(Self::NodeValue::default())
    }

    /// Inserts an edge `tail -> head` holding `value`.
    ///
    /// Parallel edges are allowed.
    ///
    /// # Panics
    /// Panics if either endpoint is not in the graph.
    fn new_edge(&mut self, tail: Node, head: Node, value: Self::EdgeValue) -> Edge;

    /// Inserts an edge `tail -> head` holding the default value.
    fn new_default_edge(&mut self, tail: Node, head: Node) -> Edge
    where
        Self::EdgeValue: Default,
    {
        self.new_edge(tail, head, Self::EdgeValue::default())
    }

    /// Removes `node` and every edge incident to it.
    ///
    /// Returns the node's value, or `None` if it was not in the graph.
    fn remove_node(&mut self, node: Node) -> Option<Self::NodeValue>;

    /// Removes `edge`, returning its value, or `None` if it was not in the graph.
    fn remove_edge(&mut self, edge: Edge) -> Option<Self::EdgeValue>;

    /// Replaces the value of `node`, returning the previous one.
    fn set_node_value(&mut self, node: Node, value: Self::NodeValue) -> Self::NodeValue;

    /// Replaces the value of `edge`, returning the previous one.
    fn set_edge_value(&mut self, edge: Edge, value: Self::EdgeValue) -> Self::EdgeValue;

    /// Re-points `edge` so it goes from `tail` to `head`.
    ///
    /// A no-op when the endpoints are unchanged.
    fn set_endpoints(&mut self, edge: Edge, tail: Node, head: Node);

    /// Moves the tail of `edge` to `tail`.
    fn set_tail(&mut self, edge: Edge, tail: Node) {
        let head = self.head(edge);
        self.set_endpoints(edge, tail, head);
    }

    /// Moves the head of `edge` to `head`.
    fn set_head(&mut self, edge: Edge, head: Node) {
        let tail = self.tail(edge);
        self.set_endpoints(edge, tail, head);
    }
}

fn as_label<T: Any>(value: &T) -> Option<&str> {
    let value: &dyn Any = value;
    if let Some(s) = value.downcast_ref::<String>() {
        return Some(s.as_str());
    }
    if let Some(&s) = value.downcast_ref::<&'static str>() {
        return Some(s);
    }
    value.downcast_ref::<Cow<'static, str>>().map(AsRef::as_ref)
}

#[cfg(test)]
mod tests {
    use super::as_label;
    use std::borrow::Cow;

    #[test]
    fn labels_only_for_strings() {
        assert_eq!(as_label(&String::from("a")), Some("a"));
        assert_eq!(as_label(&"b"), Some("b"));
        assert_eq!(as_label(&Cow::<'static, str>::Borrowed("c")), Some("c"));
        assert_eq!(as_label(&42u32), None);
        assert_eq!(as_label(&()), None);
    }
}
