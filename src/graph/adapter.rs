//! Forwarding adapters.
//!
//! A wrapper that merely holds a graph implements [`GraphAdapter`] (and
//! [`GraphAdapterMut`] for mutation), then invokes [`forward_graph!`] once to
//! get the full [`Graph`]/[`GraphMut`] surface delegated to the inner graph.
//!
//! ```rust
//! use handlegraph::{forward_graph, DiGraph, Graph, GraphAdapter, GraphAdapterMut, GraphMut};
//!
//! struct Tasks(DiGraph<String, ()>);
//!
//! impl GraphAdapter for Tasks {
//!     type Inner = DiGraph<String, ()>;
//!     fn inner(&self) -> &Self::Inner { &self.0 }
//! }
//! impl GraphAdapterMut for Tasks {
//!     fn inner_mut(&mut self) -> &mut Self::Inner { &mut self.0 }
//! }
//!
//! forward_graph!(impl[] Graph for Tasks);
//! forward_graph!(impl[] GraphMut for Tasks);
//!
//! let mut tasks = Tasks(DiGraph::new());
//! let a = tasks.new_node("fetch".to_string());
//! let b = tasks.new_node("build".to_string());
//! tasks.new_edge(a, b, ());
//! assert!(tasks.has_edge(a, b));
//! ```

use super::traits::{Graph, GraphMut};

/// A type that wraps an inner graph.
pub trait GraphAdapter {
    /// The wrapped graph.
    type Inner: Graph;

    /// Borrows the wrapped graph.
    fn inner(&self) -> &Self::Inner;
}

/// A [`GraphAdapter`] whose inner graph can be mutated through it.
///
/// Forwarding [`GraphMut`] additionally requires the inner graph to implement it.
pub trait GraphAdapterMut: GraphAdapter {
    /// Mutably borrows the wrapped graph.
    fn inner_mut(&mut self) -> &mut Self::Inner;
}

/// Implements [`Graph`] or [`GraphMut`] for a [`GraphAdapter`] by delegating
/// every method to the inner graph.
///
/// Generic parameters of the implementing type go inside the brackets:
/// `forward_graph!(impl['a, G: Graph] Graph for &'a G)`.
#[macro_export]
macro_rules! forward_graph {
    (impl [$($gen:tt)*] Graph for $ty:ty) => {
        impl<$($gen)*> $crate::Graph for $ty {
            type NodeValue =
                <<$ty as $crate::GraphAdapter>::Inner as $crate::Graph>::NodeValue;
            type EdgeValue =
                <<$ty as $crate::GraphAdapter>::Inner as $crate::Graph>::EdgeValue;

            #[inline]
            fn nodes(&self) -> impl ::core::iter::Iterator<Item = $crate::Node> + '_ {
                $crate::Graph::nodes($crate::GraphAdapter::inner(self))
            }

            #[inline]
            fn edges(&self) -> impl ::core::iter::Iterator<Item = $crate::Edge> + '_ {
                $crate::Graph::edges($crate::GraphAdapter::inner(self))
            }

            #[inline]
            fn node_count(&self) -> usize {
                $crate::Graph::node_count($crate::GraphAdapter::inner(self))
            }

            #[inline]
            fn edge_count(&self) -> usize {
                $crate::Graph::edge_count($crate::GraphAdapter::inner(self))
            }

            #[inline]
            fn contains_node(&self, node: $crate::Node) -> bool {
                $crate::Graph::contains_node($crate::GraphAdapter::inner(self), node)
            }

            #[inline]
            fn contains_edge(&self, edge: $crate::Edge) -> bool {
                $crate::Graph::contains_edge($crate::GraphAdapter::inner(self), edge)
            }

            #[inline]
            fn node_value(&self, node: $crate::Node) -> &Self::NodeValue {
                $crate::Graph::node_value($crate::GraphAdapter::inner(self), node)
            }

            #[inline]
            fn edge_value(&self, edge: $crate::Edge) -> &Self::EdgeValue {
                $crate::Graph::edge_value($crate::GraphAdapter::inner(self), edge)
            }

            #[inline]
            fn tail(&self, edge: $crate::Edge) -> $crate::Node {
                $crate::Graph::tail($crate::GraphAdapter::inner(self), edge)
            }

            #[inline]
            fn head(&self, edge: $crate::Edge) -> $crate::Node {
                $crate::Graph::head($crate::GraphAdapter::inner(self), edge)
            }

            #[inline]
            fn out_edges(
                &self,
                node: $crate::Node,
            ) -> impl ::core::iter::Iterator<Item = $crate::Edge> + '_ {
                $crate::Graph::out_edges($crate::GraphAdapter::inner(self), node)
            }

            #[inline]
            fn in_edges(
                &self,
                node: $crate::Node,
            ) -> impl ::core::iter::Iterator<Item = $crate::Edge> + '_ {
                $crate::Graph::in_edges($crate::GraphAdapter::inner(self), node)
            }

            #[inline]
            fn edges_between(
                &self,
                tail: $crate::Node,
                head: $crate::Node,
            ) -> impl ::core::iter::Iterator<Item = $crate::Edge> + '_ {
                $crate::Graph::edges_between($crate::GraphAdapter::inner(self), tail, head)
            }

            #[inline]
            fn has_edge(&self, tail: $crate::Node, head: $crate::Node) -> bool {
                $crate::Graph::has_edge($crate::GraphAdapter::inner(self), tail, head)
            }
        }
    };
    (impl [$($gen:tt)*] GraphMut for $ty:ty) => {
        impl<$($gen)*> $crate::GraphMut for $ty {
            #[inline]
            fn new_node(&mut self, value: Self::NodeValue) -> $crate::Node {
                $crate::GraphMut::new_node($crate::GraphAdapterMut::inner_mut(self), value)
            }

            #[inline]
            fn new_edge(
                &mut self,
                tail: $crate::Node,
                head: $crate::Node,
                value: Self::EdgeValue,
            ) -> $crate::Edge {
                $crate::GraphMut::new_edge(
                    $crate::GraphAdapterMut::inner_mut(self),
                    tail,
                    head,
                    value,
                )
            }

            #[inline]
            fn remove_node(&mut self, node: $crate::Node) -> ::core::option::Option<Self::NodeValue> {
                $crate::GraphMut::remove_node($crate::GraphAdapterMut::inner_mut(self), node)
            }

            #[inline]
            fn remove_edge(&mut self, edge: $crate::Edge) -> ::core::option::Option<Self::EdgeValue> {
                $crate::GraphMut::remove_edge($crate::GraphAdapterMut::inner_mut(self), edge)
            }

            #[inline]
            fn set_node_value(&mut self, node: $crate::Node, value: Self::NodeValue) -> Self::NodeValue {
                $crate::GraphMut::set_node_value($crate::GraphAdapterMut::inner_mut(self), node, value)
            }

            #[inline]
            fn set_edge_value(&mut self, edge: $crate::Edge, value: Self::EdgeValue) -> Self::EdgeValue {
                $crate::GraphMut::set_edge_value($crate::GraphAdapterMut::inner_mut(self), edge, value)
            }

            #[inline]
            fn set_endpoints(&mut self, edge: $crate::Edge, tail: $crate::Node, head: $crate::Node) {
                $crate::GraphMut::set_endpoints(
                    $crate::GraphAdapterMut::inner_mut(self),
                    edge,
                    tail,
                    head,
                );
            }
        }
    };
}

impl<G: Graph> GraphAdapter for &G {
    type Inner = G;

    #[inline]
    fn inner(&self) -> &G {
        self
    }
}

impl<G: Graph> GraphAdapter for &mut G {
    type Inner = G;

    #[inline]
    fn inner(&self) -> &G {
        self
    }
}

impl<G: GraphMut> GraphAdapterMut for &mut G {
    #[inline]
    fn inner_mut(&mut self) -> &mut G {
        self
    }
}

forward_graph!(impl['a, G: Graph] Graph for &'a G);
forward_graph!(impl['a, G: Graph] Graph for &'a mut G);
forward_graph!(impl['a, G: GraphMut] GraphMut for &'a mut G);
