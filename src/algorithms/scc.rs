//! Strongly connected components in a single depth-first pass.
//!
//! Each node gets a tentative *root*: the earliest-discovered node known to be
//! in its component. When a node finishes, its root becomes the earliest root
//! among itself and its successors not yet assigned to a component. A node that
//! remains its own root closes a component: everything above it on the
//! component stack, itself included, belongs to it.

use core::convert::Infallible;
use std::collections::HashMap;

use crate::graph::{Graph, Node};
use crate::traversal::{depth_first_search, Visitor};

struct RootTracker<'g, G> {
    graph: &'g G,
    stack: Vec<Node>,
    root: HashMap<Node, Node>,
    stamp: HashMap<Node, usize>,
    component: HashMap<Node, usize>,
    next_component: usize,
}

impl<G: Graph> Visitor for RootTracker<'_, G> {
    type Error = Infallible;

    fn discover(&mut self, node: Node) -> Result<(), Infallible> {
        self.stack.push(node);
        self.root.insert(node, node);
        self.stamp.insert(node, self.stamp.len());
        Ok(())
    }

    fn finish_node(&mut self, node: Node) -> Result<(), Infallible> {
        for succ in self.graph.successors(node) {
            if self.component.contains_key(&succ) {
                continue;
            }
            let (mine, theirs) = (self.root[&node], self.root[&succ]);
            if self.stamp[&theirs] < self.stamp[&mine] {
                self.root.insert(node, theirs);
            }
        }

        if self.root[&node] == node {
            while let Some(member) = self.stack.pop() {
                self.component.insert(member, self.next_component);
                if member == node {
                    break;
                }
            }
            self.next_component += 1;
        }
        Ok(())
    }
}

/// Assigns every node the index of its strongly connected component.
///
/// Two nodes share an index iff each is reachable from the other. Indices are
/// dense, starting at 0, in the order components are completed: a component
/// only gets its index after every component reachable from it.
pub fn strong_components<G: Graph>(graph: &G) -> HashMap<Node, usize> {
    let mut tracker = RootTracker {
        graph,
        stack: Vec::new(),
        root: HashMap::with_capacity(graph.node_count()),
        stamp: HashMap::with_capacity(graph.node_count()),
        component: HashMap::with_capacity(graph.node_count()),
        next_component: 0,
    };
    match depth_first_search(graph, core::iter::empty(), &mut tracker) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    tracing::debug!(
        nodes = tracker.component.len(),
        components = tracker.next_component,
        "strong components computed"
    );
    tracker.component
}

/// Strongly connected components as node lists, indexed like
/// [`strong_components`]. Nodes within a component are in [`Graph::nodes`] order.
pub fn strong_component_sets<G: Graph>(graph: &G) -> Vec<Vec<Node>> {
    let component = strong_components(graph);
    let count = component.values().max().map_or(0, |&max| max + 1);
    let mut sets = vec![Vec::new(); count];
    for node in graph.nodes() {
        sets[component[&node]].push(node);
    }
    sets
}
