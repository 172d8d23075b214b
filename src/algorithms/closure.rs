//! Transitive closure in place.

use std::collections::BTreeSet;

use crate::graph::{GraphMut, Node};

/// Adds a default-valued edge `i -> j` wherever a path of length one or more
/// leads from `i` to `j` and no edge does yet. Returns the number of edges added.
///
/// The node order, and for each intermediate node `k` its predecessors and
/// successors, are snapshotted before any edge for that `k` is inserted, so an
/// edge added while processing `k` never feeds back into the same pass.
/// Running the closure again adds nothing.
///
/// ```rust
/// use handlegraph::{algorithms::transitive_closure, DiGraph, Graph, GraphMut};
///
/// let mut g: DiGraph<(), ()> = DiGraph::new();
/// let a = g.new_node(());
/// let b = g.new_node(());
/// let c = g.new_node(());
/// g.new_edge(a, b, ());
/// g.new_edge(b, c, ());
///
/// assert_eq!(transitive_closure(&mut g), 1);
/// assert!(g.has_edge(a, c));
/// assert!(!g.has_edge(c, a));
/// ```
pub fn transitive_closure<G>(graph: &mut G) -> usize
where
    G: GraphMut,
    G::EdgeValue: Default,
{
    let nodes: Vec<Node> = graph.nodes().collect();
    let mut added = 0usize;

    for &k in &nodes {
        let tails: BTreeSet<Node> = graph.predecessors(k).collect();
        let heads: BTreeSet<Node> = graph.successors(k).collect();
        for &i in &tails {
            for &j in &heads {
                if !graph.has_edge(i, j) {
                    graph.new_default_edge(i, j);
                    added += 1;
                }
            }
        }
    }

    tracing::debug!(nodes = nodes.len(), added, "transitive closure computed");
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiGraph, Graph};

    fn reachability(g: &DiGraph<(), ()>) -> Vec<(Node, Node)> {
        let mut pairs = Vec::new();
        for i in g.nodes() {
            for j in g.nodes() {
                if g.has_edge(i, j) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    #[test]
    fn closure_of_cycle_is_complete() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let n: Vec<Node> = (0..3).map(|_| g.new_node(())).collect();
        g.new_edge(n[0], n[1], ());
        g.new_edge(n[1], n[2], ());
        g.new_edge(n[2], n[0], ());

        transitive_closure(&mut g);
        for &i in &n {
            for &j in &n {
                assert!(g.has_edge(i, j), "missing {i} -> {j}");
            }
        }
    }

    #[test]
    fn closure_is_idempotent() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let n: Vec<Node> = (0..5).map(|_| g.new_node(())).collect();
        g.new_edge(n[0], n[1], ());
        g.new_edge(n[1], n[2], ());
        g.new_edge(n[3], n[1], ());
        g.new_edge(n[2], n[4], ());

        let first = transitive_closure(&mut g);
        let once = reachability(&g);
        assert_eq!(transitive_closure(&mut g), 0);
        assert_eq!(reachability(&g), once);
        // 0->2, 0->4, 1->4, 3->2, 3->4
        assert_eq!(first, 5);
    }

    #[test]
    fn closure_keeps_existing_parallel_edges() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.new_node(());
        let b = g.new_node(());
        g.new_edge(a, b, ());
        g.new_edge(a, b, ());
        assert_eq!(transitive_closure(&mut g), 0);
        assert_eq!(g.edge_count(), 2);
    }
}
