//! Depth-first search.
//!
//! The search is iterative: an explicit stack of frames stands in for the call
//! stack of the recursive formulation, so arbitrarily deep graphs cannot
//! overflow it. Each frame holds the node, the tree edge that reached it (if
//! any) and a cursor over its remaining out-edges. Edge classification is
//! identical to the recursive algorithm.

use super::state::{Color, Coloring};
use super::visitor::Visitor;
use crate::graph::{Edge, Graph, Node};

struct Frame<I> {
    node: Node,
    via: Option<Edge>,
    cursor: I,
}

/// Depth-first search over the whole graph, trying `roots` first.
///
/// After the given roots are exhausted, every node still undiscovered is used
/// as a further root, in [`Graph::nodes`] order, so every node is discovered
/// exactly once. `start` fires for each tree root.
///
/// # Errors
/// Returns the first error raised by a hook; the search stops there.
pub fn depth_first_search<G, V>(
    graph: &G,
    roots: impl IntoIterator<Item = Node>,
    visitor: V,
) -> Result<(), V::Error>
where
    G: Graph,
    V: Visitor,
{
    search(graph, roots.into_iter().chain(graph.nodes()), visitor)
}

/// Depth-first search restricted to the nodes reachable from `roots`.
///
/// # Errors
/// Returns the first error raised by a hook; the search stops there.
pub fn depth_first_search_from<G, V>(
    graph: &G,
    roots: impl IntoIterator<Item = Node>,
    visitor: V,
) -> Result<(), V::Error>
where
    G: Graph,
    V: Visitor,
{
    search(graph, roots.into_iter(), visitor)
}

fn search<G, V>(graph: &G, roots: impl Iterator<Item = Node>, mut visitor: V) -> Result<(), V::Error>
where
    G: Graph,
    V: Visitor,
{
    let mut colors = Coloring::initialize(graph, &mut visitor)?;
    let mut stack = Vec::new();
    let mut trees = 0usize;

    for root in roots {
        if colors.get(root) != Color::New {
            continue;
        }
        trees += 1;
        visitor.start(root)?;
        colors.set(root, Color::Working);
        visitor.discover(root)?;
        stack.push(Frame {
            node: root,
            via: None,
            cursor: graph.out_edges(root),
        });

        while let Some(mut frame) = stack.pop() {
            let Some(edge) = frame.cursor.next() else {
                colors.set(frame.node, Color::Done);
                visitor.finish_node(frame.node)?;
                if let Some(via) = frame.via {
                    visitor.finish_edge(via)?;
                }
                continue;
            };

            visitor.visit_edge(edge)?;
            let head = graph.head(edge);
            match colors.get(head) {
                Color::New => {
                    visitor.tree_edge(edge)?;
                    stack.push(frame);
                    colors.set(head, Color::Working);
                    visitor.discover(head)?;
                    stack.push(Frame {
                        node: head,
                        via: Some(edge),
                        cursor: graph.out_edges(head),
                    });
                }
                Color::Working => {
                    visitor.back_edge(edge)?;
                    visitor.finish_edge(edge)?;
                    stack.push(frame);
                }
                Color::Done => {
                    visitor.forward_or_cross_edge(edge)?;
                    visitor.finish_edge(edge)?;
                    stack.push(frame);
                }
            }
        }
    }

    tracing::trace!(trees, reached = colors.reached(), "depth-first search finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Callbacks;
    use crate::{DiGraph, GraphMut};

    #[derive(Default)]
    struct Events(Vec<String>);

    impl Visitor for Events {
        type Error = core::convert::Infallible;

        fn start(&mut self, root: Node) -> Result<(), Self::Error> {
            self.0.push(format!("start {root}"));
            Ok(())
        }
        fn discover(&mut self, node: Node) -> Result<(), Self::Error> {
            self.0.push(format!("discover {node}"));
            Ok(())
        }
        fn finish_node(&mut self, node: Node) -> Result<(), Self::Error> {
            self.0.push(format!("finish {node}"));
            Ok(())
        }
        fn tree_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
            self.0.push(format!("tree {edge}"));
            Ok(())
        }
        fn back_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
            self.0.push(format!("back {edge}"));
            Ok(())
        }
        fn forward_or_cross_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
            self.0.push(format!("cross {edge}"));
            Ok(())
        }
        fn finish_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
            self.0.push(format!("finish-edge {edge}"));
            Ok(())
        }
    }

    #[test]
    fn dfs_matches_recursive_order() {
        // 0 -> 1 (e3), 1 -> 2 (e4), 2 -> 0 (e5), 0 -> 2 (e6)
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let n0 = g.new_node(());
        let n1 = g.new_node(());
        let n2 = g.new_node(());
        g.new_edge(n0, n1, ());
        g.new_edge(n1, n2, ());
        g.new_edge(n2, n0, ());
        g.new_edge(n0, n2, ());

        let mut events = Events::default();
        depth_first_search(&g, [n0], &mut events).unwrap();
        assert_eq!(
            events.0,
            vec![
                "start 0",
                "discover 0",
                "tree 3",
                "discover 1",
                "tree 4",
                "discover 2",
                "back 5",
                "finish-edge 5",
                "finish 2",
                "finish-edge 4",
                "finish 1",
                "finish-edge 3",
                "cross 6",
                "finish-edge 6",
                "finish 0",
            ]
        );
    }

    #[test]
    fn dfs_covers_disconnected_components() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.new_node(());
        let b = g.new_node(());
        let c = g.new_node(());
        g.new_edge(b, c, ());

        let mut starts = Vec::new();
        let mut discovered = Vec::new();
        let visitor: Callbacks<'_> = Callbacks::new()
            .on_start(|n| {
                starts.push(n);
                Ok(())
            })
            .on_discover(|n| {
                discovered.push(n);
                Ok(())
            });
        depth_first_search(&g, [c], visitor).unwrap();

        assert_eq!(starts, vec![c, a, b]);
        assert_eq!(discovered, vec![c, a, b]);
    }

    #[test]
    fn dfs_from_stays_reachable() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.new_node(());
        let b = g.new_node(());
        let c = g.new_node(());
        g.new_edge(a, b, ());

        let mut discovered = Vec::new();
        let visitor: Callbacks<'_> = Callbacks::new().on_discover(|n| {
            discovered.push(n);
            Ok(())
        });
        depth_first_search_from(&g, [a], visitor).unwrap();
        assert_eq!(discovered, vec![a, b]);
        assert!(!discovered.contains(&c));
    }

    #[test]
    fn dfs_handles_deep_chains() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let mut prev = g.new_node(());
        let first = prev;
        for _ in 0..100_000 {
            let next = g.new_node(());
            g.new_edge(prev, next, ());
            prev = next;
        }
        let mut finished = 0usize;
        let visitor: Callbacks<'_> = Callbacks::new().on_finish_node(|_| {
            finished += 1;
            Ok(())
        });
        depth_first_search_from(&g, [first], visitor).unwrap();
        assert_eq!(finished, 100_001);
    }
}
