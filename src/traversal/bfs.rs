//! Breadth-first search.

use std::collections::VecDeque;

use super::state::{Color, Coloring};
use super::visitor::Visitor;
use crate::graph::{Graph, Node};

/// Breadth-first search from `roots`, driving `visitor`.
///
/// Roots are discovered in the order given (duplicates are ignored), then nodes
/// are expanded in FIFO order. Only nodes reachable from the roots are
/// discovered. For each out-edge the visitor sees `visit_edge`, then either
/// `tree_edge`, or `non_tree_edge` followed by `working_head` / `done_head`.
///
/// # Errors
/// Returns the first error raised by a hook; the search stops there.
pub fn breadth_first_search<G, V>(
    graph: &G,
    roots: impl IntoIterator<Item = Node>,
    mut visitor: V,
) -> Result<(), V::Error>
where
    G: Graph,
    V: Visitor,
{
    let mut colors = Coloring::initialize(graph, &mut visitor)?;
    let mut queue = VecDeque::new();

    for root in roots {
        if colors.get(root) == Color::New {
            colors.set(root, Color::Working);
            visitor.discover(root)?;
            queue.push_back(root);
        }
    }

    while let Some(node) = queue.pop_front() {
        visitor.visit_node(node)?;
        for edge in graph.out_edges(node) {
            visitor.visit_edge(edge)?;
            let head = graph.head(edge);
            match colors.get(head) {
                Color::New => {
                    visitor.tree_edge(edge)?;
                    colors.set(head, Color::Working);
                    queue.push_back(head);
                    visitor.discover(head)?;
                }
                Color::Working => {
                    visitor.non_tree_edge(edge)?;
                    visitor.working_head(edge)?;
                }
                Color::Done => {
                    visitor.non_tree_edge(edge)?;
                    visitor.done_head(edge)?;
                }
            }
        }
        colors.set(node, Color::Done);
        visitor.finish_node(node)?;
    }

    tracing::trace!(reached = colors.reached(), "breadth-first search finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Callbacks;
    use crate::{DiGraph, GraphMut};

    #[test]
    fn bfs_levels_and_classification() {
        // a -> b, a -> c, b -> c, c -> a
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.new_node(());
        let b = g.new_node(());
        let c = g.new_node(());
        let ab = g.new_edge(a, b, ());
        let ac = g.new_edge(a, c, ());
        let bc = g.new_edge(b, c, ());
        let ca = g.new_edge(c, a, ());

        let mut order = Vec::new();
        let mut tree = Vec::new();
        let mut working = Vec::new();
        let mut done = Vec::new();
        let visitor: Callbacks<'_> = Callbacks::new()
            .on_visit_node(|n| {
                order.push(n);
                Ok(())
            })
            .on_tree_edge(|e| {
                tree.push(e);
                Ok(())
            })
            .on_working_head(|e| {
                working.push(e);
                Ok(())
            })
            .on_done_head(|e| {
                done.push(e);
                Ok(())
            });
        breadth_first_search(&g, [a], visitor).unwrap();

        assert_eq!(order, vec![a, b, c]);
        assert_eq!(tree, vec![ab, ac]);
        assert_eq!(working, vec![bc]);
        assert_eq!(done, vec![ca]);
    }

    #[test]
    fn bfs_stops_on_error() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.new_node(());
        let b = g.new_node(());
        let c = g.new_node(());
        g.new_edge(a, b, ());
        g.new_edge(b, c, ());

        let mut discovered = Vec::new();
        let visitor: Callbacks<'_, &'static str> = Callbacks::new().on_discover(|n| {
            discovered.push(n);
            if n == b {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(breadth_first_search(&g, [a], visitor), Err("stop"));
        assert_eq!(discovered, vec![a, b]);
    }
}
