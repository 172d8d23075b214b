use handlegraph::{DiGraph, Edge, Graph, GraphMut, Node};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Operation {
    AddNode(u8),
    AddEdge(usize, usize, u16),
    RemoveNode(usize),
    RemoveEdge(usize),
    SetTail(usize, usize),
    SetHead(usize, usize),
    SetEdgeValue(usize, u16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<u8>().prop_map(Operation::AddNode),
        4 => (any::<usize>(), any::<usize>(), any::<u16>())
            .prop_map(|(t, h, v)| Operation::AddEdge(t, h, v)),
        1 => any::<usize>().prop_map(Operation::RemoveNode),
        1 => any::<usize>().prop_map(Operation::RemoveEdge),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(e, n)| Operation::SetTail(e, n)),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(e, n)| Operation::SetHead(e, n)),
        1 => (any::<usize>(), any::<u16>()).prop_map(|(e, v)| Operation::SetEdgeValue(e, v)),
    ]
}

fn pick<T: Copy>(items: &[T], index: usize) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[index % items.len()])
    }
}

/// Edge table kept alongside the store: edge -> (tail, head, value).
type Model = BTreeMap<Edge, (Node, Node, u16)>;

fn check_against_model(g: &DiGraph<u8, u16>, nodes: &BTreeMap<Node, u8>, edges: &Model) {
    assert!(g.validate_invariants(), "store invariants broken");
    assert_eq!(g.nodes().collect::<Vec<_>>(), nodes.keys().copied().collect::<Vec<_>>());
    assert_eq!(g.edges().collect::<Vec<_>>(), edges.keys().copied().collect::<Vec<_>>());

    for (&node, value) in nodes {
        assert_eq!(g.node_value(node), value, "value mismatch for {node}");
        let mut out: Vec<Edge> = g.out_edges(node).collect();
        let mut inc: Vec<Edge> = g.in_edges(node).collect();
        out.sort_unstable();
        inc.sort_unstable();
        let want_out: Vec<Edge> = edges.iter().filter(|(_, e)| e.0 == node).map(|(&k, _)| k).collect();
        let want_in: Vec<Edge> = edges.iter().filter(|(_, e)| e.1 == node).map(|(&k, _)| k).collect();
        assert_eq!(out, want_out, "out-edges of {node}");
        assert_eq!(inc, want_in, "in-edges of {node}");
    }

    for (&edge, &(tail, head, value)) in edges {
        assert_eq!(g.tail(edge), tail);
        assert_eq!(g.head(edge), head);
        assert_eq!(*g.edge_value(edge), value);
        assert!(g.edges_between(tail, head).any(|e| e == edge));
        assert!(g.has_edge(tail, head));
    }
}

proptest! {
    #[test]
    fn digraph_matches_edge_table(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut g: DiGraph<u8, u16> = DiGraph::new();
        let mut nodes: BTreeMap<Node, u8> = BTreeMap::new();
        let mut edges: Model = BTreeMap::new();

        for op in ops {
            let node_list: Vec<Node> = nodes.keys().copied().collect();
            let edge_list: Vec<Edge> = edges.keys().copied().collect();
            match op {
                Operation::AddNode(v) => {
                    let n = g.new_node(v);
                    prop_assert!(!nodes.contains_key(&n), "node id {} reused", n);
                    nodes.insert(n, v);
                }
                Operation::AddEdge(t, h, v) => {
                    if let (Some(tail), Some(head)) = (pick(&node_list, t), pick(&node_list, h)) {
                        let e = g.new_edge(tail, head, v);
                        prop_assert!(!edges.contains_key(&e), "edge id {} reused", e);
                        edges.insert(e, (tail, head, v));
                    }
                }
                Operation::RemoveNode(i) => {
                    if let Some(node) = pick(&node_list, i) {
                        prop_assert_eq!(g.remove_node(node), nodes.remove(&node));
                        edges.retain(|_, e| e.0 != node && e.1 != node);
                        prop_assert!(!g.contains_node(node));
                        prop_assert_eq!(g.remove_node(node), None);
                    }
                }
                Operation::RemoveEdge(i) => {
                    if let Some(edge) = pick(&edge_list, i) {
                        let (_, _, value) = edges.remove(&edge).unwrap();
                        prop_assert_eq!(g.remove_edge(edge), Some(value));
                        prop_assert_eq!(g.remove_edge(edge), None);
                    }
                }
                Operation::SetTail(i, n) => {
                    if let (Some(edge), Some(tail)) = (pick(&edge_list, i), pick(&node_list, n)) {
                        g.set_tail(edge, tail);
                        edges.get_mut(&edge).unwrap().0 = tail;
                    }
                }
                Operation::SetHead(i, n) => {
                    if let (Some(edge), Some(head)) = (pick(&edge_list, i), pick(&node_list, n)) {
                        g.set_head(edge, head);
                        edges.get_mut(&edge).unwrap().1 = head;
                    }
                }
                Operation::SetEdgeValue(i, v) => {
                    if let Some(edge) = pick(&edge_list, i) {
                        let slot = edges.get_mut(&edge).unwrap();
                        prop_assert_eq!(g.set_edge_value(edge, v), slot.2);
                        slot.2 = v;
                    }
                }
            }
            check_against_model(&g, &nodes, &edges);
        }

        prop_assert_eq!(g.node_count(), nodes.len());
        prop_assert_eq!(g.edge_count(), edges.len());
    }

    #[test]
    fn removing_every_node_empties_the_store(
        n in 1usize..20,
        pairs in proptest::collection::vec((any::<usize>(), any::<usize>()), 0..60),
    ) {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let nodes: Vec<Node> = (0..n).map(|_| g.new_node(())).collect();
        for (t, h) in pairs {
            g.new_edge(nodes[t % n], nodes[h % n], ());
        }
        for node in nodes.iter().rev() {
            g.remove_node(*node);
            prop_assert!(g.validate_invariants());
        }
        prop_assert!(g.is_empty());
        prop_assert_eq!(g.edge_count(), 0);
    }
}
