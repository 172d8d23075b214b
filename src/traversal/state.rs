//! Per-traversal node coloring.
//!
//! Each search owns one `Coloring`, built fresh at the start of the call and
//! dropped at the end, so the visited logic of both searches lives in one place.

use std::collections::HashMap;

use super::visitor::Visitor;
use crate::graph::{Graph, Node};

/// Where a node is in the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Not yet reached.
    New,
    /// Reached, out-edges still being examined.
    Working,
    /// All out-edges examined.
    Done,
}

pub(crate) struct Coloring {
    colors: HashMap<Node, Color>,
}

impl Coloring {
    /// Marks every node of `graph` [`Color::New`], firing `initialize` for each.
    pub(crate) fn initialize<G, V>(graph: &G, visitor: &mut V) -> Result<Self, V::Error>
    where
        G: Graph,
        V: Visitor,
    {
        let mut colors = HashMap::with_capacity(graph.node_count());
        for node in graph.nodes() {
            colors.insert(node, Color::New);
            visitor.initialize(node)?;
        }
        Ok(Self { colors })
    }

    #[inline]
    pub(crate) fn get(&self, node: Node) -> Color {
        self.colors.get(&node).copied().unwrap_or(Color::New)
    }

    #[inline]
    pub(crate) fn set(&mut self, node: Node, color: Color) {
        self.colors.insert(node, color);
    }

    /// Number of nodes that left [`Color::New`].
    pub(crate) fn reached(&self) -> usize {
        self.colors.values().filter(|&&c| c != Color::New).count()
    }
}
