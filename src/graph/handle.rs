//! Node and edge handles.
//!
//! Handles are plain integer identifiers. They carry no reference to the graph
//! that issued them, so the same handle stays meaningful for a store and for any
//! view wrapping it (see [`Reversed`](crate::graph::Reversed)).
//!
//! Identifiers are drawn from a single counter shared by nodes and edges and are
//! never reused, even after removal. A stale handle therefore fails its lookup
//! instead of aliasing a newer entity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A handle to a node of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(u64);

/// A handle to an edge of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Edge(u64);

impl Node {
    /// Wraps a raw identifier.
    ///
    /// Stores mint their own handles; this is for custom [`Graph`](crate::Graph)
    /// implementations that map their own keys onto handles.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl Edge {
    /// Wraps a raw identifier.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic identifier source shared by the nodes and edges of one store.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdGen {
    next: u64,
}

impl IdGen {
    pub(crate) fn node(&mut self) -> Node {
        Node(self.bump())
    }

    pub(crate) fn edge(&mut self) -> Edge {
        Edge(self.bump())
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next = self
            .next
            .checked_add(1)
            .unwrap_or_else(|| panic!("graph identifier space exhausted"));
        id
    }
}
