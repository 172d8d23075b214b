//! Traversal visitors.
//!
//! A [`Visitor`] receives a callback at each defined point of a search. Every
//! hook has a no-op default, so an implementation supplies only the hooks it
//! needs. A hook returning `Err` aborts the traversal and the error is handed
//! back to the caller unchanged.
//!
//! | Hook | Search | Fired when |
//! |------|--------|------------|
//! | `initialize` | both | every node is reset to *new* before any root |
//! | `start` | DFS | a new depth-first tree is rooted |
//! | `discover` | both | a node leaves *new* |
//! | `visit_node` | BFS | a node is dequeued |
//! | `finish_node` | both | all out-edges of a node have been examined |
//! | `visit_edge` | both | an out-edge is examined |
//! | `tree_edge` | both | the edge leads to a *new* node |
//! | `non_tree_edge` | BFS | the edge leads to a discovered node |
//! | `working_head` | BFS | ... whose out-edges are not yet examined |
//! | `done_head` | BFS | ... that is already finished |
//! | `back_edge` | DFS | the edge leads to a node on the current path |
//! | `forward_or_cross_edge` | DFS | the edge leads to a finished node |
//! | `finish_edge` | DFS | a non-tree edge is classified, or a tree edge's head finishes |

use core::convert::Infallible;

use crate::graph::{Edge, Node};

/// Callbacks invoked by [`breadth_first_search`](super::breadth_first_search)
/// and [`depth_first_search`](super::depth_first_search).
#[allow(unused_variables)]
pub trait Visitor {
    /// Error a hook may raise to abort the traversal.
    type Error;

    /// Called once per node before any root is processed.
    fn initialize(&mut self, node: Node) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once per depth-first tree, with its root.
    fn start(&mut self, root: Node) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when `node` is first reached.
    fn discover(&mut self, node: Node) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when `node` is taken off the breadth-first queue.
    fn visit_node(&mut self, node: Node) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when every out-edge of `node` has been examined.
    fn finish_node(&mut self, node: Node) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every out-edge examined.
    fn visit_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    /// `edge` leads to a newly discovered node.
    fn tree_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    /// `edge` leads to an already discovered node (breadth-first only).
    fn non_tree_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The head of `edge` is discovered but not finished (breadth-first only).
    fn working_head(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The head of `edge` is finished (breadth-first only).
    fn done_head(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    /// `edge` closes a cycle through the current depth-first path.
    fn back_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    /// `edge` leads to a finished node (depth-first only).
    fn forward_or_cross_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Depth-first processing of `edge` is complete.
    fn finish_edge(&mut self, edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// The visitor that does nothing.
impl Visitor for () {
    type Error = Infallible;
}

macro_rules! forward_hooks {
    ($($hook:ident($arg:ident: $ty:ty)),* $(,)?) => {
        $(
            #[inline]
            fn $hook(&mut self, $arg: $ty) -> Result<(), Self::Error> {
                (**self).$hook($arg)
            }
        )*
    };
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    type Error = V::Error;

    forward_hooks! {
        initialize(node: Node),
        start(root: Node),
        discover(node: Node),
        visit_node(node: Node),
        finish_node(node: Node),
        visit_edge(edge: Edge),
        tree_edge(edge: Edge),
        non_tree_edge(edge: Edge),
        working_head(edge: Edge),
        done_head(edge: Edge),
        back_edge(edge: Edge),
        forward_or_cross_edge(edge: Edge),
        finish_edge(edge: Edge),
    }
}

type NodeHook<'a, E> = Box<dyn FnMut(Node) -> Result<(), E> + 'a>;
type EdgeHook<'a, E> = Box<dyn FnMut(Edge) -> Result<(), E> + 'a>;

macro_rules! callbacks {
    ($($hook:ident / $setter:ident: $kind:ident($arg:ident: $ty:ty)),* $(,)?) => {
        /// A visitor assembled from closures.
        ///
        /// Unset hooks do nothing. The error type defaults to [`anyhow::Error`]
        /// so closures can fail with `anyhow::bail!` or `?`.
        ///
        /// ```rust
        /// use handlegraph::{traversal::{breadth_first_search, Callbacks}, DiGraph, GraphMut};
        ///
        /// let mut g: DiGraph<(), ()> = DiGraph::new();
        /// let a = g.new_node(());
        /// let b = g.new_node(());
        /// g.new_edge(a, b, ());
        ///
        /// let mut seen = Vec::new();
        /// let mut visitor: Callbacks<'_> = Callbacks::new().on_discover(|n| {
        ///     seen.push(n);
        ///     Ok(())
        /// });
        /// breadth_first_search(&g, [a], &mut visitor)?;
        /// drop(visitor);
        /// assert_eq!(seen, vec![a, b]);
        /// # Ok::<(), anyhow::Error>(())
        /// ```
        pub struct Callbacks<'a, E = anyhow::Error> {
            $($hook: Option<$kind<'a, E>>,)*
        }

        impl<E> Default for Callbacks<'_, E> {
            fn default() -> Self {
                Self { $($hook: None,)* }
            }
        }

        impl<'a, E> Callbacks<'a, E> {
            $(
                #[doc = concat!("Sets the `", stringify!($hook), "` hook.")]
                #[must_use]
                pub fn $setter(mut self, hook: impl FnMut($ty) -> Result<(), E> + 'a) -> Self {
                    self.$hook = Some(Box::new(hook));
                    self
                }
            )*
        }

        impl<E> Visitor for Callbacks<'_, E> {
            type Error = E;

            $(
                fn $hook(&mut self, $arg: $ty) -> Result<(), E> {
                    match &mut self.$hook {
                        Some(hook) => hook($arg),
                        None => Ok(()),
                    }
                }
            )*
        }
    };
}

callbacks! {
    initialize / on_initialize: NodeHook(node: Node),
    start / on_start: NodeHook(root: Node),
    discover / on_discover: NodeHook(node: Node),
    visit_node / on_visit_node: NodeHook(node: Node),
    finish_node / on_finish_node: NodeHook(node: Node),
    visit_edge / on_visit_edge: EdgeHook(edge: Edge),
    tree_edge / on_tree_edge: EdgeHook(edge: Edge),
    non_tree_edge / on_non_tree_edge: EdgeHook(edge: Edge),
    working_head / on_working_head: EdgeHook(edge: Edge),
    done_head / on_done_head: EdgeHook(edge: Edge),
    back_edge / on_back_edge: EdgeHook(edge: Edge),
    forward_or_cross_edge / on_forward_or_cross_edge: EdgeHook(edge: Edge),
    finish_edge / on_finish_edge: EdgeHook(edge: Edge),
}

impl<E> Callbacks<'_, E> {
    /// A visitor with no hooks set.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Logs every hook through `tracing`, then forwards it to an inner visitor.
///
/// Node hooks log at `debug`, edge hooks at `trace`.
#[derive(Debug, Clone, Default)]
pub struct LoggingVisitor<V = ()> {
    inner: V,
}

impl<V: Visitor> LoggingVisitor<V> {
    /// Wraps `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Unwraps the inner visitor.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

macro_rules! logged_hooks {
    ($($level:ident $hook:ident($arg:ident: $ty:ty)),* $(,)?) => {
        $(
            fn $hook(&mut self, $arg: $ty) -> Result<(), Self::Error> {
                tracing::$level!($arg = %$arg, hook = stringify!($hook), "visitor hook");
                self.inner.$hook($arg)
            }
        )*
    };
}

impl<V: Visitor> Visitor for LoggingVisitor<V> {
    type Error = V::Error;

    logged_hooks! {
        debug initialize(node: Node),
        debug start(root: Node),
        debug discover(node: Node),
        debug visit_node(node: Node),
        debug finish_node(node: Node),
        trace visit_edge(edge: Edge),
        trace tree_edge(edge: Edge),
        trace non_tree_edge(edge: Edge),
        trace working_head(edge: Edge),
        trace done_head(edge: Edge),
        trace back_edge(edge: Edge),
        trace forward_or_cross_edge(edge: Edge),
        trace finish_edge(edge: Edge),
    }
}
