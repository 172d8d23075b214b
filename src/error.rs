//! Algorithmic failures.

use core::fmt;
use std::borrow::Cow;

/// A named graph-algorithm failure.
///
/// The set of names is open: algorithms outside this crate can mint their own
/// with [`GraphError::new`]. The only failure raised here is
/// [`GraphError::NOT_A_DAG`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphError {
    name: Cow<'static, str>,
}

impl GraphError {
    /// The graph contains a cycle where an acyclic graph was required.
    pub const NOT_A_DAG: Self = Self::from_static("not a DAG");

    /// Creates an error with a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Creates an error with the given name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// The name of this error.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph error: {}", self.name)
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_compare() {
        assert_eq!(GraphError::new("not a DAG"), GraphError::NOT_A_DAG);
        assert_ne!(GraphError::new(String::from("disconnected")), GraphError::NOT_A_DAG);
        assert_eq!(GraphError::NOT_A_DAG.to_string(), "graph error: not a DAG");
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = GraphError::NOT_A_DAG.into();
        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::NOT_A_DAG));
    }
}
