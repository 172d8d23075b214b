//! Textual export: Graphviz DOT and a plain debugging dump.
//!
//! Both are debugging artifacts. Labels are only emitted for string-typed values.

use core::fmt::{self, Debug, Display, Write};

use serde::{Deserialize, Serialize};

use super::traits::Graph;

/// Options for [`Dot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Optional identifier written after `digraph`.
    pub graph_name: Option<String>,
    /// Emit `label` attributes for string-typed values.
    pub labels: bool,
    /// Indentation of statements inside the graph body.
    pub indent: String,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: None,
            labels: true,
            indent: "  ".to_owned(),
        }
    }
}

impl DotConfig {
    /// Parses a config from JSON. Missing fields take their default.
    ///
    /// # Errors
    /// Returns the `serde_json` error if `json` is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Formats a graph in the DOT language.
///
/// ```rust
/// use handlegraph::{graph::Dot, DiGraph, GraphMut};
///
/// let mut g: DiGraph<String, ()> = DiGraph::new();
/// let a = g.new_node("a".into());
/// let b = g.new_node(String::new());
/// g.new_edge(a, b, ());
///
/// assert_eq!(
///     Dot::new(&g).to_string(),
///     "digraph {\n  0 [label=\"a\"];\n  1;\n  0 -> 1;\n}\n",
/// );
/// ```
pub struct Dot<'a, G> {
    graph: &'a G,
    config: DotConfig,
}

impl<'a, G: Graph> Dot<'a, G> {
    /// Formats `graph` with the default config.
    pub fn new(graph: &'a G) -> Self {
        Self::with_config(graph, DotConfig::default())
    }

    /// Formats `graph` with `config`.
    pub fn with_config(graph: &'a G, config: DotConfig) -> Self {
        Self { graph, config }
    }
}

impl<G> Display for Dot<'_, G>
where
    G: Graph,
    G::NodeValue: 'static,
    G::EdgeValue: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = &self.config.indent;
        match &self.config.graph_name {
            Some(name) => writeln!(f, "digraph {name} {{")?,
            None => writeln!(f, "digraph {{")?,
        }
        for node in self.graph.nodes() {
            write!(f, "{indent}{node}")?;
            let label = self.graph.node_label(node).filter(|_| self.config.labels);
            write_label(f, label)?;
            writeln!(f, ";")?;
        }
        for edge in self.graph.edges() {
            let (tail, head) = (self.graph.tail(edge), self.graph.head(edge));
            write!(f, "{indent}{tail} -> {head}")?;
            let label = self.graph.edge_label(edge).filter(|_| self.config.labels);
            write_label(f, label)?;
            writeln!(f, ";")?;
        }
        writeln!(f, "}}")
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, label: Option<&str>) -> fmt::Result {
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return Ok(());
    };
    f.write_str(" [label=\"")?;
    for c in label.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    f.write_str("\"]")
}

/// Renders `graph` as DOT with the default config.
pub fn to_dot<G>(graph: &G) -> String
where
    G: Graph,
    G::NodeValue: 'static,
    G::EdgeValue: 'static,
{
    Dot::new(graph).to_string()
}

/// Lists every node with its value, edges and neighbours, then every edge with
/// its value and endpoints.
///
/// ```text
/// node 0 value="a" out=[2] in=[] successors=[1] predecessors=[]
/// node 1 value="b" out=[] in=[2] successors=[] predecessors=[0]
/// edge 2 value=() 0 -> 1
/// ```
pub struct Dump<'a, G> {
    graph: &'a G,
}

impl<'a, G: Graph> Dump<'a, G> {
    /// Dumps `graph`.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G> Display for Dump<'_, G>
where
    G: Graph,
    G::NodeValue: Debug,
    G::EdgeValue: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.graph;
        for node in g.nodes() {
            write!(f, "node {node} value={:?} out=", g.node_value(node))?;
            write_list(f, g.out_edges(node))?;
            f.write_str(" in=")?;
            write_list(f, g.in_edges(node))?;
            f.write_str(" successors=")?;
            write_list(f, g.successors(node))?;
            f.write_str(" predecessors=")?;
            write_list(f, g.predecessors(node))?;
            writeln!(f)?;
        }
        for edge in g.edges() {
            writeln!(
                f,
                "edge {edge} value={:?} {} -> {}",
                g.edge_value(edge),
                g.tail(edge),
                g.head(edge)
            )?;
        }
        Ok(())
    }
}

fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = T>) -> fmt::Result {
    f.write_char('[')?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_char(']')
}

/// Renders the dump of `graph` to a string.
pub fn dump<G>(graph: &G) -> String
where
    G: Graph,
    G::NodeValue: Debug,
    G::EdgeValue: Debug,
{
    Dump::new(graph).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiGraph, GraphMut};

    #[test]
    fn dot_labels_and_escaping() {
        let mut g: DiGraph<&'static str, String> = DiGraph::new();
        let a = g.new_node("say \"hi\"");
        let b = g.new_node("");
        g.new_edge(a, b, "x".to_owned());
        g.new_edge(b, b, String::new());

        let dot = to_dot(&g);
        assert_eq!(
            dot,
            "digraph {\n  0 [label=\"say \\\"hi\\\"\"];\n  1;\n  0 -> 1 [label=\"x\"];\n  1 -> 1;\n}\n"
        );
    }

    #[test]
    fn dot_without_string_values() {
        let mut g: DiGraph<u32, ()> = DiGraph::new();
        let a = g.new_node(10);
        g.new_edge(a, a, ());
        assert_eq!(to_dot(&g), "digraph {\n  0;\n  0 -> 0;\n}\n");
    }

    #[test]
    fn dot_config_from_json() {
        let config = DotConfig::from_json(r#"{"graph_name": "deps", "labels": false}"#).unwrap();
        assert_eq!(config.indent, "  ");

        let mut g: DiGraph<String, ()> = DiGraph::new();
        g.new_node("a".to_owned());
        let dot = Dot::with_config(&g, config).to_string();
        assert_eq!(dot, "digraph deps {\n  0;\n}\n");
    }

    #[test]
    fn dump_lists_adjacency() {
        let mut g: DiGraph<&'static str, ()> = DiGraph::new();
        let a = g.new_node("a");
        let b = g.new_node("b");
        g.new_edge(a, b, ());
        assert_eq!(
            dump(&g),
            "node 0 value=\"a\" out=[2] in=[] successors=[1] predecessors=[]\n\
             node 1 value=\"b\" out=[] in=[2] successors=[] predecessors=[0]\n\
             edge 2 value=() 0 -> 1\n"
        );
    }
}
