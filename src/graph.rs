use std::collections::hash_map::Entry;

use fxhash::{FxHashMap, FxHashSet};

/// A single node of the co-expression graph. Nodes record their neighbors
/// as labels rather than references; the owning [`Graph`] map is consulted
/// to resolve a label back to its node.
#[derive(Debug, Clone)]
pub struct Node {
    pub label: String,
    pub neighbors: FxHashSet<String>,
}

impl Node {
    fn new(label: &str) -> Node {
        Node {
            label: label.to_string(),
            neighbors: FxHashSet::default(),
        }
    }
}

/// An undirected graph over string-labelled nodes, accumulated one edge at
/// a time. Nodes are created lazily the first time a label is seen and are
/// never removed. Both directions of an edge are recorded together, and
/// neighbor sets make repeated insertion of the same edge a no-op.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: FxHashMap<String, Node>,
    order: Vec<String>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Builds a graph from an iterator of (from, to) label pairs.
    pub fn from_edges<I, S>(edges: I) -> Graph
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (a, b) in edges {
            graph.add_edge(a.as_ref(), b.as_ref());
        }
        graph
    }

    /// Returns the node registered under `label`, creating it with an
    /// empty neighbor set if this is the first time the label is seen.
    pub fn get_or_create(&mut self, label: &str) -> &mut Node {
        match self.nodes.entry(label.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(label.to_string());
                entry.insert(Node::new(label))
            }
        }
    }

    /// Inserts the undirected edge (a, b), creating either node as needed.
    /// A self-loop records the label as its own neighbor.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.get_or_create(a).neighbors.insert(b.to_string());
        self.get_or_create(b).neighbors.insert(a.to_string());
    }

    pub fn node(&self, label: &str) -> Option<&Node> {
        self.nodes.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    /// All known labels, in the order they were first registered.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
