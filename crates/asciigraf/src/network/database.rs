//! Graph database
//!
//! Stores the nodes and undirected edges read from a drawing, and builds
//! that store from the scanner and tracer output.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

use super::tracer::TracedEdge;
use crate::core::Position;

/// A named node and where its name starts in the drawing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeData {
    pub name: String,
    pub position: Position,
}

/// An undirected edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeData {
    /// Node at the end of the edge that comes first in reading order
    pub source: String,
    pub target: String,
    /// Number of cells between the two nodes, label cells included
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Cells between the two nodes, from `source` to `target`
    pub points: Vec<Position>,
}

impl EdgeData {
    /// Returns true if this edge joins `a` and `b`, in either order
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Unordered endpoint pair used to look edges up
fn edge_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Graph read from an ASCII drawing
///
/// Nodes and edges keep insertion order, so iterating a graph parsed from
/// the same text always gives the same sequence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AsciiGraph {
    nodes: Vec<NodeData>,
    edges: Vec<EdgeData>,
    #[serde(skip)]
    node_index: HashMap<String, usize>,
    #[serde(skip)]
    edge_index: HashMap<(String, String), usize>,
}

impl PartialEq for AsciiGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for AsciiGraph {}

impl AsciiGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, keeping the first position seen for a repeated name
    ///
    /// Returns true if the node was new.
    pub fn add_node(&mut self, name: impl Into<String>, position: Position) -> bool {
        let name = name.into();
        if self.node_index.contains_key(&name) {
            trace!(node = %name, %position, "Node already present, keeping first position");
            return false;
        }
        trace!(node = %name, %position, "Adding node to graph");
        self.node_index.insert(name.clone(), self.nodes.len());
        self.nodes.push(NodeData { name, position });
        true
    }

    /// Add an edge, replacing the attributes of any edge between the same pair
    pub fn add_edge(&mut self, edge: EdgeData) {
        trace!(
            source = %edge.source,
            target = %edge.target,
            length = edge.length,
            label = ?edge.label,
            "Adding edge to graph"
        );
        let key = edge_key(&edge.source, &edge.target);
        match self.edge_index.get(&key) {
            Some(&index) => self.edges[index] = edge,
            None => {
                self.edge_index.insert(key, self.edges.len());
                self.edges.push(edge);
            }
        }
    }

    /// Set the label of the edge between `a` and `b`
    ///
    /// Returns false if there is no such edge.
    pub fn set_label(&mut self, a: &str, b: &str, label: impl Into<String>) -> bool {
        match self.edge_index.get(&edge_key(a, b)) {
            Some(&index) => {
                self.edges[index].label = Some(label.into());
                true
            }
            None => false,
        }
    }

    pub fn node(&self, name: &str) -> Option<&NodeData> {
        self.node_index.get(name).map(|&index| &self.nodes[index])
    }

    /// Position of the first character of a node's name
    pub fn position(&self, name: &str) -> Option<Position> {
        self.node(name).map(|node| node.position)
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    /// Edge between `a` and `b`, in either order
    pub fn edge(&self, a: &str, b: &str) -> Option<&EdgeData> {
        self.edge_index
            .get(&edge_key(a, b))
            .map(|&index| &self.edges[index])
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_index.contains_key(&edge_key(a, b))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.edges.iter()
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.name.as_str())
    }

    /// `(source, target)` of every edge
    pub fn edge_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .iter()
            .map(|edge| (edge.source.as_str(), edge.target.as_str()))
    }

    /// Names of the nodes sharing an edge with `name`
    pub fn neighbours<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges.iter().filter_map(move |edge| {
            if edge.source == name {
                Some(edge.target.as_str())
            } else if edge.target == name {
                Some(edge.source.as_str())
            } else {
                None
            }
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Assemble a graph from scanned nodes, traced edges and labels
///
/// `node_chars` maps every character of every node name to that name.
/// A label is attached to the edge whose interior covers any of its
/// characters; when an edge passes through several labels the last one in
/// reading order wins. Labels on no edge are dropped.
pub fn build_graph(
    nodes: &BTreeMap<Position, String>,
    labels: &BTreeMap<Position, String>,
    node_chars: &HashMap<Position, &str>,
    traced: &[TracedEdge],
) -> AsciiGraph {
    let mut graph = AsciiGraph::new();

    for (position, name) in nodes {
        graph.add_node(name.as_str(), *position);
    }

    let mut edge_by_point: HashMap<Position, (&str, &str)> = HashMap::new();
    for edge in traced {
        let (Some(&source), Some(&target)) =
            (node_chars.get(&edge.start()), node_chars.get(&edge.end()))
        else {
            continue;
        };
        for point in edge.points() {
            edge_by_point.insert(*point, (source, target));
        }
        graph.add_edge(EdgeData {
            source: source.to_string(),
            target: target.to_string(),
            length: edge.points().len(),
            label: None,
            points: edge.points().to_vec(),
        });
    }

    for (root, label) in labels {
        let text = &label[1..label.len() - 1];
        let covered = (0..label.chars().count() as i64)
            .filter_map(|i| edge_by_point.get(&root.shifted(i)));
        for &(source, target) in covered {
            graph.set_label(source, target, text);
        }
    }

    debug!(
        node_count = graph.node_count(),
        edge_count = graph.edge_count(),
        "Built graph"
    );
    graph
}
