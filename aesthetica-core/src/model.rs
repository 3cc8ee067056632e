// Node/edge graph built from the page records

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub caption: Option<String>,
}

impl Node {
    /// A node known only by name, created because another page referenced it
    pub fn dangling(name: &str) -> Self {
        Self {
            id: name.to_string(),
            label: name.to_string(),
            ..Self::default()
        }
    }

    pub fn is_dangling(&self) -> bool {
        self.url.is_none() && self.image.is_none() && self.caption.is_none()
    }
}

/// Undirected edge. `source` is the endpoint that was seen first.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Node table plus an edge table keyed by the unordered endpoint pair.
///
/// Nodes and edges keep insertion order, which is what makes exports
/// reproducible across runs.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    edge_index: HashMap<(usize, usize), usize>,
    /// Distinct incident edges per node, parallel to `nodes`
    degrees: Vec<usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert `node`, replacing the attributes of an existing node with the
    /// same id. The node keeps its original position in the table.
    pub fn upsert_node(&mut self, node: Node) {
        match self.node_index.get(&node.id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.node_index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
                self.degrees.push(0);
            }
        }
    }

    /// Create a label-only node for `id` unless one already exists.
    /// Returns true when a node was created.
    pub fn ensure_node(&mut self, id: &str) -> bool {
        if self.has_node(id) {
            return false;
        }
        self.upsert_node(Node::dangling(id));
        true
    }

    /// Add an edge between two existing nodes, or bump the weight of the edge
    /// already joining them. Self-loops and unknown endpoints are refused and
    /// yield `None`; otherwise the edge's new weight is returned.
    pub fn add_or_increment_edge(&mut self, source: &str, target: &str) -> Option<u32> {
        if source == target {
            return None;
        }
        let a = *self.node_index.get(source)?;
        let b = *self.node_index.get(target)?;
        let key = (a.min(b), a.max(b));

        match self.edge_index.get(&key) {
            Some(&i) => {
                self.edges[i].weight += 1;
                Some(self.edges[i].weight)
            }
            None => {
                self.edge_index.insert(key, self.edges.len());
                self.degrees[a] += 1;
                self.degrees[b] += 1;
                self.edges.push(Edge {
                    source: source.to_string(),
                    target: target.to_string(),
                    weight: 1,
                });
                Some(1)
            }
        }
    }

    /// Number of distinct edges touching `id`, ignoring weight
    pub fn degree(&self, id: &str) -> usize {
        self.node_index.get(id).map_or(0, |&i| self.degrees[i])
    }

    /// Node with the most distinct neighbours; the earliest wins a tie
    pub fn most_connected(&self) -> Option<(&Node, usize)> {
        self.nodes
            .iter()
            .map(|node| (node, self.degree(&node.id)))
            .filter(|&(_, degree)| degree > 0)
            .fold(None, |best: Option<(&Node, usize)>, candidate| match best {
                Some(best) if best.1 >= candidate.1 => Some(best),
                _ => Some(candidate),
            })
    }
}
