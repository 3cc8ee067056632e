// In-memory shape of a GEXF document, limited to what the pipelines exchange

/// A node's `viz:position`. The z coordinate is neither read nor kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GexfNode {
    pub id: String,
    pub label: Option<String>,
    /// Node attribute values as `(title, value)` pairs.
    pub attributes: Vec<(String, String)>,
    pub position: Option<Position>,
}

impl GexfNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, title: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GexfEdge {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GexfDocument {
    pub creator: Option<String>,
    pub nodes: Vec<GexfNode>,
    pub edges: Vec<GexfEdge>,
}

impl GexfDocument {
    /// Distinct node attribute titles in first-seen order. The writer uses the
    /// index into this list as the attribute id.
    pub fn attribute_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = Vec::new();
        for node in &self.nodes {
            for (title, _) in &node.attributes {
                if !titles.contains(&title.as_str()) {
                    titles.push(title);
                }
            }
        }
        titles
    }
}
