//! The canonical dataset: `{"nodes": [{"id": ..., "attributes": {...}}]}`.
//!
//! Held as an untyped JSON tree so that every field this crate does not own
//! survives a load/save cycle unchanged, including key order.

use crate::error::{Error, Result};
use crate::sync::{LayoutSummary, size_for_degree};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeStats {
    pub positions_applied: usize,
    pub sizes_applied: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    root: Value,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(Error::InvalidDataset(
                "top level must be a JSON object".to_string(),
            ));
        }
        Ok(Self { root })
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root
            .get("nodes")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Copy positions and degree-derived sizes onto every node.
    ///
    /// A node gets `x`/`y` only when the layout has a position for its id,
    /// but always gets a `size`; ids the layout never mentions count as
    /// degree 0. Running this twice with the same layout changes nothing the
    /// second time.
    pub fn apply_layout(&mut self, layout: &LayoutSummary) -> Result<MergeStats> {
        let mut stats = MergeStats::default();

        let nodes = match self.root.get_mut("nodes") {
            None | Some(Value::Null) => return Ok(stats),
            Some(Value::Array(nodes)) => nodes,
            Some(_) => {
                return Err(Error::InvalidDataset(
                    "\"nodes\" must be an array".to_string(),
                ));
            }
        };

        for (index, node) in nodes.iter_mut().enumerate() {
            let Value::Object(node) = node else {
                return Err(Error::InvalidDataset(format!(
                    "node #{} is not an object",
                    index
                )));
            };
            let id = node_id(node);
            let attributes = attributes_mut(node, id.as_deref().unwrap_or("<no id>"))?;

            let position = id.as_deref().and_then(|id| layout.position(id));
            if let Some(position) = position {
                attributes.insert("x".to_string(), Value::from(position.x));
                attributes.insert("y".to_string(), Value::from(position.y));
                stats.positions_applied += 1;
            }

            let degree = id.as_deref().map_or(0, |id| layout.degree(id));
            attributes.insert(
                "size".to_string(),
                Value::from(f64::from(size_for_degree(degree))),
            );
            stats.sizes_applied += 1;
        }

        Ok(stats)
    }

    /// Two-space indented JSON with non-ASCII text left unescaped
    pub fn to_pretty_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.root)?)
    }
}

/// Identity of a dataset node as text. Strings are taken verbatim, other
/// scalars by their JSON form.
fn node_id(node: &Map<String, Value>) -> Option<String> {
    match node.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn attributes_mut<'a>(
    node: &'a mut Map<String, Value>,
    id: &str,
) -> Result<&'a mut Map<String, Value>> {
    let slot = node
        .entry("attributes")
        .or_insert_with(|| Value::Object(Map::new()));
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut().ok_or_else(|| {
        Error::InvalidDataset(format!("attributes of node {} is not an object", id))
    })
}
