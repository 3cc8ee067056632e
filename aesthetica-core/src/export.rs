// GEXF and TSV renderings of the built graph

use crate::error::Result;
use crate::model::Graph;
use aesthetica_gexf::{GexfDocument, GexfEdge, GexfNode, write_gexf};
use std::borrow::Cow;

const CREATOR: &str = concat!("aesthetica ", env!("CARGO_PKG_VERSION"));

pub fn to_gexf_document(graph: &Graph) -> GexfDocument {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            let mut gexf_node = GexfNode::new(node.id.as_str());
            gexf_node.label = Some(node.label.clone());
            for (title, value) in [
                ("url", &node.url),
                ("image", &node.image),
                ("caption", &node.caption),
            ] {
                if let Some(value) = value {
                    gexf_node.attributes.push((title.to_string(), value.clone()));
                }
            }
            gexf_node
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| GexfEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            weight: Some(f64::from(edge.weight)),
        })
        .collect();

    GexfDocument {
        creator: Some(CREATOR.to_string()),
        nodes,
        edges,
    }
}

pub fn gexf_bytes(graph: &Graph) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_gexf(&to_gexf_document(graph), &mut out)?;
    Ok(out)
}

/// `id label url image caption`, one row per node, with a header row
pub fn nodes_tsv(graph: &Graph) -> String {
    let mut out = String::from("id\tlabel\turl\timage\tcaption\n");
    for node in graph.nodes() {
        let row = [
            node.id.as_str(),
            node.label.as_str(),
            node.url.as_deref().unwrap_or_default(),
            node.image.as_deref().unwrap_or_default(),
            node.caption.as_deref().unwrap_or_default(),
        ];
        push_row(&mut out, &row);
    }
    out
}

/// `source target weight`, one row per edge, with a header row
pub fn edges_tsv(graph: &Graph) -> String {
    let mut out = String::from("source\ttarget\tweight\n");
    for edge in graph.edges() {
        let weight = edge.weight.to_string();
        push_row(&mut out, &[edge.source.as_str(), edge.target.as_str(), weight.as_str()]);
    }
    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    let fields: Vec<Cow<'_, str>> = fields.iter().map(|f| tsv_field(f)).collect();
    out.push_str(&fields.join("\t"));
    out.push('\n');
}

/// Replace characters that would break the row/column structure
fn tsv_field(value: &str) -> Cow<'_, str> {
    if value.contains(['\t', '\r', '\n']) {
        Cow::Owned(value.replace(['\t', '\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
