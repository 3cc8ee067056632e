use crate::KNOWN_NAMESPACES;
use crate::error::{GexfError, Result};
use crate::graph::{GexfDocument, GexfEdge, GexfNode, Position};
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Which schema an element belongs to, relative to the document's namespace pair
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scope {
    Base,
    Viz,
    Foreign,
}

/// Open and parse a GEXF file.
pub fn read_gexf_file(path: &Path) -> Result<GexfDocument> {
    let file = File::open(path)?;
    read_gexf(BufReader::new(file))
}

/// Parse a GEXF document from any buffered source.
///
/// The base/viz namespace pair is chosen from the root element and must be one
/// of [`KNOWN_NAMESPACES`]. Elements bound to any other namespace are ignored.
/// A `viz:position` missing either coordinate, or carrying a value that is not
/// a finite number, leaves the node without a position.
pub fn read_gexf<R: BufRead>(source: R) -> Result<GexfDocument> {
    let mut reader = NsReader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut doc = GexfDocument::default();
    let mut pair: Option<(&str, &str)> = None;

    // Open <node> elements, innermost last; `None` for one without an id.
    // Hierarchical GEXF nests nodes inside nodes.
    let mut open_nodes: Vec<Option<GexfNode>> = Vec::new();
    let mut attribute_titles: HashMap<String, String> = HashMap::new();
    let mut in_node_attributes = false;
    let mut in_creator = false;

    loop {
        buf.clear();
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;

        let (element, self_closing) = match event {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::End(e) => {
                let scope = classify(&ns, pair);
                if scope == Scope::Base {
                    match e.local_name().as_ref() {
                        b"node" => {
                            if let Some(Some(node)) = open_nodes.pop() {
                                doc.nodes.push(node);
                            }
                        }
                        b"attributes" => in_node_attributes = false,
                        b"creator" => in_creator = false,
                        _ => {}
                    }
                }
                continue;
            }
            Event::Text(text) => {
                if in_creator {
                    doc.creator = Some(text.unescape()?.into_owned());
                }
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        if pair.is_none() {
            pair = Some(root_namespaces(&ns, &element)?);
            continue;
        }

        let scope = classify(&ns, pair);
        match (scope, element.local_name().as_ref()) {
            (Scope::Base, b"creator") => in_creator = !self_closing,
            (Scope::Base, b"attributes") => {
                let class = attr(&element, b"class")?;
                in_node_attributes = !self_closing && class.as_deref() == Some("node");
            }
            (Scope::Base, b"attribute") if in_node_attributes => {
                if let (Some(id), Some(title)) =
                    (attr(&element, b"id")?, attr(&element, b"title")?)
                {
                    attribute_titles.insert(id, title);
                }
            }
            (Scope::Base, b"node") => {
                let Some(id) = attr(&element, b"id")? else {
                    warn!("Ignoring GEXF node without an id");
                    if !self_closing {
                        open_nodes.push(None);
                    }
                    continue;
                };
                let mut node = GexfNode::new(id);
                node.label = attr(&element, b"label")?;
                if self_closing {
                    doc.nodes.push(node);
                } else {
                    open_nodes.push(Some(node));
                }
            }
            (Scope::Base, b"attvalue") => {
                if let Some(node) = open_nodes.last_mut().and_then(Option::as_mut) {
                    if let (Some(key), Some(value)) =
                        (attr(&element, b"for")?, attr(&element, b"value")?)
                    {
                        let title = attribute_titles.get(&key).cloned().unwrap_or(key);
                        node.attributes.push((title, value));
                    }
                }
            }
            (Scope::Viz, b"position") => {
                if let Some(node) = open_nodes.last_mut().and_then(Option::as_mut) {
                    node.position = parse_position(
                        attr(&element, b"x")?.as_deref(),
                        attr(&element, b"y")?.as_deref(),
                    );
                    if node.position.is_none() {
                        debug!("No usable position for node {}", node.id);
                    }
                }
            }
            (Scope::Base, b"edge") => {
                match (attr(&element, b"source")?, attr(&element, b"target")?) {
                    (Some(source), Some(target)) => {
                        let weight = attr(&element, b"weight")?.and_then(|w| w.parse().ok());
                        doc.edges.push(GexfEdge {
                            source,
                            target,
                            weight,
                        });
                    }
                    _ => warn!("Ignoring GEXF edge without source or target"),
                }
            }
            _ => {}
        }
    }

    if pair.is_none() {
        return Err(GexfError::NotGexf("document has no root element".to_string()));
    }

    debug!(
        "Parsed GEXF: {} nodes, {} edges",
        doc.nodes.len(),
        doc.edges.len()
    );
    Ok(doc)
}

/// Parse a coordinate pair, rejecting partial, non-numeric or non-finite input
pub fn parse_position(x: Option<&str>, y: Option<&str>) -> Option<Position> {
    let x: f64 = x?.trim().parse().ok()?;
    let y: f64 = y?.trim().parse().ok()?;
    if x.is_finite() && y.is_finite() {
        Some(Position { x, y })
    } else {
        None
    }
}

fn root_namespaces(
    ns: &ResolveResult,
    root: &BytesStart,
) -> Result<(&'static str, &'static str)> {
    if root.local_name().as_ref() != b"gexf" {
        return Err(GexfError::NotGexf(format!(
            "unexpected root element <{}>",
            String::from_utf8_lossy(root.name().as_ref())
        )));
    }
    let ResolveResult::Bound(Namespace(uri)) = ns else {
        return Err(GexfError::NotGexf(
            "root element has no namespace".to_string(),
        ));
    };
    KNOWN_NAMESPACES
        .iter()
        .find(|(base, _)| base.as_bytes() == *uri)
        .copied()
        .ok_or_else(|| {
            GexfError::NotGexf(format!(
                "unsupported namespace {}",
                String::from_utf8_lossy(uri)
            ))
        })
}

fn classify(ns: &ResolveResult, pair: Option<(&str, &str)>) -> Scope {
    match (ns, pair) {
        (ResolveResult::Bound(Namespace(uri)), Some((base, viz))) => {
            if *uri == base.as_bytes() {
                Scope::Base
            } else if *uri == viz.as_bytes() {
                Scope::Viz
            } else {
                Scope::Foreign
            }
        }
        _ => Scope::Foreign,
    }
}

fn attr(element: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == name {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
