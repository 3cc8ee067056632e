use crate::error::Result;
use crate::graph::{GexfDocument, GexfNode};
use crate::{GEXF_NS, VIZ_NS};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Serialize `doc` as an undirected, static GEXF 1.3 graph.
///
/// Output is a pure function of the document: no timestamps are written, so
/// identical graphs produce identical bytes.
pub fn write_gexf<W: Write>(doc: &GexfDocument, sink: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("gexf");
    root.push_attribute(("xmlns", GEXF_NS));
    root.push_attribute(("xmlns:viz", VIZ_NS));
    root.push_attribute(("version", "1.3"));
    writer.write_event(Event::Start(root))?;

    if let Some(creator) = &doc.creator {
        writer.write_event(Event::Start(BytesStart::new("meta")))?;
        writer.write_event(Event::Start(BytesStart::new("creator")))?;
        writer.write_event(Event::Text(BytesText::new(creator)))?;
        writer.write_event(Event::End(BytesEnd::new("creator")))?;
        writer.write_event(Event::End(BytesEnd::new("meta")))?;
    }

    let mut graph = BytesStart::new("graph");
    graph.push_attribute(("defaultedgetype", "undirected"));
    graph.push_attribute(("mode", "static"));
    writer.write_event(Event::Start(graph))?;

    let titles = doc.attribute_titles();
    if !titles.is_empty() {
        let mut attributes = BytesStart::new("attributes");
        attributes.push_attribute(("class", "node"));
        attributes.push_attribute(("mode", "static"));
        writer.write_event(Event::Start(attributes))?;
        for (id, title) in titles.iter().enumerate() {
            let id = id.to_string();
            let mut attribute = BytesStart::new("attribute");
            attribute.push_attribute(("id", id.as_str()));
            attribute.push_attribute(("title", *title));
            attribute.push_attribute(("type", "string"));
            writer.write_event(Event::Empty(attribute))?;
        }
        writer.write_event(Event::End(BytesEnd::new("attributes")))?;
    }

    writer.write_event(Event::Start(BytesStart::new("nodes")))?;
    for node in &doc.nodes {
        write_node(&mut writer, node, &titles)?;
    }
    writer.write_event(Event::End(BytesEnd::new("nodes")))?;

    writer.write_event(Event::Start(BytesStart::new("edges")))?;
    for (id, edge) in doc.edges.iter().enumerate() {
        let id = id.to_string();
        let mut element = BytesStart::new("edge");
        element.push_attribute(("id", id.as_str()));
        element.push_attribute(("source", edge.source.as_str()));
        element.push_attribute(("target", edge.target.as_str()));
        if let Some(weight) = edge.weight {
            element.push_attribute(("weight", weight.to_string().as_str()));
        }
        writer.write_event(Event::Empty(element))?;
    }
    writer.write_event(Event::End(BytesEnd::new("edges")))?;

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("gexf")))?;

    let mut sink = writer.into_inner();
    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &GexfNode, titles: &[&str]) -> Result<()> {
    let mut element = BytesStart::new("node");
    element.push_attribute(("id", node.id.as_str()));
    if let Some(label) = &node.label {
        element.push_attribute(("label", label.as_str()));
    }

    if node.attributes.is_empty() && node.position.is_none() {
        writer.write_event(Event::Empty(element))?;
        return Ok(());
    }

    writer.write_event(Event::Start(element))?;

    if !node.attributes.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("attvalues")))?;
        for (title, value) in &node.attributes {
            let id = titles
                .iter()
                .position(|t| t == title)
                .unwrap_or_default()
                .to_string();
            let mut attvalue = BytesStart::new("attvalue");
            attvalue.push_attribute(("for", id.as_str()));
            attvalue.push_attribute(("value", value.as_str()));
            writer.write_event(Event::Empty(attvalue))?;
        }
        writer.write_event(Event::End(BytesEnd::new("attvalues")))?;
    }

    if let Some(position) = node.position {
        let x = position.x.to_string();
        let y = position.y.to_string();
        let mut element = BytesStart::new("viz:position");
        element.push_attribute(("x", x.as_str()));
        element.push_attribute(("y", y.as_str()));
        element.push_attribute(("z", "0.0"));
        writer.write_event(Event::Empty(element))?;
    }

    writer.write_event(Event::End(BytesEnd::new("node")))?;
    Ok(())
}
