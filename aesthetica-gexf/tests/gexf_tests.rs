// Tests for GEXF reading and writing

use aesthetica_gexf::{
    GEXF_NS, GexfDocument, GexfEdge, GexfError, GexfNode, Position, VIZ_NS, read_gexf,
    read_gexf_file, write_gexf,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_document() -> GexfDocument {
    let mut cottagecore = GexfNode::new("Cottagecore");
    cottagecore.label = Some("Cottagecore".to_string());
    cottagecore.attributes = vec![
        ("url".to_string(), "https://aesthetics.fandom.com/wiki/Cottagecore".to_string()),
        ("image".to_string(), "cottage.png".to_string()),
        ("caption".to_string(), "Bread & \"tea\"".to_string()),
    ];

    let mut goblincore = GexfNode::new("Goblincore");
    goblincore.label = Some("Goblincore".to_string());

    GexfDocument {
        creator: Some("aesthetica".to_string()),
        nodes: vec![cottagecore, goblincore],
        edges: vec![GexfEdge {
            source: "Cottagecore".to_string(),
            target: "Goblincore".to_string(),
            weight: Some(2.0),
        }],
    }
}

fn render(doc: &GexfDocument) -> String {
    let mut out = Vec::new();
    write_gexf(doc, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================================
// Writer Tests
// ============================================================================

#[test]
fn test_writer_declares_both_namespaces() {
    let xml = render(&sample_document());
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(&format!("xmlns=\"{}\"", GEXF_NS)));
    assert!(xml.contains(&format!("xmlns:viz=\"{}\"", VIZ_NS)));
    assert!(xml.contains("defaultedgetype=\"undirected\""));
}

#[test]
fn test_writer_emits_attribute_declarations_once() {
    let xml = render(&sample_document());
    assert_eq!(xml.matches("<attribute ").count(), 3);
    assert!(xml.contains("title=\"url\""));
    assert!(xml.contains("title=\"image\""));
    assert!(xml.contains("title=\"caption\""));
}

#[test]
fn test_writer_escapes_attribute_values() {
    let xml = render(&sample_document());
    assert!(xml.contains("Bread &amp; &quot;tea&quot;"));
}

#[test]
fn test_writer_emits_edge_weight() {
    let xml = render(&sample_document());
    assert!(xml.contains("source=\"Cottagecore\""));
    assert!(xml.contains("target=\"Goblincore\""));
    assert!(xml.contains("weight=\"2\""));
}

#[test]
fn test_writer_is_deterministic() {
    let doc = sample_document();
    assert_eq!(render(&doc), render(&doc));
}

#[test]
fn test_writer_output_reads_back() {
    let doc = sample_document();
    let parsed = read_gexf(render(&doc).as_bytes()).unwrap();

    assert_eq!(parsed.creator.as_deref(), Some("aesthetica"));
    assert_eq!(parsed.nodes.len(), 2);
    assert_eq!(parsed.nodes[0].attribute("caption"), Some("Bread & \"tea\""));
    assert_eq!(parsed.nodes[1].label.as_deref(), Some("Goblincore"));
    assert!(parsed.nodes[1].attributes.is_empty());
    assert_eq!(parsed.edges, doc.edges);
}

// ============================================================================
// Reader Tests
// ============================================================================

const LAID_OUT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://gexf.net/1.3" xmlns:viz="http://gexf.net/1.3/viz" version="1.3">
  <graph defaultedgetype="undirected">
    <nodes>
      <node id="A" label="A">
        <viz:position x="10.5" y="-3.25" z="0.0"/>
        <viz:size value="4.0"/>
      </node>
      <node id="B" label="B">
        <viz:position x="1.0"/>
      </node>
      <node id="C" label="C">
        <viz:position x="oops" y="2"/>
      </node>
      <node id="D"/>
      <node label="no id"/>
    </nodes>
    <edges>
      <edge id="0" source="A" target="B" weight="3.0"/>
      <edge id="1" source="A"/>
    </edges>
  </graph>
</gexf>
"#;

#[test]
fn test_reader_collects_positions() {
    let doc = read_gexf(LAID_OUT.as_bytes()).unwrap();
    let a = doc.nodes.iter().find(|n| n.id == "A").unwrap();
    assert_eq!(a.position, Some(Position { x: 10.5, y: -3.25 }));
}

#[test]
fn test_reader_skips_partial_and_non_numeric_positions() {
    let doc = read_gexf(LAID_OUT.as_bytes()).unwrap();
    for id in ["B", "C", "D"] {
        let node = doc.nodes.iter().find(|n| n.id == id).unwrap();
        assert_eq!(node.position, None, "node {} should have no position", id);
    }
}

#[test]
fn test_reader_ignores_nodes_without_id() {
    let doc = read_gexf(LAID_OUT.as_bytes()).unwrap();
    assert_eq!(doc.nodes.len(), 4);
}

#[test]
fn test_reader_ignores_edges_without_target() {
    let doc = read_gexf(LAID_OUT.as_bytes()).unwrap();
    assert_eq!(doc.edges.len(), 1);
    assert_eq!(doc.edges[0].weight, Some(3.0));
}

#[test]
fn test_reader_accepts_draft_namespace() {
    let xml = r#"<gexf xmlns="http://www.gexf.net/1.2draft" xmlns:viz="http://www.gexf.net/1.2draft/viz">
      <graph><nodes><node id="x"><viz:position x="1" y="2"/></node></nodes></graph>
    </gexf>"#;
    let doc = read_gexf(xml.as_bytes()).unwrap();
    assert_eq!(doc.nodes[0].position, Some(Position { x: 1.0, y: 2.0 }));
}

#[test]
fn test_reader_ignores_position_from_foreign_namespace() {
    let xml = r#"<gexf xmlns="http://gexf.net/1.3" xmlns:viz="http://www.gexf.net/1.2draft/viz">
      <graph><nodes><node id="x"><viz:position x="1" y="2"/></node></nodes></graph>
    </gexf>"#;
    let doc = read_gexf(xml.as_bytes()).unwrap();
    assert_eq!(doc.nodes[0].position, None);
}

#[test]
fn test_reader_keeps_parent_of_nested_nodes() {
    let xml = r#"<gexf xmlns="http://gexf.net/1.3" xmlns:viz="http://gexf.net/1.3/viz">
      <graph><nodes>
        <node id="parent">
          <viz:position x="1" y="2"/>
          <nodes>
            <node id="child"><viz:position x="3" y="4"/></node>
            <node id="leaf"/>
          </nodes>
        </node>
      </nodes></graph>
    </gexf>"#;
    let doc = read_gexf(xml.as_bytes()).unwrap();

    let mut ids: Vec<&str> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["child", "leaf", "parent"]);

    let parent = doc.nodes.iter().find(|n| n.id == "parent").unwrap();
    assert_eq!(parent.position, Some(Position { x: 1.0, y: 2.0 }));
    let child = doc.nodes.iter().find(|n| n.id == "child").unwrap();
    assert_eq!(child.position, Some(Position { x: 3.0, y: 4.0 }));
}

#[test]
fn test_reader_nested_under_node_without_id() {
    let xml = r#"<gexf xmlns="http://gexf.net/1.3" xmlns:viz="http://gexf.net/1.3/viz">
      <graph><nodes>
        <node id="outer">
          <nodes>
            <node label="anonymous">
              <viz:position x="9" y="9"/>
              <nodes><node id="inner"><viz:position x="5" y="6"/></node></nodes>
            </node>
          </nodes>
          <viz:position x="7" y="8"/>
        </node>
      </nodes></graph>
    </gexf>"#;
    let doc = read_gexf(xml.as_bytes()).unwrap();

    assert_eq!(doc.nodes.len(), 2);
    let outer = doc.nodes.iter().find(|n| n.id == "outer").unwrap();
    assert_eq!(outer.position, Some(Position { x: 7.0, y: 8.0 }));
    let inner = doc.nodes.iter().find(|n| n.id == "inner").unwrap();
    assert_eq!(inner.position, Some(Position { x: 5.0, y: 6.0 }));
}

#[test]
fn test_reader_rejects_unknown_root() {
    let result = read_gexf("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\"/>".as_bytes());
    assert!(matches!(result, Err(GexfError::NotGexf(_))));
}

#[test]
fn test_reader_rejects_empty_input() {
    let result = read_gexf("".as_bytes());
    assert!(matches!(result, Err(GexfError::NotGexf(_))));
}

#[test]
fn test_read_gexf_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    write!(temp_file, "{}", LAID_OUT)?;

    let doc = read_gexf_file(temp_file.path())?;
    assert_eq!(doc.nodes.len(), 4);

    Ok(())
}

#[test]
fn test_read_gexf_file_missing() {
    let result = read_gexf_file(std::path::Path::new("/definitely/not/here.gexf"));
    assert!(matches!(result, Err(GexfError::IoError(_))));
}
