// Graph Builder: page records -> deduplicated, weighted graph -> GEXF/TSV

use crate::config::BuildOptions;
use crate::document::{SourceRecord, load_records};
use crate::error::Result;
use crate::export::{edges_tsv, gexf_bytes, nodes_tsv};
use crate::files::write_atomic;
use crate::model::{Graph, Node};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Counts reported after a build run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildSummary {
    pub records_read: usize,
    pub records_skipped: usize,
    pub nodes: usize,
    pub dangling_nodes: usize,
    pub edges: usize,
    /// Id and degree of the node with the most neighbours, if any edge exists
    pub most_connected: Option<(String, usize)>,
    pub written: Vec<PathBuf>,
}

/// Build the graph from records already in processing order.
///
/// Page nodes are all created before any edge is added, so a page that is
/// referenced before its own record is reached still gets its attributes.
/// Two records with the same title collapse to one node carrying the later
/// record's attributes.
pub fn build_graph(records: &[SourceRecord]) -> Graph {
    let mut graph = Graph::new();

    for source in records {
        let record = &source.record;
        let (image, caption) = record
            .groups()
            .first()
            .map(|g| (g.image().to_string(), g.caption().to_string()))
            .unwrap_or_default();

        let id = source.node_id();
        if let Some(previous) = graph.node(&id) {
            warn!(
                "Duplicate page title {} in {}, replacing attributes from {}",
                id,
                source.path.display(),
                previous.url.as_deref().unwrap_or_default()
            );
        }
        graph.upsert_node(Node {
            label: id.clone(),
            id,
            url: Some(record.url().to_string()),
            image: Some(image),
            caption: Some(caption),
        });
    }

    for source in records {
        let id = source.node_id();
        for name in source.record.related_names() {
            if graph.ensure_node(&name) {
                debug!("Created dangling node {}", name);
            }
            graph.add_or_increment_edge(&id, &name);
        }
    }

    graph
}

/// Load the record directory, build the graph and write every requested
/// output. All outputs are rendered before the first file is written.
pub fn run_build(options: &BuildOptions) -> Result<BuildSummary> {
    let set = load_records(&options.json_dir)?;
    let graph = build_graph(&set.records);

    let dangling_nodes = graph.nodes().iter().filter(|n| n.is_dangling()).count();
    info!(
        "Built graph from {} records ({} skipped): {} nodes ({} dangling), {} edges",
        set.records.len(),
        set.skipped.len(),
        graph.node_count(),
        dangling_nodes,
        graph.edge_count()
    );

    let mut outputs = vec![(options.out_gexf.clone(), gexf_bytes(&graph)?)];
    if let Some(path) = &options.out_nodes_tsv {
        outputs.push((path.clone(), nodes_tsv(&graph).into_bytes()));
    }
    if let Some(path) = &options.out_edges_tsv {
        outputs.push((path.clone(), edges_tsv(&graph).into_bytes()));
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (path, bytes) in outputs {
        write_atomic(&path, &bytes)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    let most_connected = graph
        .most_connected()
        .map(|(node, degree)| (node.id.clone(), degree));

    Ok(BuildSummary {
        records_read: set.records.len(),
        records_skipped: set.skipped.len(),
        nodes: graph.node_count(),
        dangling_nodes,
        edges: graph.edge_count(),
        most_connected,
        written,
    })
}
