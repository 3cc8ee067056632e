// Synchronizer: layout GEXF + canonical dataset -> merged dataset (+ zlib copy)

use crate::compress::compress;
use crate::config::{BASE_SIZE, SIZE_STEP, SyncConfig};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::files::write_atomic;
use aesthetica_gexf::{GexfDocument, Position, read_gexf_file};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// `floor(degree / SIZE_STEP) + BASE_SIZE`
pub fn size_for_degree(degree: u32) -> u32 {
    degree / SIZE_STEP + BASE_SIZE
}

/// Positions and degrees extracted from a laid-out GEXF
#[derive(Debug, Clone, Default)]
pub struct LayoutSummary {
    positions: HashMap<String, Position>,
    degrees: HashMap<String, u32>,
}

impl LayoutSummary {
    /// Every positioned node starts at degree 0; each edge element present in
    /// the file then adds one to both of its endpoints. Edge weights are not
    /// consulted.
    pub fn from_document(doc: &GexfDocument) -> Self {
        let mut summary = Self::default();

        for node in &doc.nodes {
            if let Some(position) = node.position {
                summary.positions.insert(node.id.clone(), position);
                summary.degrees.entry(node.id.clone()).or_insert(0);
            }
        }

        for edge in &doc.edges {
            *summary.degrees.entry(edge.source.clone()).or_insert(0) += 1;
            *summary.degrees.entry(edge.target.clone()).or_insert(0) += 1;
        }

        summary
    }

    pub fn position(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    /// Degree of `id`, 0 for ids the layout never mentions
    pub fn degree(&self, id: &str) -> u32 {
        self.degrees.get(id).copied().unwrap_or(0)
    }

    pub fn positions_len(&self) -> usize {
        self.positions.len()
    }

    pub fn degrees_len(&self) -> usize {
        self.degrees.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncSummary {
    pub positions_loaded: usize,
    pub degrees_computed: usize,
    pub positions_applied: usize,
    pub sizes_applied: usize,
    pub dataset_out: PathBuf,
    /// Path and byte length of the compressed copy, when one was written
    pub compressed: Option<(PathBuf, usize)>,
}

/// Run the whole synchronization described by `config`.
///
/// Both inputs must exist before anything is read; the merged dataset and
/// its compressed copy are fully rendered in memory before either file is
/// replaced.
pub fn run_sync(config: &SyncConfig) -> Result<SyncSummary> {
    require_file("Layout file", &config.layout_path)?;
    require_file("Dataset file", &config.dataset_in)?;

    let layout = LayoutSummary::from_document(&read_gexf_file(&config.layout_path)?);
    info!(
        "Loaded positions for {} nodes from {}",
        layout.positions_len(),
        config.layout_path.display()
    );
    info!(
        "Computed degrees for {} nodes from layout edges",
        layout.degrees_len()
    );

    let mut dataset = Dataset::load(&config.dataset_in)?;
    let stats = dataset.apply_layout(&layout)?;
    let bytes = dataset.to_pretty_bytes()?;
    let compressed = if config.compress {
        Some(compress(&bytes)?)
    } else {
        None
    };

    write_atomic(&config.dataset_out, &bytes)?;
    info!(
        "Updated {} positions and {} sizes, wrote {}",
        stats.positions_applied,
        stats.sizes_applied,
        config.dataset_out.display()
    );

    let compressed = match compressed {
        Some(data) => {
            write_atomic(&config.compressed_out, &data)?;
            info!(
                "Wrote zlib-compressed dataset to {} ({} bytes)",
                config.compressed_out.display(),
                data.len()
            );
            Some((config.compressed_out.clone(), data.len()))
        }
        None => None,
    };

    Ok(SyncSummary {
        positions_loaded: layout.positions_len(),
        degrees_computed: layout.degrees_len(),
        positions_applied: stats.positions_applied,
        sizes_applied: stats.sizes_applied,
        dataset_out: config.dataset_out.clone(),
        compressed,
    })
}

fn require_file(kind: &'static str, path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingInput {
            kind,
            path: path.to_path_buf(),
        })
    }
}
