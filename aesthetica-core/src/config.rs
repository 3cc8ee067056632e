//! Run configuration for both pipelines.

use std::path::PathBuf;

/// Visual size grows by one for every `SIZE_STEP` incident edges.
pub const SIZE_STEP: u32 = 5;
/// Size of a node with no incident edges.
pub const BASE_SIZE: u32 = 1;

pub const DEFAULT_LAYOUT_PATH: &str = "characters.gexf";
pub const DEFAULT_DATASET_PATH: &str = "characters.json";
pub const DEFAULT_COMPRESSED_PATH: &str = "characters.json.gz";

/// Inputs and outputs of a Graph Builder run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding one JSON record per scraped page.
    pub json_dir: PathBuf,
    pub out_gexf: PathBuf,
    pub out_nodes_tsv: Option<PathBuf>,
    pub out_edges_tsv: Option<PathBuf>,
}

/// Inputs and outputs of a Synchronizer run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// GEXF exported by the layout tool.
    pub layout_path: PathBuf,
    /// Canonical dataset to read.
    pub dataset_in: PathBuf,
    /// Where the merged dataset is written. Usually the same file as `dataset_in`.
    pub dataset_out: PathBuf,
    /// Whether to write the zlib copy of the merged dataset.
    pub compress: bool,
    pub compressed_out: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            layout_path: PathBuf::from(DEFAULT_LAYOUT_PATH),
            dataset_in: PathBuf::from(DEFAULT_DATASET_PATH),
            dataset_out: PathBuf::from(DEFAULT_DATASET_PATH),
            compress: true,
            compressed_out: PathBuf::from(DEFAULT_COMPRESSED_PATH),
        }
    }
}
