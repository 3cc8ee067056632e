use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} not found: {}", .path.display())]
    MissingInput { kind: &'static str, path: PathBuf },

    #[error("Input directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("GEXF error: {0}")]
    Gexf(#[from] aesthetica_gexf::GexfError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
