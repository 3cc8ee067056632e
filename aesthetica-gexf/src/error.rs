use thiserror::Error;

#[derive(Error, Debug)]
pub enum GexfError {
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    AttrError(#[from] quick_xml::events::attributes::AttrError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not a GEXF document: {0}")]
    NotGexf(String),
}

pub type Result<T> = std::result::Result<T, GexfError>;
