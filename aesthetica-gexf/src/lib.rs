pub mod error;
pub mod graph;
pub mod reader;
pub mod writer;

pub use error::GexfError;
pub use graph::{GexfDocument, GexfEdge, GexfNode, Position};
pub use reader::{read_gexf, read_gexf_file};
pub use writer::write_gexf;

/// GEXF 1.3 base schema namespace, emitted by the writer.
pub const GEXF_NS: &str = "http://gexf.net/1.3";
/// GEXF 1.3 visualization namespace (`viz:position`, `viz:size`).
pub const VIZ_NS: &str = "http://gexf.net/1.3/viz";

/// Base/viz namespace pairs the reader understands. Gephi writes 1.3,
/// older tooling still writes the draft schemas.
pub const KNOWN_NAMESPACES: &[(&str, &str)] = &[
    (GEXF_NS, VIZ_NS),
    (
        "http://www.gexf.net/1.2draft",
        "http://www.gexf.net/1.2draft/viz",
    ),
    (
        "http://www.gexf.net/1.1draft",
        "http://www.gexf.net/1.1draft/viz",
    ),
];
