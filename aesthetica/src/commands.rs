use aesthetica_core::config::{DEFAULT_COMPRESSED_PATH, DEFAULT_DATASET_PATH, DEFAULT_LAYOUT_PATH};
use clap::{arg, command};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("aesthetica")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("aesthetica")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress banner and non-essential output")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("build")
                .about(
                    "Builds the relationship graph from a folder of per-page JSON records and \
                writes it as GEXF for the layout tool.",
                )
                .arg(
                    arg!(-i --"json-dir" <DIR>)
                        .required(true)
                        .help("Folder with per-page JSON records"),
                )
                .arg(
                    arg!(-o --"out-gexf" <PATH>)
                        .required(true)
                        .help("Output .gexf path"),
                )
                .arg(
                    arg!(--"out-nodes-tsv" <PATH>)
                        .required(false)
                        .help("Optional nodes.tsv path"),
                )
                .arg(
                    arg!(--"out-edges-tsv" <PATH>)
                        .required(false)
                        .help("Optional edges.tsv path"),
                ),
        )
        .subcommand(
            command!("sync")
                .about(
                    "Merges laid-out positions and degree-based sizes from a GEXF into the \
                canonical JSON dataset, then writes a zlib copy of it.",
                )
                .arg(
                    arg!(-g --"gexf" <PATH>)
                        .required(false)
                        .help("GEXF exported by the layout tool")
                        .default_value(DEFAULT_LAYOUT_PATH),
                )
                .arg(
                    arg!(--"json-in" <PATH>)
                        .required(false)
                        .help("Canonical dataset to read")
                        .default_value(DEFAULT_DATASET_PATH),
                )
                .arg(
                    arg!(--"json-out" <PATH>)
                        .required(false)
                        .help("Where to write the merged dataset (default: overwrite --json-in)"),
                )
                .arg(
                    arg!(--"zlib-out" <PATH>)
                        .required(false)
                        .help("Compressed copy of the merged dataset")
                        .default_value(DEFAULT_COMPRESSED_PATH)
                        .conflicts_with("no-zlib"),
                )
                .arg(
                    arg!(--"no-zlib")
                        .required(false)
                        .help("Skip writing the compressed copy")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
