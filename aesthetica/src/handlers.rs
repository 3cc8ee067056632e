use aesthetica_core::builder::run_build;
use aesthetica_core::config::{BuildOptions, SyncConfig};
use aesthetica_core::sync::run_sync;
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// Expand a leading `~` and turn the result into a path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

fn path_arg(args: &ArgMatches, name: &str) -> Option<PathBuf> {
    args.get_one::<String>(name).map(|raw| expand_path(raw))
}

pub fn build_options_from_args(args: &ArgMatches) -> Result<BuildOptions, String> {
    let json_dir = path_arg(args, "json-dir").ok_or("--json-dir must be provided")?;
    let out_gexf = path_arg(args, "out-gexf").ok_or("--out-gexf must be provided")?;

    Ok(BuildOptions {
        json_dir,
        out_gexf,
        out_nodes_tsv: path_arg(args, "out-nodes-tsv"),
        out_edges_tsv: path_arg(args, "out-edges-tsv"),
    })
}

/// Start from the defaults and apply whatever the user passed
pub fn sync_config_from_args(args: &ArgMatches) -> SyncConfig {
    let mut config = SyncConfig::default();
    if let Some(path) = path_arg(args, "gexf") {
        config.layout_path = path;
    }
    if let Some(path) = path_arg(args, "json-in") {
        config.dataset_in = path;
    }
    // The merged dataset replaces its input unless told otherwise
    config.dataset_out = path_arg(args, "json-out").unwrap_or_else(|| config.dataset_in.clone());
    if let Some(path) = path_arg(args, "zlib-out") {
        config.compressed_out = path;
    }
    config.compress = !args.get_flag("no-zlib");
    config
}

pub fn init_logging(quiet: bool) {
    let level = if quiet { Level::WARN } else { Level::INFO };
    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}

fn spinner(quiet: bool, msg: &'static str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn fail(err: impl Display) -> ! {
    eprintln!("{} {}", "✗".red().bold(), err);
    std::process::exit(1);
}

fn print_done(msg: String) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn handle_build(args: &ArgMatches, quiet: bool) {
    let options = build_options_from_args(args).unwrap_or_else(|e| fail(e));

    if !quiet {
        println!(
            "{} Reading records from {}",
            "→".blue(),
            options.json_dir.display().to_string().bright_white()
        );
    }

    let pb = spinner(quiet, "Building graph...");
    let result = run_build(&options);
    pb.finish_and_clear();

    let summary = result.unwrap_or_else(|e| fail(e));
    if quiet {
        return;
    }

    print_done(format!(
        "Read {} records ({} skipped)",
        summary.records_read.to_string().cyan(),
        summary.records_skipped.to_string().yellow()
    ));
    print_done(format!(
        "Graph: {} nodes ({} dangling), {} edges",
        summary.nodes.to_string().cyan(),
        summary.dangling_nodes.to_string().cyan(),
        summary.edges.to_string().cyan()
    ));
    if let Some((id, degree)) = &summary.most_connected {
        print_done(format!(
            "Most connected: {} ({} neighbours)",
            id.bright_white(),
            degree.to_string().cyan()
        ));
    }
    for path in &summary.written {
        print_done(format!("Wrote {}", path.display().to_string().bright_white()));
    }
}

pub fn handle_sync(args: &ArgMatches, quiet: bool) {
    let config = sync_config_from_args(args);

    if !quiet {
        println!(
            "{} Layout: {}",
            "→".blue(),
            config.layout_path.display().to_string().bright_white()
        );
        println!(
            "{} Dataset: {}",
            "→".blue(),
            config.dataset_in.display().to_string().bright_white()
        );
    }

    let pb = spinner(quiet, "Synchronizing positions and sizes...");
    let result = run_sync(&config);
    pb.finish_and_clear();

    let summary = result.unwrap_or_else(|e| fail(e));
    if quiet {
        return;
    }

    print_done(format!(
        "Positions: {} loaded, {} applied",
        summary.positions_loaded.to_string().cyan(),
        summary.positions_applied.to_string().cyan()
    ));
    print_done(format!(
        "Sizes: {} applied from {} degree entries",
        summary.sizes_applied.to_string().cyan(),
        summary.degrees_computed.to_string().cyan()
    ));
    print_done(format!(
        "Wrote {}",
        summary.dataset_out.display().to_string().bright_white()
    ));
    if let Some((path, len)) = &summary.compressed {
        print_done(format!(
            "Wrote {} ({} bytes)",
            path.display().to_string().bright_white(),
            len.to_string().cyan()
        ));
    }
}
