pub mod builder;
pub mod compress;
pub mod config;
pub mod dataset;
pub mod document;
pub mod error;
pub mod export;
pub mod files;
pub mod model;
pub mod sync;

pub use error::{Error, Result};

use colored::Colorize;

const BANNER: &str = r#"
    ▄▀█ █▀▀ █▀ ▀█▀ █░█ █▀▀ ▀█▀ █ █▀▀ ▄▀█
    █▀█ ██▄ ▄█ ░█░ █▀█ ██▄ ░█░ █ █▄▄ █▀█"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_magenta().bold());
    println!(
        "    {} {}\n",
        "graph builder & layout sync".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
