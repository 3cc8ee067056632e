pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{build_options_from_args, expand_path, sync_config_from_args};
