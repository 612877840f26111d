//! CLI subcommand implementations for the poi-tools binary.

pub mod export_cmd;
pub mod flatten_cmd;
pub mod import_cmd;
pub mod output;
pub mod progress;
pub mod reverse_cmd;
pub mod scrape_cmd;
