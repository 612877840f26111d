//! Batch tools for poi-tools: map scraping, marker import, and coordinate
//! transforms, exposed through the `poi-tools` binary.

pub mod cli;
pub mod import;
pub mod scrape;
