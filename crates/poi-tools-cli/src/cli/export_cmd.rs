//! `poi-tools export`: reduce features to their name and raw coordinates.

use crate::cli::output::{self, Styled};
use anyhow::Result;
use clap::Args;
use poi_tools::geojson::{self, FeatureCollection};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// GeoJSON feature collection to read (`-` for stdin).
    #[arg(short, long, default_value = "input.geojson")]
    pub input: PathBuf,

    /// Where to write the `[{name, coordinates}]` list (`-` for stdout).
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the export command.
pub fn run(args: &ExportArgs) -> Result<()> {
    let collection: FeatureCollection = poi_tools::io::read_json(&args.input)?;
    let features = geojson::export_features(&collection)?;
    poi_tools::io::write_json(&args.output, &features, args.pretty)?;

    if output::is_json() {
        output::print_json_summary(
            &args.output,
            &serde_json::json!({
                "command": "export",
                "features": features.len(),
                "output": args.output.display().to_string(),
            }),
        );
    } else if !output::is_quiet() {
        let s = Styled::new();
        output::print_check(
            s.ok_sym(),
            "Exported:",
            &format!("{} features -> {}", features.len(), args.output.display()),
        );
    }
    Ok(())
}
