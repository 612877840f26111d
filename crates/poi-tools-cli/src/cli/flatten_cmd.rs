//! `poi-tools flatten`: collapse each feature's coordinates into swapped pairs.

use crate::cli::output::{self, Styled};
use anyhow::Result;
use clap::Args;
use poi_tools::geojson::{self, FeatureCollection, PairOrder};
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct FlattenArgs {
    /// GeoJSON feature collection to read (`-` for stdin).
    #[arg(short, long, default_value = "input.geojson")]
    pub input: PathBuf,

    /// Where to write the `[{name, coordinates}]` list (`-` for stdout).
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Keep each pair in source order instead of swapping it.
    #[arg(long)]
    pub keep_order: bool,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the flatten command.
pub fn run(args: &FlattenArgs) -> Result<()> {
    let collection: FeatureCollection = poi_tools::io::read_json(&args.input)?;
    let order = if args.keep_order {
        PairOrder::AsIs
    } else {
        PairOrder::Inverted
    };
    let features = geojson::flatten_features(&collection, order)?;
    poi_tools::io::write_json(&args.output, &features, args.pretty)?;

    let pairs: usize = features.iter().map(|f| f.coordinates.len()).sum();
    if output::is_json() {
        output::print_json_summary(
            &args.output,
            &serde_json::json!({
                "command": "flatten",
                "features": features.len(),
                "skipped": collection.features.len() - features.len(),
                "pairs": pairs,
                "output": args.output.display().to_string(),
            }),
        );
    } else if !output::is_quiet() {
        let s = Styled::new();
        output::print_check(
            s.ok_sym(),
            "Flattened:",
            &format!("{} features, {pairs} pairs -> {}", features.len(), args.output.display()),
        );
    }
    Ok(())
}
